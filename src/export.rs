//! This module converts a machine description into the input syntax of the
//! autotool exercise checker, which expects numeric states and a Haskell
//! record literal.
//!
//! The rendition is pure presentation: it enumerates every rule, every
//! non-blank symbol appearing as an input or output symbol in the table, and
//! every state appearing in the table, and carries no behavioral contract
//! beyond that.

use std::collections::{BTreeSet, HashMap};

use crate::types::{Description, Shift, State, Symbol, BLANK};

/// Renders `description` in autotool syntax.
///
/// States are renumbered deterministically: the terminal state becomes `0`,
/// the starting state `1`, and the remaining states follow in sorted label
/// order. Rule rows are sorted, so equal descriptions always serialize to
/// the same text.
pub fn autotool_description(description: &Description) -> String {
    let numbering = state_numbering(description);

    let mut symbols: BTreeSet<Symbol> = BTreeSet::new();
    for (key, transition) in description.table.iter() {
        if key.read != BLANK {
            symbols.insert(key.read);
        }
        if transition.write != BLANK {
            symbols.insert(transition.write);
        }
    }
    let input_alphabet: String = symbols.iter().collect();
    let work_alphabet = format!("{input_alphabet}{BLANK}");

    let state_ids = (0..numbering.len())
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let mut rows: Vec<((usize, Symbol), String)> = description
        .table
        .iter()
        .map(|(key, transition)| {
            let from = numbering[&key.state];
            let to = numbering[&transition.next];
            let letter = match transition.shift {
                Shift::Left => 'L',
                Shift::Right => 'R',
                Shift::Stay => 'O',
            };
            let row = format!(
                "(({:?}, {}), ({:?}, {}, {}))",
                key.read, from, transition.write, to, letter
            );

            ((from, key.read), row)
        })
        .collect();
    rows.sort();

    let tafel = if rows.is_empty() {
        "        []".to_string()
    } else {
        let mut section = String::new();
        for (i, (_, row)) in rows.iter().enumerate() {
            section.push_str(if i == 0 { "        [ " } else { "        , " });
            section.push_str(row);
            section.push('\n');
        }
        section.push_str("        ]");
        section
    };

    format!(
        "Maschine\n    \
         {{ eingabealphabet = mkSet {input_alphabet:?}\n    \
         , arbeitsalphabet = mkSet {work_alphabet:?}\n    \
         , leerzeichen = {BLANK:?}\n    \
         , zustandsmenge = mkSet [{state_ids}]\n    \
         , startzustand = {start}\n    \
         , endzustandsmenge = mkSet [0]\n    \
         , tafel = listToFM\n{tafel}\n    \
         }}\n",
        start = numbering[&description.initial_state],
    )
}

/// Assigns every state a stable numeric identifier: `HALT` is 0, the
/// starting state 1, and all other states in the table follow in sorted
/// label order.
fn state_numbering(description: &Description) -> HashMap<State, usize> {
    let mut numbering = HashMap::new();
    numbering.insert(State::Halted, 0);

    let mut seen: BTreeSet<State> = BTreeSet::new();
    for (key, transition) in description.table.iter() {
        seen.insert(key.state.clone());
        seen.insert(transition.next.clone());
    }

    for state in std::iter::once(description.initial_state.clone()).chain(seen) {
        let id = numbering.len();
        numbering.entry(state).or_insert(id);
    }

    numbering
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_rules;
    use crate::types::TransitionTable;

    fn description(initial_state: &str, rules: &[&str]) -> Description {
        Description {
            initial_state: State::from(initial_state),
            tape: Vec::new(),
            table: parse_rules(rules.iter().copied()).unwrap(),
        }
    }

    #[test]
    fn test_write_one_description() {
        let rendered = autotool_description(&description("s", &["(BLANK, s, 1, HALT, R)"]));

        assert_eq!(
            rendered,
            "Maschine\n    \
             { eingabealphabet = mkSet \"1\"\n    \
             , arbeitsalphabet = mkSet \"1 \"\n    \
             , leerzeichen = ' '\n    \
             , zustandsmenge = mkSet [0, 1]\n    \
             , startzustand = 1\n    \
             , endzustandsmenge = mkSet [0]\n    \
             , tafel = listToFM\n        \
             [ ((' ', 1), ('1', 0, R))\n        \
             ]\n    \
             }\n"
        );
    }

    #[test]
    fn test_state_numbering_is_deterministic() {
        let description = description(
            "q_0",
            &[
                "(BLANK, q_0, 1, q_1, R)",
                "(1, q_0, 1, q_1, L)",
                "(BLANK, q_1, 1, q_0, L)",
                "(1, q_1, 1, HALT, R)",
            ],
        );
        let numbering = state_numbering(&description);

        assert_eq!(numbering[&State::Halted], 0);
        assert_eq!(numbering[&State::from("q_0")], 1);
        assert_eq!(numbering[&State::from("q_1")], 2);
    }

    #[test]
    fn test_every_rule_appears_once() {
        let rendered = autotool_description(&description(
            "q_0",
            &[
                "(BLANK, q_0, 1, q_1, R)",
                "(1, q_0, 1, q_1, L)",
                "(BLANK, q_1, 1, q_0, L)",
                "(1, q_1, 1, HALT, R)",
            ],
        ));

        assert_eq!(rendered.matches("((").count(), 4);
        assert!(rendered.contains("((' ', 1), ('1', 2, R))"));
        assert!(rendered.contains("(('1', 1), ('1', 2, L))"));
        assert!(rendered.contains("((' ', 2), ('1', 1, L))"));
        assert!(rendered.contains("(('1', 2), ('1', 0, R))"));
    }

    #[test]
    fn test_stay_shift_renders_as_o() {
        let rendered = autotool_description(&description("s", &["(a, s, a, s, N)"]));
        assert!(rendered.contains("(('a', 1), ('a', 1, O))"));
    }

    #[test]
    fn test_blank_is_excluded_from_the_input_alphabet() {
        let rendered = autotool_description(&description("s", &["(BLANK, s, BLANK, s, R)"]));

        assert!(rendered.contains("eingabealphabet = mkSet \"\""));
        assert!(rendered.contains("arbeitsalphabet = mkSet \" \""));
    }

    #[test]
    fn test_empty_table_renders_empty_tafel() {
        let empty = Description {
            initial_state: State::from("s"),
            tape: Vec::new(),
            table: TransitionTable::new(),
        };
        let rendered = autotool_description(&empty);

        assert!(rendered.contains("tafel = listToFM\n        []"));
        assert!(rendered.contains("zustandsmenge = mkSet [0, 1]"));
        assert!(rendered.contains("startzustand = 1"));
    }

    #[test]
    fn test_machine_starting_in_halt_numbers_start_zero() {
        let halted = Description {
            initial_state: State::Halted,
            tape: Vec::new(),
            table: TransitionTable::new(),
        };
        let rendered = autotool_description(&halted);

        assert!(rendered.contains("startzustand = 0"));
        assert!(rendered.contains("zustandsmenge = mkSet [0]"));
    }
}
