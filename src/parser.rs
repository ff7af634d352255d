//! This module parses transition rule strings with a `pest` grammar and
//! assembles them into a [`TransitionTable`].

use pest::iterators::Pairs;
use pest::Parser as PestParser;
use pest_derive::Parser as PestParser;

use crate::types::{
    MachineError, Shift, State, Symbol, Transition, TransitionKey, TransitionTable, BLANK,
    BLANK_TOKEN,
};

/// Derives a `PestParser` for the rule-string grammar in `grammar.pest`.
#[derive(PestParser)]
#[grammar = "grammar.pest"]
pub struct RuleParser;

/// Parses one rule string of the shape
/// `(readSymbol, currentState, writeSymbol, nextState, shift)`.
///
/// Symbol fields are either the token `BLANK` or exactly one character; the
/// shift letter is `L`, `R`, or `N`. Anything else is reported as
/// [`MachineError::MalformedRule`]: a missing parenthesis, a field count
/// other than five, a multi-character symbol, or an unknown shift letter.
pub fn parse_rule(input: &str) -> Result<(TransitionKey, Transition), MachineError> {
    let line = input.trim();
    let parsed = RuleParser::parse(Rule::rule_line, line)
        .map_err(|e| MachineError::MalformedRule {
            rule: line.to_string(),
            source: Box::new(e),
        })?
        .next()
        .unwrap();

    let mut pairs = parsed.into_inner();
    let read = parse_symbol(&mut pairs);
    let current = parse_state(&mut pairs);
    let write = parse_symbol(&mut pairs);
    let next = parse_state(&mut pairs);
    let shift = match pairs.next().unwrap().as_str() {
        "L" => Shift::Left,
        "R" => Shift::Right,
        // The grammar admits no letter besides L, R, and N.
        _ => Shift::Stay,
    };

    Ok((
        TransitionKey {
            read,
            state: current,
        },
        Transition { write, next, shift },
    ))
}

/// Parses an ordered collection of rule strings into a [`TransitionTable`].
///
/// Fails with [`MachineError::MalformedRule`] on the first unparsable rule
/// and with [`MachineError::DuplicateTransitionKey`] when two rules fire on
/// the same (symbol, state) configuration.
pub fn parse_rules<'a>(
    rules: impl IntoIterator<Item = &'a str>,
) -> Result<TransitionTable, MachineError> {
    let mut entries = Vec::new();
    for rule in rules {
        entries.push(parse_rule(rule)?);
    }

    TransitionTable::from_entries(entries)
}

/// Reads the next `symbol` pair: the `BLANK` token or a single character.
fn parse_symbol(pairs: &mut Pairs<Rule>) -> Symbol {
    let text = pairs.next().unwrap().as_str();
    if text == BLANK_TOKEN {
        BLANK
    } else {
        text.chars().next().unwrap()
    }
}

/// Reads the next `state` pair into a [`State`].
fn parse_state(pairs: &mut Pairs<Rule>) -> State {
    State::from(pairs.next().unwrap().as_str())
}
