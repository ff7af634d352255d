//! This module defines the core data structures of the simulator: symbols,
//! states, shifts, transition rules, the transition table, and the error type
//! shared by the construction-time interfaces.

use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

use crate::Rule;

/// One atomic alphabet element written on the tape.
pub type Symbol = char;

/// The reserved symbol denoting an empty tape cell.
pub const BLANK: Symbol = ' ';
/// How a blank symbol is spelled in rule strings, where a literal space
/// would be unreadable.
pub const BLANK_TOKEN: &str = "BLANK";
/// How the terminal state is spelled in rule strings and descriptions.
pub const HALT_TOKEN: &str = "HALT";

/// A machine configuration label.
///
/// The terminal state is a dedicated variant rather than a reserved label,
/// so no user-supplied state name can collide with it. The textual formats
/// spell it [`HALT_TOKEN`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum State {
    /// An ordinary, named state.
    Running(String),
    /// The unique terminal state; it has no outgoing transitions.
    Halted,
}

impl State {
    /// True iff this is the terminal state.
    pub fn is_halted(&self) -> bool {
        matches!(self, State::Halted)
    }
}

impl From<&str> for State {
    /// Interprets [`HALT_TOKEN`] as the terminal state and any other token
    /// as a named state.
    fn from(token: &str) -> Self {
        if token == HALT_TOKEN {
            State::Halted
        } else {
            State::Running(token.to_string())
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Running(label) => f.write_str(label),
            State::Halted => f.write_str(HALT_TOKEN),
        }
    }
}

/// The head movement performed after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shift {
    /// Move the head one cell to the left.
    Left,
    /// Move the head one cell to the right.
    Right,
    /// Keep the head where it is (the `N` shift letter).
    Stay,
}

/// The configuration a transition rule fires on: the symbol under the head
/// and the current state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionKey {
    /// The symbol read from the tape.
    pub read: Symbol,
    /// The state the machine is in.
    pub state: State,
}

/// The effect of a transition rule: what to write, where to go, and how to
/// move the head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// The symbol written at the pre-move head position.
    pub write: Symbol,
    /// The state the machine switches to after the write and the move.
    pub next: State,
    /// The head movement.
    pub shift: Shift,
}

/// The static, deterministic rule set of a machine.
///
/// Immutable after construction; lookups never mutate it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransitionTable {
    rules: HashMap<TransitionKey, Transition>,
}

impl TransitionTable {
    /// Creates an empty table. A machine driven by it halts on its first step.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(key, transition)` entries.
    ///
    /// Two entries with the same key are rejected with
    /// [`MachineError::DuplicateTransitionKey`] rather than silently
    /// resolved; the textual format documents no collision policy.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (TransitionKey, Transition)>,
    ) -> Result<Self, MachineError> {
        let mut rules = HashMap::new();

        for (key, transition) in entries {
            match rules.entry(key) {
                Entry::Occupied(occupied) => {
                    let key = occupied.key();
                    return Err(MachineError::DuplicateTransitionKey {
                        read: key.read,
                        state: key.state.clone(),
                    });
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(transition);
                }
            }
        }

        Ok(Self { rules })
    }

    /// Looks up the transition for a configuration, if one is defined.
    pub fn get(&self, key: &TransitionKey) -> Option<&Transition> {
        self.rules.get(key)
    }

    /// Iterates over all rules in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&TransitionKey, &Transition)> {
        self.rules.iter()
    }

    /// Returns the number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True iff the table holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// A complete machine description as produced by the loader: the triple a
/// [`Machine`](crate::machine::Machine) is constructed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Description {
    /// The state the machine starts in.
    pub initial_state: State,
    /// The initial tape content, placed left to right with the head on the
    /// first symbol.
    pub tape: Vec<Symbol>,
    /// The transition table.
    pub table: TransitionTable,
}

/// Errors reported while constructing a machine from its textual description.
///
/// All of these are deterministic, data-dependent construction failures; a
/// successfully constructed machine cannot fail during execution (an
/// undefined configuration halts it instead).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MachineError {
    /// A rule string that does not match the documented
    /// `(read, state, write, next, shift)` shape.
    #[error("malformed rule {rule:?}: {source}")]
    MalformedRule {
        /// The offending rule string, trimmed.
        rule: String,
        /// The underlying grammar error.
        #[source]
        source: Box<pest::error::Error<Rule>>,
    },
    /// Two rules fire on the same (symbol, state) configuration.
    #[error("duplicate transition for ({read:?}, {state})")]
    DuplicateTransitionKey {
        /// The symbol both rules read.
        read: Symbol,
        /// The state both rules fire in.
        state: State,
    },
    /// The description source could not be opened or read.
    #[error("cannot read machine description: {0}")]
    SourceUnavailable(String),
    /// The description is readable but structurally incomplete.
    #[error("malformed description: {0}")]
    MalformedDescription(String),
}
