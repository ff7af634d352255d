//! This module implements the transition interpreter: a [`Machine`] owns one
//! tape, one current state, and an immutable transition table, and rewrites
//! the tape one step at a time until it reaches the terminal state.

use std::fmt;

use crate::tape::Tape;
use crate::types::{Description, Shift, State, Symbol, TransitionKey, TransitionTable};

/// The outcome of a single interpreter step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A transition was applied and the machine can continue.
    Continue,
    /// The machine is halted; further steps are no-ops.
    Halted,
}

/// A single-tape deterministic Turing machine.
///
/// Constructed once from a starting state, a transition table, and the
/// initial tape content; each [`step`](Machine::step) mutates tape and state
/// in place. Once the state is [`State::Halted`] the machine is inert.
pub struct Machine {
    state: State,
    tape: Tape,
    table: TransitionTable,
    step_count: usize,
}

impl Machine {
    /// Creates a machine in `initial_state` with `input` written left to
    /// right on an otherwise blank tape and the head on the first cell.
    ///
    /// The table is never mutated after being handed over; starting in
    /// [`State::Halted`] is legal and yields a machine that performs zero
    /// steps.
    pub fn new(
        initial_state: State,
        table: TransitionTable,
        input: impl IntoIterator<Item = Symbol>,
    ) -> Self {
        Self {
            state: initial_state,
            tape: Tape::with_content(input),
            table,
            step_count: 0,
        }
    }

    /// Executes a single step.
    ///
    /// Looks up the (symbol under the head, current state) configuration in
    /// the table. If a rule is defined, the machine writes the rule's symbol
    /// at the pre-move head position, moves the head per the rule's shift,
    /// and only then switches to the next state. If no rule is defined, the
    /// machine halts; an undefined configuration is normal termination, not
    /// an error.
    pub fn step(&mut self) -> Step {
        if self.halted() {
            return Step::Halted;
        }

        let key = TransitionKey {
            read: self.tape.read(),
            state: self.state.clone(),
        };

        match self.table.get(&key) {
            Some(transition) => {
                let transition = transition.clone();
                self.tape.write(transition.write);
                // A Stay shift skips the move entirely.
                match transition.shift {
                    Shift::Stay => {}
                    shift => self.tape.move_head(shift),
                }
                self.state = transition.next;
                self.step_count += 1;
            }
            None => {
                self.state = State::Halted;
            }
        }

        if self.halted() {
            Step::Halted
        } else {
            Step::Continue
        }
    }

    /// Steps the machine until it halts or `max_steps` steps were attempted.
    ///
    /// The budget is always caller-supplied; the machine itself never caps
    /// execution, since the formalism permits non-halting machines.
    pub fn run(&mut self, max_steps: usize) -> Step {
        for _ in 0..max_steps {
            if self.step() == Step::Halted {
                return Step::Halted;
            }
        }

        Step::Continue
    }

    /// True iff the machine reached the terminal state.
    pub fn halted(&self) -> bool {
        self.state.is_halted()
    }

    /// The current state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// A read-only view of the tape, for drivers and renderers.
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// The transition table the machine runs on.
    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// The number of transitions applied so far. The implicit halt on an
    /// undefined configuration rewrites nothing and is not counted.
    pub fn step_count(&self) -> usize {
        self.step_count
    }
}

impl From<Description> for Machine {
    fn from(description: Description) -> Self {
        Machine::new(description.initial_state, description.table, description.tape)
    }
}

impl fmt::Display for Machine {
    /// Renders a two-line snapshot: the materialized tape cells, then a
    /// caret at the head's column followed by the current state name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.tape)?;
        write!(f, "{}^ {}", " ".repeat(self.tape.head_offset()), self.state)
    }
}
