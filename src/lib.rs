//! This crate implements a single-tape, single-head deterministic Turing
//! machine: an unbounded blank-defaulted tape, a transition interpreter with
//! an explicit halting state, a line-based description format, a converter
//! to autotool syntax, and a collection of embedded demo machines.

pub mod export;
pub mod loader;
pub mod machine;
pub mod parser;
pub mod programs;
pub mod tape;
pub mod types;

/// Re-exports the `Rule` enum from the parser module, used by the `pest` grammar.
pub use crate::parser::Rule;
/// Re-exports the autotool conversion function from the export module.
pub use export::autotool_description;
/// Re-exports the `DescriptionLoader` struct from the loader module.
pub use loader::DescriptionLoader;
/// Re-exports the `Machine` struct and step outcome from the machine module.
pub use machine::{Machine, Step};
/// Re-exports the rule-string parsing functions from the parser module.
pub use parser::{parse_rule, parse_rules};
/// Re-exports the `Tape` struct from the tape module.
pub use tape::Tape;
/// Re-exports the core data types from the types module.
pub use types::{
    Description, MachineError, Shift, State, Symbol, Transition, TransitionKey, TransitionTable,
    BLANK, BLANK_TOKEN, HALT_TOKEN,
};
