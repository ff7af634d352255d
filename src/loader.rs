//! This module provides the `DescriptionLoader` struct, responsible for
//! loading machine descriptions from files and strings.
//!
//! The format is line-based: lines beginning with `#` are comments; the
//! first non-comment line is the starting state; the line after it, taken
//! verbatim, is the initial tape content (each character one symbol); every
//! remaining non-empty line is a transition rule string.

use std::fs;
use std::path::Path;

use crate::parser::parse_rules;
use crate::types::{Description, MachineError, State, Symbol};

/// `DescriptionLoader` is a utility struct for loading machine descriptions
/// from `.tm` files or in-memory strings.
pub struct DescriptionLoader;

impl DescriptionLoader {
    /// Loads a machine description from the specified file path.
    ///
    /// # Returns
    ///
    /// * `Ok(Description)` if the file is successfully read and parsed.
    /// * `Err(MachineError::SourceUnavailable)` if the file cannot be read.
    /// * Any parse failure from [`load_description_from_string`](Self::load_description_from_string).
    pub fn load_description(path: &Path) -> Result<Description, MachineError> {
        let content = fs::read_to_string(path).map_err(|e| {
            MachineError::SourceUnavailable(format!("{}: {}", path.display(), e))
        })?;

        Self::load_description_from_string(&content)
    }

    /// Parses a machine description from string content.
    ///
    /// Blank lines before the starting-state line are skipped; the tape line
    /// is the single line immediately after it, so an empty line there means
    /// an empty initial tape. Blank lines between rules are ignored.
    pub fn load_description_from_string(content: &str) -> Result<Description, MachineError> {
        let mut lines = content.lines().filter(|line| !line.starts_with('#'));

        let initial_state = lines
            .by_ref()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .ok_or_else(|| {
                MachineError::MalformedDescription("missing starting state line".to_string())
            })?;
        let initial_state = State::from(initial_state);

        // Taken verbatim: a blank symbol in the initial content is a space.
        let tape: Vec<Symbol> = lines
            .next()
            .map(|line| line.chars().collect())
            .unwrap_or_default();

        let table = parse_rules(lines.filter(|line| !line.trim().is_empty()))?;

        Ok(Description {
            initial_state,
            tape,
            table,
        })
    }
}
