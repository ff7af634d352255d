//! This module implements the unbounded, blank-defaulted tape the machine
//! reads and writes through a single head.
//!
//! The tape only materializes the cells actually visited: it starts as a
//! single blank cell and grows by one cell whenever the head moves past
//! either end. A double-ended queue plus a head index gives the same
//! amortized O(1) boundary extension as the classic linked-list-with-iterator
//! realization, without its iterator-invalidation hazards.

use std::collections::VecDeque;
use std::fmt;

use crate::types::{Shift, Symbol, BLANK};

/// The tape of a Turing machine: a growable sequence of symbols with a
/// single read/write head.
///
/// There is deliberately no structural equality on `Tape`; the only
/// sanctioned comparison is [`Tape::has_equal_content`], which ignores head
/// position and surrounding blank padding.
#[derive(Debug, Clone)]
pub struct Tape {
    cells: VecDeque<Symbol>,
    head: usize,
}

impl Tape {
    /// Creates an empty tape: one materialized blank cell with the head on it.
    pub fn new() -> Self {
        Self::with_content([])
    }

    /// Creates a tape holding `symbols` left to right, head on the first
    /// cell. An empty sequence yields the canonical empty tape.
    pub fn with_content(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        let mut cells: VecDeque<Symbol> = symbols.into_iter().collect();
        if cells.is_empty() {
            cells.push_back(BLANK);
        }

        Self { cells, head: 0 }
    }

    /// Returns the symbol under the head.
    pub fn read(&self) -> Symbol {
        self.cells[self.head]
    }

    /// Writes `symbol` at the head position.
    pub fn write(&mut self, symbol: Symbol) {
        self.cells[self.head] = symbol;
    }

    /// Moves the head one cell, materializing a blank cell when the move
    /// crosses the boundary of the tape. `Shift::Stay` issues no movement.
    pub fn move_head(&mut self, shift: Shift) {
        match shift {
            Shift::Left => {
                if self.head == 0 {
                    self.cells.push_front(BLANK);
                } else {
                    self.head -= 1;
                }
            }
            Shift::Right => {
                self.head += 1;
                if self.head == self.cells.len() {
                    self.cells.push_back(BLANK);
                }
            }
            Shift::Stay => {}
        }
    }

    /// True iff every materialized cell is blank, i.e. no non-blank symbol
    /// survives on the tape.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&symbol| symbol == BLANK)
    }

    /// Compares the non-blank spans of two tapes element-wise.
    ///
    /// Tapes differing only in head position or in leading/trailing blank
    /// padding are equal under this comparison.
    pub fn has_equal_content(&self, other: &Tape) -> bool {
        self.trimmed().eq(other.trimmed())
    }

    /// The head's offset from the first materialized cell, for rendering.
    pub fn head_offset(&self) -> usize {
        self.head
    }

    /// The number of materialized cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Iterates over all materialized cells, leftmost first.
    pub fn cells(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.cells.iter().copied()
    }

    /// The non-blank span as a string, trimmed of leading and trailing
    /// blank runs.
    pub fn content(&self) -> String {
        self.trimmed().collect()
    }

    fn trimmed(&self) -> impl Iterator<Item = Symbol> + '_ {
        let first = self.cells.iter().position(|&symbol| symbol != BLANK);
        let last = self.cells.iter().rposition(|&symbol| symbol != BLANK);
        let (start, end) = match (first, last) {
            (Some(first), Some(last)) => (first, last + 1),
            _ => (0, 0),
        };

        self.cells.iter().skip(start).take(end - start).copied()
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Tape {
    /// Renders every materialized cell, blanks included.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.cells {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_tape_reads_blank() {
        let tape = Tape::new();
        assert_eq!(tape.read(), BLANK);
    }

    #[test]
    fn test_tape_of_all_blanks_is_empty() {
        let mut tape = Tape::new();
        assert!(tape.is_empty());

        tape.write(BLANK);
        tape.move_head(Shift::Right);
        tape.write(BLANK);
        assert!(tape.is_empty());
    }

    #[test]
    fn test_is_empty_iff_equal_to_canonical_empty_tape() {
        let mut tape = Tape::new();
        assert!(tape.is_empty());
        assert!(tape.has_equal_content(&Tape::new()));

        tape.write('1');
        assert!(!tape.is_empty());
        assert!(!tape.has_equal_content(&Tape::new()));

        tape.write(BLANK);
        assert!(tape.is_empty());
        assert!(tape.has_equal_content(&Tape::new()));
    }

    #[test]
    fn test_content_equality_ignores_blank_padding() {
        let padded = Tape::with_content([BLANK, '1', BLANK, '1', BLANK]);
        let bare = Tape::with_content(['1', BLANK, '1']);

        assert!(padded.has_equal_content(&bare));
        assert!(bare.has_equal_content(&padded));
        assert!(padded.has_equal_content(&padded));
    }

    #[test]
    fn test_content_equality_detects_longer_span() {
        let longer = Tape::with_content(['1', BLANK, '1', '1']);
        let shorter = Tape::with_content(['1', BLANK, '1']);

        assert!(!longer.has_equal_content(&shorter));
        assert!(!shorter.has_equal_content(&longer));
    }

    #[test]
    fn test_content_equality_ignores_head_position() {
        let mut moved = Tape::with_content(['1', '1']);
        moved.move_head(Shift::Right);
        let still = Tape::with_content(['1', '1']);

        assert!(moved.has_equal_content(&still));
    }

    #[test]
    fn test_move_left_then_right_restores_position() {
        let mut tape = Tape::with_content("abc".chars());
        tape.move_head(Shift::Right);
        assert_eq!(tape.read(), 'b');

        tape.move_head(Shift::Left);
        assert_eq!(tape.read(), 'a');
        tape.move_head(Shift::Right);
        assert_eq!(tape.read(), 'b');
        assert_eq!(tape.content(), "abc");
        assert_eq!(tape.len(), 3);
    }

    #[test]
    fn test_move_left_at_boundary_grows_one_blank_cell() {
        let mut tape = Tape::with_content("abc".chars());
        assert_eq!(tape.len(), 3);

        tape.move_head(Shift::Left);
        assert_eq!(tape.len(), 4);
        assert_eq!(tape.read(), BLANK);
        assert_eq!(tape.head_offset(), 0);

        // Moving back right lands on the original cell; the non-blank span
        // is unaffected by the extra boundary cell.
        tape.move_head(Shift::Right);
        assert_eq!(tape.read(), 'a');
        assert_eq!(tape.content(), "abc");
    }

    #[test]
    fn test_move_right_at_boundary_grows_one_blank_cell() {
        let mut tape = Tape::new();
        tape.write('x');
        tape.move_head(Shift::Right);

        assert_eq!(tape.len(), 2);
        assert_eq!(tape.read(), BLANK);
        assert_eq!(tape.head_offset(), 1);
        assert_eq!(tape.content(), "x");
    }

    #[test]
    fn test_stay_issues_no_movement() {
        let mut tape = Tape::with_content("ab".chars());
        tape.move_head(Shift::Stay);

        assert_eq!(tape.head_offset(), 0);
        assert_eq!(tape.len(), 2);
        assert_eq!(tape.read(), 'a');
    }

    #[test]
    fn test_write_then_read() {
        let mut tape = Tape::new();
        tape.write('1');
        assert_eq!(tape.read(), '1');
        assert_eq!(tape.content(), "1");
    }

    #[test]
    fn test_display_renders_materialized_cells() {
        let mut tape = Tape::with_content("ab".chars());
        tape.move_head(Shift::Left);

        assert_eq!(tape.to_string(), " ab");
    }
}
