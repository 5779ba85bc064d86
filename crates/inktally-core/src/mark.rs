//! A single tally mark and the five-per-group convention.
//!
//! Marks are laid out five to a row: four vertical strokes, then a diagonal
//! stroke crossing out the row to close the group. The orientation is a pure
//! function of the mark's ordinal, so removal in LIFO order (the ledger's
//! policy) keeps the grouping valid at every count.

use serde::{Deserialize, Serialize};

/// Number of marks in one closed tally group.
pub const GROUP_SIZE: u32 = 5;

// ---------------------------------------------------------------------------
// Orientation
// ---------------------------------------------------------------------------

/// How a mark is drawn: an upright stroke, or the diagonal stroke that
/// crosses out a completed group of five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// An upright stroke, one of the first four in its group.
    Vertical,
    /// The fifth stroke, drawn diagonally across the whole row.
    DiagonalCloser,
}

impl Orientation {
    /// Orientation for the mark at the given ordinal.
    ///
    /// Every fifth mark closes its group: ordinals 4, 9, 14, ... are
    /// diagonal, everything else is vertical.
    pub fn for_ordinal(ordinal: u32) -> Orientation {
        if (ordinal + 1) % GROUP_SIZE == 0 && ordinal > 0 {
            Orientation::DiagonalCloser
        } else {
            Orientation::Vertical
        }
    }
}

// ---------------------------------------------------------------------------
// Mark
// ---------------------------------------------------------------------------

/// One counted event, rendered as a single stroke.
///
/// A mark is immutable once created except for the one-time [`entered`]
/// visual flag, which the presentation layer flips after the mark's entrance
/// transition has been scheduled. The flag never influences tally state.
///
/// [`entered`]: Mark::entered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mark {
    /// Position within the owning tally at creation time. Ordinals are
    /// contiguous from zero; the ledger's LIFO removal keeps them so.
    pub ordinal: u32,
    /// Stroke orientation, derived from the ordinal.
    pub orientation: Orientation,
    /// Whether the entrance transition has already been scheduled.
    pub entered: bool,
}

impl Mark {
    /// Create the mark for the given ordinal, not yet entered.
    pub fn new(ordinal: u32) -> Mark {
        Mark {
            ordinal,
            orientation: Orientation::for_ordinal(ordinal),
            entered: false,
        }
    }

    /// Zero-based row in the five-per-row grid.
    pub fn row(&self) -> u32 {
        self.ordinal / GROUP_SIZE
    }

    /// Zero-based column within the row.
    pub fn column(&self) -> u32 {
        self.ordinal % GROUP_SIZE
    }

    /// Whether this mark closes a group of five.
    pub fn is_closer(&self) -> bool {
        self.orientation == Orientation::DiagonalCloser
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_exactly_at_every_fifth_ordinal() {
        for ordinal in 0..30 {
            let expected = matches!(ordinal, 4 | 9 | 14 | 19 | 24 | 29);
            assert_eq!(
                Orientation::for_ordinal(ordinal) == Orientation::DiagonalCloser,
                expected,
                "ordinal {ordinal}"
            );
        }
    }

    #[test]
    fn first_group_rows_and_columns() {
        let m = Mark::new(0);
        assert_eq!((m.row(), m.column()), (0, 0));
        assert!(!m.is_closer());

        let m = Mark::new(4);
        assert_eq!((m.row(), m.column()), (0, 4));
        assert!(m.is_closer());

        let m = Mark::new(7);
        assert_eq!((m.row(), m.column()), (1, 2));
        assert!(!m.is_closer());
    }

    #[test]
    fn new_marks_start_unentered() {
        assert!(!Mark::new(12).entered);
    }
}
