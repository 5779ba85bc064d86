//! Five-per-row grid layout for tally marks.
//!
//! Positions are a pure function of a mark's ordinal: column within the row
//! for vertical strokes, a full-row span for the diagonal closer. The
//! numbers reproduce the original board's look (scaled up 25%).

use inktally_core::mark::{Mark, Orientation, GROUP_SIZE};
use inktally_sketch::stroke::Line;
use serde::{Deserialize, Serialize};

/// Grid geometry for one tally board.
///
/// The defaults match the original hand-tuned board. All distances are in
/// SVG user units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    /// Uniform scale factor applied to spacing and row height.
    pub scale: f64,
    /// X of the first column's vertical strokes.
    pub base_x: f64,
    /// Unscaled distance between columns.
    pub spacing: f64,
    /// Unscaled distance between rows.
    pub row_height: f64,
    /// Y of the top of row zero's vertical strokes.
    pub mark_top: f64,
    /// Unscaled stroke height.
    pub mark_length: f64,
    /// How far the diagonal closer overhangs the row on each end.
    pub closer_overhang: f64,
}

impl Default for GridLayout {
    fn default() -> Self {
        GridLayout {
            scale: 1.25,
            base_x: 20.0,
            spacing: 18.0,
            row_height: 30.0,
            mark_top: 15.0,
            mark_length: 25.0,
            closer_overhang: 5.0,
        }
    }
}

impl GridLayout {
    /// The line a mark occupies in board coordinates.
    ///
    /// Vertical marks sit in their column; the diagonal closer spans the
    /// whole row with a small overhang, falling left-to-right across the
    /// four strokes it crosses out.
    pub fn line_for(&self, mark: &Mark) -> Line {
        match mark.orientation {
            Orientation::Vertical => {
                let x = self.base_x + mark.column() as f64 * self.spacing * self.scale;
                let y1 = mark.row() as f64 * self.row_height * self.scale + self.mark_top;
                let y2 = y1 + self.mark_length * self.scale;
                Line::new(x, y1, x, y2)
            }
            Orientation::DiagonalCloser => {
                let x1 = self.base_x - self.closer_overhang;
                let y1 = mark.row() as f64 * self.row_height * self.scale + self.mark_top - 3.0;
                let x2 = self.base_x
                    + (GROUP_SIZE - 1) as f64 * self.spacing * self.scale
                    + self.closer_overhang;
                let y2 = y1 + self.mark_length * self.scale;
                Line::new(x1, y1, x2, y2)
            }
        }
    }

    /// Board size needed to show `count` marks, with a small margin.
    pub fn board_size(&self, count: u32) -> (f64, f64) {
        let rows = count.div_ceil(GROUP_SIZE).max(1);
        let width = self.base_x + GROUP_SIZE as f64 * self.spacing * self.scale;
        let height = rows as f64 * self.row_height * self.scale + self.mark_top;
        (width, height)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
