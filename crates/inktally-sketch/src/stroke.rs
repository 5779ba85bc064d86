//! Stroke geometry: points, lines, path operations, and styling.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Point / Line
// ---------------------------------------------------------------------------

/// A 2D point in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
}

/// A straight line segment, the input geometry for every stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub from: Point,
    pub to: Point,
}

impl Line {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
        Line {
            from: Point::new(x1, y1),
            to: Point::new(x2, y2),
        }
    }

    /// Euclidean length of the segment.
    pub fn length(&self) -> f64 {
        let dx = self.to.x - self.from.x;
        let dy = self.to.y - self.from.y;
        (dx * dx + dy * dy).sqrt()
    }
}

// ---------------------------------------------------------------------------
// StrokeStyle
// ---------------------------------------------------------------------------

/// Visual styling for a stroke.
///
/// `roughness` and `bowing` only matter to the sketch backend; the plain
/// backend ignores them. Defaults match the original hand-drawn look:
/// stroke width 4, roughness 1.2, bowing 1.5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Line width in document units.
    pub stroke_width: f64,
    /// Jitter amplitude multiplier. Zero draws a near-exact line.
    pub roughness: f64,
    /// How far the line bows away from straight at its diverge points.
    pub bowing: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        StrokeStyle {
            stroke_width: 4.0,
            roughness: 1.2,
            bowing: 1.5,
        }
    }
}

// ---------------------------------------------------------------------------
// PathOp / Stroke
// ---------------------------------------------------------------------------

/// One drawing operation in a stroke's path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "op")]
pub enum PathOp {
    MoveTo { to: Point },
    LineTo { to: Point },
    /// Cubic Bezier curve to `to` with control points `c1` and `c2`.
    CurveTo { c1: Point, c2: Point, to: Point },
}

/// A renderable stroke: an ordered list of path operations plus its style.
///
/// Produced by a [`StrokeBackend`](crate::backend::StrokeBackend); consumed
/// by the scene's SVG writer via [`to_path_data`](Self::to_path_data).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub ops: Vec<PathOp>,
    pub style: StrokeStyle,
}

impl Stroke {
    /// Render the path operations as an SVG path `d` attribute string.
    pub fn to_path_data(&self) -> String {
        let mut d = String::new();
        for op in &self.ops {
            if !d.is_empty() {
                d.push(' ');
            }
            match op {
                PathOp::MoveTo { to } => {
                    d.push_str(&format!("M{:.2} {:.2}", to.x, to.y));
                }
                PathOp::LineTo { to } => {
                    d.push_str(&format!("L{:.2} {:.2}", to.x, to.y));
                }
                PathOp::CurveTo { c1, c2, to } => {
                    d.push_str(&format!(
                        "C{:.2} {:.2}, {:.2} {:.2}, {:.2} {:.2}",
                        c1.x, c1.y, c2.x, c2.y, to.x, to.y
                    ));
                }
            }
        }
        d
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_length() {
        let line = Line::new(0.0, 0.0, 3.0, 4.0);
        assert!((line.length() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn path_data_for_plain_segment() {
        let stroke = Stroke {
            ops: vec![
                PathOp::MoveTo { to: Point::new(1.0, 2.0) },
                PathOp::LineTo { to: Point::new(3.5, 4.25) },
            ],
            style: StrokeStyle::default(),
        };
        assert_eq!(stroke.to_path_data(), "M1.00 2.00 L3.50 4.25");
    }

    #[test]
    fn path_data_for_curve() {
        let stroke = Stroke {
            ops: vec![
                PathOp::MoveTo { to: Point::new(0.0, 0.0) },
                PathOp::CurveTo {
                    c1: Point::new(1.0, 1.0),
                    c2: Point::new(2.0, 2.0),
                    to: Point::new(3.0, 3.0),
                },
            ],
            style: StrokeStyle::default(),
        };
        assert_eq!(
            stroke.to_path_data(),
            "M0.00 0.00 C1.00 1.00, 2.00 2.00, 3.00 3.00"
        );
    }
}
