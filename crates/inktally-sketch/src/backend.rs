//! Stroke backends: the hand-drawn sketcher and the exact-line fallback.
//!
//! The backend is a strategy chosen once at startup. Everything downstream
//! holds a `&dyn StrokeBackend` (or a boxed one) and never probes for
//! capabilities at draw time. Both backends take the same line in and honor
//! the same endpoints; only the path between them differs.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::stroke::{Line, PathOp, Point, Stroke, StrokeStyle};

// ---------------------------------------------------------------------------
// StrokeBackend
// ---------------------------------------------------------------------------

/// Turns a line into a drawable stroke.
///
/// Implementations must be deterministic: the same `(line, style, seed)`
/// always produces the same operations.
pub trait StrokeBackend {
    /// Build the stroke for one line.
    fn stroke(&self, line: Line, style: &StrokeStyle, seed: u64) -> Stroke;

    /// Short name for logging.
    fn name(&self) -> &'static str;
}

// ---------------------------------------------------------------------------
// PlainBackend
// ---------------------------------------------------------------------------

/// The fallback: a single exact segment, no jitter.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainBackend;

impl StrokeBackend for PlainBackend {
    fn stroke(&self, line: Line, style: &StrokeStyle, _seed: u64) -> Stroke {
        Stroke {
            ops: vec![
                PathOp::MoveTo { to: line.from },
                PathOp::LineTo { to: line.to },
            ],
            style: style.clone(),
        }
    }

    fn name(&self) -> &'static str {
        "plain"
    }
}

// ---------------------------------------------------------------------------
// SketchBackend
// ---------------------------------------------------------------------------

/// Maximum base offset, in document units, that jitter may displace a point.
/// Scaled down further for very short segments.
const MAX_RANDOMNESS_OFFSET: f64 = 2.0;

/// Hand-drawn stroke generator.
///
/// Draws each line as two overlaid cubic Bezier passes whose control points
/// are jittered around the straight path, the classic double-stroke sketch
/// technique. Jitter amplitude follows the style's `roughness`, scaled down
/// for long segments so they do not turn into scribble, and the whole curve
/// bows away from straight by `bowing` at two diverge points.
#[derive(Debug, Clone, Copy, Default)]
pub struct SketchBackend;

impl SketchBackend {
    /// Roughness gain by segment length: short segments keep full jitter,
    /// long ones are damped to 0.4 with a linear ramp between.
    fn roughness_gain(length: f64) -> f64 {
        if length < 200.0 {
            1.0
        } else if length > 500.0 {
            0.4
        } else {
            -0.0016668 * length + 1.233334
        }
    }

    /// A jitter offset in `[-magnitude, magnitude]`, scaled by roughness.
    fn offset(rng: &mut Pcg64, magnitude: f64, style: &StrokeStyle, gain: f64) -> f64 {
        style.roughness * gain * (rng.gen::<f64>() * 2.0 * magnitude - magnitude)
    }

    /// One pass over the line: a jittered move followed by a jittered cubic
    /// curve. The overlay pass uses half-amplitude jitter so the two strokes
    /// hug each other.
    fn pass(
        rng: &mut Pcg64,
        line: Line,
        style: &StrokeStyle,
        overlay: bool,
        ops: &mut Vec<PathOp>,
    ) {
        let (x1, y1) = (line.from.x, line.from.y);
        let (x2, y2) = (line.to.x, line.to.y);
        let length = line.length();
        let gain = Self::roughness_gain(length);

        // Cap the base offset for short segments so jitter never dwarfs the
        // stroke itself.
        let mut max_offset = MAX_RANDOMNESS_OFFSET;
        if max_offset * max_offset * 100.0 > length * length {
            max_offset = length / 10.0;
        }
        let half_offset = max_offset / 2.0;
        let amplitude = if overlay { half_offset } else { max_offset };

        // Where the bow diverges from the straight path.
        let diverge = 0.2 + rng.gen::<f64>() * 0.2;
        let mut mid_disp_x = style.bowing * MAX_RANDOMNESS_OFFSET * (y2 - y1) / 200.0;
        let mut mid_disp_y = style.bowing * MAX_RANDOMNESS_OFFSET * (x1 - x2) / 200.0;
        mid_disp_x = Self::offset(rng, mid_disp_x, style, gain);
        mid_disp_y = Self::offset(rng, mid_disp_y, style, gain);

        ops.push(PathOp::MoveTo {
            to: Point::new(
                x1 + Self::offset(rng, amplitude, style, gain),
                y1 + Self::offset(rng, amplitude, style, gain),
            ),
        });
        ops.push(PathOp::CurveTo {
            c1: Point::new(
                mid_disp_x + x1 + (x2 - x1) * diverge + Self::offset(rng, amplitude, style, gain),
                mid_disp_y + y1 + (y2 - y1) * diverge + Self::offset(rng, amplitude, style, gain),
            ),
            c2: Point::new(
                mid_disp_x
                    + x1
                    + 2.0 * (x2 - x1) * diverge
                    + Self::offset(rng, amplitude, style, gain),
                mid_disp_y
                    + y1
                    + 2.0 * (y2 - y1) * diverge
                    + Self::offset(rng, amplitude, style, gain),
            ),
            to: Point::new(
                x2 + Self::offset(rng, amplitude, style, gain),
                y2 + Self::offset(rng, amplitude, style, gain),
            ),
        });
    }
}

impl StrokeBackend for SketchBackend {
    fn stroke(&self, line: Line, style: &StrokeStyle, seed: u64) -> Stroke {
        let mut rng = Pcg64::seed_from_u64(seed);
        let mut ops = Vec::with_capacity(4);
        Self::pass(&mut rng, line, style, false, &mut ops);
        Self::pass(&mut rng, line, style, true, &mut ops);
        Stroke {
            ops,
            style: style.clone(),
        }
    }

    fn name(&self) -> &'static str {
        "sketch"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn vertical_mark_line() -> Line {
        // A first-column vertical mark at the original layout's scale.
        Line::new(20.0, 15.0, 20.0, 46.25)
    }

    // -- plain backend ------------------------------------------------------

    #[test]
    fn plain_backend_preserves_endpoints_exactly() {
        let line = vertical_mark_line();
        let stroke = PlainBackend.stroke(line, &StrokeStyle::default(), 99);

        assert_eq!(
            stroke.ops,
            vec![
                PathOp::MoveTo { to: line.from },
                PathOp::LineTo { to: line.to },
            ]
        );
    }

    #[test]
    fn plain_backend_ignores_seed() {
        let line = vertical_mark_line();
        let style = StrokeStyle::default();
        assert_eq!(
            PlainBackend.stroke(line, &style, 1),
            PlainBackend.stroke(line, &style, 2)
        );
    }

    // -- sketch backend -----------------------------------------------------

    #[test]
    fn sketch_backend_is_deterministic_per_seed() {
        let line = vertical_mark_line();
        let style = StrokeStyle::default();
        let backend = SketchBackend;

        assert_eq!(
            backend.stroke(line, &style, 7),
            backend.stroke(line, &style, 7)
        );
        assert_ne!(
            backend.stroke(line, &style, 7),
            backend.stroke(line, &style, 8)
        );
    }

    #[test]
    fn sketch_backend_draws_two_passes() {
        let stroke = SketchBackend.stroke(vertical_mark_line(), &StrokeStyle::default(), 3);
        let moves = stroke
            .ops
            .iter()
            .filter(|op| matches!(op, PathOp::MoveTo { .. }))
            .count();
        let curves = stroke
            .ops
            .iter()
            .filter(|op| matches!(op, PathOp::CurveTo { .. }))
            .count();
        assert_eq!(moves, 2);
        assert_eq!(curves, 2);
    }

    #[test]
    fn sketch_endpoints_stay_near_the_line() {
        let line = vertical_mark_line();
        let style = StrokeStyle::default();

        for seed in 0..50 {
            let stroke = SketchBackend.stroke(line, &style, seed);
            for op in &stroke.ops {
                let point = match op {
                    PathOp::MoveTo { to } => to,
                    PathOp::CurveTo { to, .. } => to,
                    PathOp::LineTo { to } => to,
                };
                // Endpoint jitter is bounded by roughness * max offset.
                let near_from = (point.x - line.from.x).abs() < 10.0
                    && (point.y - line.from.y).abs() < 10.0;
                let near_to =
                    (point.x - line.to.x).abs() < 10.0 && (point.y - line.to.y).abs() < 10.0;
                assert!(near_from || near_to, "seed {seed}: point {point:?} strayed");
            }
        }
    }

    #[test]
    fn zero_roughness_hugs_the_line() {
        let line = Line::new(0.0, 0.0, 100.0, 0.0);
        let style = StrokeStyle {
            roughness: 0.0,
            ..Default::default()
        };
        let stroke = SketchBackend.stroke(line, &style, 5);

        for op in &stroke.ops {
            if let PathOp::MoveTo { to } | PathOp::LineTo { to } = op {
                assert!((to.y - 0.0).abs() < 1e-9);
            }
        }
    }
}
