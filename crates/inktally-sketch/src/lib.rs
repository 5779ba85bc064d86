//! Inktally sketch -- hand-drawn stroke backends for tally marks.
//!
//! A tally mark is, geometrically, a line. This crate turns lines into
//! drawable strokes through a pluggable [`StrokeBackend`]: the
//! [`SketchBackend`](backend::SketchBackend) adds randomized roughness and
//! bowing for a sketched, hand-drawn look, while the
//! [`PlainBackend`](backend::PlainBackend) emits the exact line as a
//! fallback. Backend choice affects styling only -- endpoints and layout
//! semantics are identical either way.
//!
//! All randomness comes from a seeded PCG generator, and per-mark seeds are
//! derived with a stable hash, so a given mark wobbles the same way on every
//! render no matter what was drawn before it.
//!
//! # Quick Start
//!
//! ```
//! use inktally_sketch::prelude::*;
//!
//! let backend = SketchBackend::default();
//! let line = Line::new(20.0, 15.0, 20.0, 46.25);
//! let style = StrokeStyle::default();
//!
//! let stroke = backend.stroke(line, &style, 7);
//! assert_eq!(stroke, backend.stroke(line, &style, 7)); // deterministic
//! ```

#![deny(unsafe_code)]

pub mod backend;
pub mod seed;
pub mod stroke;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::backend::{PlainBackend, SketchBackend, StrokeBackend};
    pub use crate::seed::stroke_seed;
    pub use crate::stroke::{Line, PathOp, Point, Stroke, StrokeStyle};
}
