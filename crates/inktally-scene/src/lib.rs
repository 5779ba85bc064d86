//! Inktally scene -- turns ledger state into SVG.
//!
//! This is the thin presentation adapter between the pure tally state in
//! `inktally-core` and the document the reader sees. Extraction is a pure
//! function of ledger state and needs no drawing backend, so everything
//! worth testing is testable headless; rendering pushes the extracted
//! sprites through whichever [`StrokeBackend`](inktally_sketch::backend::StrokeBackend)
//! was chosen at startup and writes an SVG document.
//!
//! # Quick Start
//!
//! ```
//! use inktally_core::prelude::*;
//! use inktally_scene::prelude::*;
//! use inktally_sketch::prelude::*;
//!
//! let mut ledger = TallyLedger::new();
//! for _ in 0..5 {
//!     ledger.increment(Side::A);
//! }
//!
//! let scene = TallyScene::new(Box::new(SketchBackend), 0);
//! let doc = scene.render_side(&ledger, Side::A);
//! assert_eq!(doc.elements().len(), 5);
//! ```

#![deny(unsafe_code)]

pub mod layout;
pub mod scene;
pub mod svg;
pub mod timeline;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::layout::GridLayout;
    pub use crate::scene::{MarkSprite, Scoreboard, TallyScene};
    pub use crate::svg::{SvgDocument, SvgElement};
    pub use crate::timeline::TimelineGeometry;
}
