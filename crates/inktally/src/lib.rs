//! Inktally -- scroll-driven tally storytelling engine.
//!
//! This crate wires the pieces together: a [`Story`](story::Story)
//! declaration names the steps and their winners, the
//! [`Scroller`](scroller::Scroller) maps continuous scroll position to
//! discrete step enter/exit events with direction, and the
//! [`StoryEngine`](engine::StoryEngine) feeds those events through the
//! synchronizer in `inktally-core` and renders the boards via
//! `inktally-scene`.
//!
//! # Quick Start
//!
//! ```
//! use inktally::prelude::*;
//!
//! let story = Story::from_json(r#"{
//!     "steps": [
//!         {"step": 1, "winner": "a"},
//!         {"step": 2, "winner": "b"},
//!         {"step": 3, "winner": "a"}
//!     ]
//! }"#).unwrap();
//!
//! let mut engine = StoryEngine::new(story).unwrap();
//! engine.handle(StepEvent::Enter { index: 2, direction: Direction::Down });
//!
//! assert_eq!(engine.scoreboard().a, 2);
//! assert_eq!(engine.scoreboard().b, 1);
//! ```

#![deny(unsafe_code)]

pub mod engine;
pub mod scroller;
pub mod story;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

/// Re-export the core state crate for convenience.
pub use inktally_core;

/// Re-export the scene crate for convenience.
pub use inktally_scene;

/// Re-export the sketch crate for convenience.
pub use inktally_sketch;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors produced while loading a story or configuring the scroller.
///
/// Runtime event handling never errors: malformed or stale events degrade
/// to no-ops, matching the page's degrade-gracefully policy.
#[derive(Debug, thiserror::Error)]
pub enum StoryError {
    /// The story declaration was not valid JSON of the expected shape.
    #[error("invalid story declaration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The declared steps violated a core invariant.
    #[error(transparent)]
    Core(#[from] inktally_core::CoreError),

    /// The scroller trigger offset must be a fraction of the viewport.
    #[error("trigger offset must be within (0, 1), got {offset}")]
    InvalidOffset { offset: f64 },

    /// The scroller viewport must have positive height.
    #[error("viewport height must be positive, got {height}")]
    InvalidViewport { height: f64 },

    /// A step extent had non-positive height.
    #[error("step extent {index} must have positive height, got {height}")]
    InvalidExtent { index: usize, height: f64 },
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common engine usage.
pub mod prelude {
    pub use inktally_core::prelude::*;
    pub use inktally_scene::prelude::*;
    pub use inktally_sketch::prelude::*;

    pub use crate::engine::{FrameRender, StoryEngine};
    pub use crate::scroller::{Scroller, ScrollerConfig, StepEvent, StepExtent};
    pub use crate::story::Story;
    pub use crate::StoryError;
}
