//! Inktally core -- tally state machine for scroll-driven storytelling.
//!
//! This crate holds the pure state underneath an inktally page: two competing
//! tallies of hand-drawn marks, and the synchronizer that keeps them
//! consistent with the reader's position in the story. Nothing here touches a
//! renderer or a scroll source; those live in the `inktally-scene` and
//! `inktally` crates and drive this one through plain method calls.
//!
//! # Quick Start
//!
//! ```
//! use inktally_core::prelude::*;
//!
//! let steps = vec![
//!     Step { id: 1, winner: Side::A },
//!     Step { id: 2, winner: Side::B },
//!     Step { id: 3, winner: Side::A },
//! ];
//!
//! let mut ledger = TallyLedger::new();
//! let mut sync = StepSynchronizer::new(steps).unwrap();
//!
//! // The reader scrolled straight to step 3; every earlier step applies too.
//! sync.enter(3, &mut ledger);
//! assert_eq!(ledger.count(Side::A), 2);
//! assert_eq!(ledger.count(Side::B), 1);
//!
//! // Scrolling back up past step 3 rolls its mark back off.
//! sync.exit(3, Direction::Up, &mut ledger);
//! assert_eq!(ledger.count(Side::A), 1);
//! ```

#![deny(unsafe_code)]

pub mod ledger;
pub mod mark;
pub mod side;
pub mod step;
pub mod sync;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors produced when constructing core state from a story declaration.
///
/// Runtime tally operations are deliberately total: decrementing an empty
/// tally, exiting an unapplied step, or entering an applied one are all
/// defined no-ops, never errors.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Step ids must be strictly increasing in declaration order.
    #[error("step ids must be strictly increasing: step {id} declared after step {prev}")]
    UnorderedSteps { prev: u64, id: u64 },
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::ledger::{Tally, TallyLedger};
    pub use crate::mark::{Mark, Orientation};
    pub use crate::side::Side;
    pub use crate::step::{Direction, Step};
    pub use crate::sync::StepSynchronizer;
    pub use crate::CoreError;
}

// ---------------------------------------------------------------------------
// Integration Tests
// ---------------------------------------------------------------------------
