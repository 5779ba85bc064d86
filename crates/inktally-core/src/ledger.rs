//! The tally ledger: per-side mark lists with add / remove / reset.
//!
//! The ledger owns both tallies. A tally's count is its mark list's length --
//! the `count == marks.len()` invariant is structural, not maintained by
//! hand. Removal is strictly LIFO so ordinals stay contiguous and the
//! diagonal-grouping rule stays valid through any rollback sequence.
//!
//! # Example
//!
//! ```
//! use inktally_core::ledger::TallyLedger;
//! use inktally_core::side::Side;
//!
//! let mut ledger = TallyLedger::new();
//! for _ in 0..6 {
//!     ledger.increment(Side::A);
//! }
//! assert_eq!(ledger.count(Side::A), 6);
//! assert!(ledger.marks(Side::A)[4].is_closer());
//!
//! ledger.decrement(Side::A);
//! assert_eq!(ledger.count(Side::A), 5);
//! ```

use serde::{Deserialize, Serialize};

use crate::mark::Mark;
use crate::side::Side;

// ---------------------------------------------------------------------------
// Tally
// ---------------------------------------------------------------------------

/// One side's tally: an ordered list of marks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    side: Side,
    marks: Vec<Mark>,
}

impl Tally {
    fn new(side: Side) -> Tally {
        Tally {
            side,
            marks: Vec::new(),
        }
    }

    /// The side this tally scores for.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Current count. Always equals the number of marks.
    pub fn count(&self) -> u32 {
        self.marks.len() as u32
    }

    /// All marks in creation order.
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Whether the tally is empty.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

// ---------------------------------------------------------------------------
// TallyLedger
// ---------------------------------------------------------------------------

/// Owns both tallies and exposes the only mutation paths:
/// [`increment`](Self::increment), [`decrement`](Self::decrement), and
/// [`reset`](Self::reset).
///
/// All operations are total. Decrementing an empty tally is a no-op; growth
/// is unbounded. An owned instance (rather than module state) keeps multiple
/// independent ledgers possible and the state machine testable on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyLedger {
    a: Tally,
    b: Tally,
}

impl Default for TallyLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl TallyLedger {
    /// Create a ledger with both tallies at zero.
    pub fn new() -> TallyLedger {
        TallyLedger {
            a: Tally::new(Side::A),
            b: Tally::new(Side::B),
        }
    }

    fn tally_mut(&mut self, side: Side) -> &mut Tally {
        match side {
            Side::A => &mut self.a,
            Side::B => &mut self.b,
        }
    }

    /// Read access to one side's tally.
    pub fn tally(&self, side: Side) -> &Tally {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }

    /// Current count for one side.
    pub fn count(&self, side: Side) -> u32 {
        self.tally(side).count()
    }

    /// All marks for one side, in creation order.
    pub fn marks(&self, side: Side) -> &[Mark] {
        self.tally(side).marks()
    }

    /// Add one mark to `side`'s tally and return it.
    ///
    /// The new mark's ordinal is the tally's current count, so ordinals are
    /// always contiguous from zero.
    pub fn increment(&mut self, side: Side) -> &Mark {
        let tally = self.tally_mut(side);
        let mark = Mark::new(tally.count());
        tracing::debug!(side = side.name(), ordinal = mark.ordinal, "increment");
        tally.marks.push(mark);
        // Just pushed, so the list is non-empty.
        let last = tally.marks.len() - 1;
        &tally.marks[last]
    }

    /// Remove the most recently added mark from `side`'s tally.
    ///
    /// Returns the removed mark, or `None` if the tally was already empty.
    /// LIFO removal is what keeps ordinal assignment contiguous and the
    /// diagonal grouping valid during rollback.
    pub fn decrement(&mut self, side: Side) -> Option<Mark> {
        let tally = self.tally_mut(side);
        let mark = tally.marks.pop();
        if let Some(ref mark) = mark {
            tracing::debug!(side = side.name(), ordinal = mark.ordinal, "decrement");
        }
        mark
    }

    /// Clear both tallies to zero.
    pub fn reset(&mut self) {
        tracing::debug!(
            a = self.a.count(),
            b = self.b.count(),
            "reset ledger"
        );
        self.a.marks.clear();
        self.b.marks.clear();
    }

    /// Flip every mark's `entered` flag on.
    ///
    /// The presentation layer calls this after a render pass so that marks
    /// added since the last pass get exactly one entrance transition.
    /// Fire-and-forget; tally state never reads the flag.
    pub fn settle_entrances(&mut self) {
        for side in Side::ALL {
            for mark in &mut self.tally_mut(side).marks {
                mark.entered = true;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
