//! Step synchronizer: maps scroll-driven step events to ledger mutations.
//!
//! The synchronizer owns the ordered step list and the set of step ids whose
//! score is currently reflected in the tallies. That applied set is the sole
//! source of truth for idempotence: `id` is in the set iff exactly one mark
//! was added to its winner's tally and not yet removed.
//!
//! Entering a step rebuilds forward -- every not-yet-applied step at or
//! before it is applied in ascending id order -- so a jump across several
//! steps (fast scroll, initial load) converges to the same cumulative tally
//! as stepping through one at a time. Exiting upward rolls a single step
//! back; downward exits are no-ops because the next enter rebuilds anyway.
//!
//! For motion so fast that exit events cannot be trusted at all,
//! [`StepSynchronizer::sync_to`] reconciles in both directions against a
//! single target step.
//!
//! # Example
//!
//! ```
//! use inktally_core::prelude::*;
//!
//! let steps = vec![
//!     Step { id: 1, winner: Side::A },
//!     Step { id: 2, winner: Side::B },
//! ];
//! let mut ledger = TallyLedger::new();
//! let mut sync = StepSynchronizer::new(steps).unwrap();
//!
//! assert_eq!(sync.enter(2, &mut ledger), 2);
//! assert_eq!(sync.enter(2, &mut ledger), 0); // idempotent
//! ```

use std::collections::BTreeSet;

use crate::ledger::TallyLedger;
use crate::step::{Direction, Step};
use crate::CoreError;

// ---------------------------------------------------------------------------
// StepSynchronizer
// ---------------------------------------------------------------------------

/// The scroll-position-to-tally state machine.
///
/// Each declared step is either applied or not; transitions are driven by
/// [`enter`](Self::enter) and [`exit`](Self::exit) events from the scroll
/// driver. There is no terminal state -- the machine runs for the page's
/// lifetime.
#[derive(Debug, Clone)]
pub struct StepSynchronizer {
    /// All declared steps, ascending by id.
    steps: Vec<Step>,
    /// Ids currently reflected in the tallies.
    applied: BTreeSet<u64>,
}

impl StepSynchronizer {
    /// Build a synchronizer over the declared steps.
    ///
    /// Steps must already be in strictly increasing id order, as the story
    /// declares them.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnorderedSteps`] if any id repeats or decreases.
    pub fn new(steps: Vec<Step>) -> Result<StepSynchronizer, CoreError> {
        for pair in steps.windows(2) {
            if pair[1].id <= pair[0].id {
                return Err(CoreError::UnorderedSteps {
                    prev: pair[0].id,
                    id: pair[1].id,
                });
            }
        }
        Ok(StepSynchronizer {
            steps,
            applied: BTreeSet::new(),
        })
    }

    /// All declared steps, ascending by id.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The set of currently applied step ids.
    pub fn applied(&self) -> &BTreeSet<u64> {
        &self.applied
    }

    /// Whether the given step's score is currently in the tallies.
    pub fn is_applied(&self, step_id: u64) -> bool {
        self.applied.contains(&step_id)
    }

    /// The reader scrolled to `step_id`: apply every unapplied step at or
    /// before it, in ascending id order.
    ///
    /// Ascending order keeps each side's ordinals contiguous even when
    /// consecutive steps share a winner. Entering an already-applied step
    /// (with nothing unapplied before it) changes nothing.
    ///
    /// Returns the number of steps newly applied. Ids that match no declared
    /// step still apply everything declared before them.
    pub fn enter(&mut self, step_id: u64, ledger: &mut TallyLedger) -> usize {
        let mut newly_applied = 0;
        for step in &self.steps {
            if step.id > step_id {
                break;
            }
            if self.applied.insert(step.id) {
                ledger.increment(step.winner);
                newly_applied += 1;
            }
        }
        if newly_applied > 0 {
            tracing::debug!(step_id, newly_applied, "enter applied steps");
        }
        newly_applied
    }

    /// The reader scrolled back past `step_id`: roll its score back.
    ///
    /// Only upward exits act; downward exits are no-ops since the next enter
    /// rebuilds forward anyway. Exiting an unapplied or unknown step changes
    /// nothing. Returns whether a rollback happened.
    pub fn exit(&mut self, step_id: u64, direction: Direction, ledger: &mut TallyLedger) -> bool {
        if direction != Direction::Up {
            return false;
        }
        // Resolve the winner before touching the applied set; an id with no
        // declared step must leave the set untouched.
        let Some(winner) = self.winner_of(step_id) else {
            return false;
        };
        if !self.applied.remove(&step_id) {
            return false;
        }
        ledger.decrement(winner);
        tracing::debug!(step_id, "exit rolled back step");
        true
    }

    /// Reconcile the tallies against a single target step, both directions.
    ///
    /// Applies unapplied steps at or before `step_id` ascending, then rolls
    /// back applied steps after it in descending order. Descending rollback
    /// removes marks in reverse creation order per side, preserving the
    /// ledger's LIFO requirement. The result is identical to having stepped
    /// to `step_id` one event at a time, no matter which intermediate enter
    /// or exit events were dropped.
    pub fn sync_to(&mut self, step_id: u64, ledger: &mut TallyLedger) -> usize {
        let mut changed = self.enter(step_id, ledger);

        use std::ops::Bound;
        let stale: Vec<u64> = self
            .applied
            .range((Bound::Excluded(step_id), Bound::Unbounded))
            .rev()
            .copied()
            .collect();
        for id in stale {
            self.applied.remove(&id);
            if let Some(winner) = self.winner_of(id) {
                ledger.decrement(winner);
                changed += 1;
            }
        }
        changed
    }

    /// Zero both tallies and forget every applied step.
    pub fn reset(&mut self, ledger: &mut TallyLedger) {
        tracing::debug!(applied = self.applied.len(), "reset synchronizer");
        self.applied.clear();
        ledger.reset();
    }

    fn winner_of(&self, step_id: u64) -> Option<crate::side::Side> {
        self.steps
            .iter()
            .find(|s| s.id == step_id)
            .map(|s| s.winner)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
