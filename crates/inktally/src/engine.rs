//! The story engine: step events in, SVG boards out.
//!
//! Owns the ledger, the synchronizer, and the scene, and consumes the
//! scroller's events. Single-step motion follows the enter / exit-upward
//! protocol; when an enter event jumps more than one step past the last
//! active one (fast scroll, initial load far down the page), the engine
//! reconciles with a full bidirectional sync instead, so correctness never
//! depends on which exit events were delivered.

use inktally_core::ledger::TallyLedger;
use inktally_core::side::Side;
use inktally_core::step::Direction;
use inktally_core::sync::StepSynchronizer;
use inktally_scene::scene::{Scoreboard, TallyScene};
use inktally_scene::svg::SvgDocument;
use inktally_scene::timeline::TimelineGeometry;
use inktally_sketch::backend::{SketchBackend, StrokeBackend};

use crate::scroller::StepEvent;
use crate::story::Story;
use crate::StoryError;

// ---------------------------------------------------------------------------
// FrameRender
// ---------------------------------------------------------------------------

/// One rendered frame: both boards plus the scoreboard.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRender {
    pub board_a: SvgDocument,
    pub board_b: SvgDocument,
    pub scoreboard: Scoreboard,
}

// ---------------------------------------------------------------------------
// StoryEngine
// ---------------------------------------------------------------------------

/// Drives one story for the lifetime of the page.
pub struct StoryEngine {
    story: Story,
    ledger: TallyLedger,
    sync: StepSynchronizer,
    scene: TallyScene,
    /// Position (in the step list) of the last entered step.
    active_pos: Option<usize>,
}

impl StoryEngine {
    /// Create an engine with the hand-drawn backend.
    pub fn new(story: Story) -> Result<StoryEngine, StoryError> {
        Self::with_backend(story, Box::new(SketchBackend))
    }

    /// Create an engine with an explicit stroke backend.
    ///
    /// Pass [`PlainBackend`](inktally_sketch::backend::PlainBackend) when a
    /// hand-drawn renderer is unavailable or unwanted; tally semantics are
    /// identical either way.
    pub fn with_backend(
        story: Story,
        backend: Box<dyn StrokeBackend>,
    ) -> Result<StoryEngine, StoryError> {
        let sync = StepSynchronizer::new(story.steps.clone())?;
        let scene = TallyScene::new(backend, story.seed);
        tracing::info!(steps = story.steps.len(), seed = story.seed, "story loaded");
        Ok(StoryEngine {
            story,
            ledger: TallyLedger::new(),
            sync,
            scene,
            active_pos: None,
        })
    }

    /// Consume one step event from the scroll driver.
    ///
    /// Events with out-of-range indices are ignored (guard-and-skip); a
    /// stale layout must never corrupt the tallies.
    pub fn handle(&mut self, event: StepEvent) {
        match event {
            StepEvent::Enter { index, .. } => {
                let Some(step) = self.story.step_at(index) else {
                    tracing::warn!(index, "enter for unknown step index; skipped");
                    return;
                };
                let id = step.id;

                // A jump of more than one step means intermediate events
                // were skipped; reconcile instead of trusting the protocol.
                let jumped = match self.active_pos {
                    Some(prev) => index.abs_diff(prev) > 1,
                    None => false,
                };
                if jumped {
                    self.sync.sync_to(id, &mut self.ledger);
                } else {
                    self.sync.enter(id, &mut self.ledger);
                }
                self.active_pos = Some(index);
            }
            StepEvent::Exit { index, direction } => {
                let Some(step) = self.story.step_at(index) else {
                    tracing::warn!(index, "exit for unknown step index; skipped");
                    return;
                };
                self.sync.exit(step.id, direction, &mut self.ledger);
                if direction == Direction::Up && self.active_pos == Some(index) {
                    self.active_pos = index.checked_sub(1);
                }
            }
        }
    }

    /// Render both boards and the scoreboard, then settle entrance flags so
    /// marks added this frame get their entrance transition on the next one,
    /// exactly once.
    pub fn render(&mut self) -> FrameRender {
        let frame = FrameRender {
            board_a: self.scene.render_side(&self.ledger, Side::A),
            board_b: self.scene.render_side(&self.ledger, Side::B),
            scoreboard: self.scene.scoreboard(&self.ledger),
        };
        self.ledger.settle_entrances();
        frame
    }

    /// Render the timeline connector for measured dot positions.
    pub fn render_timeline(&self, geometry: &TimelineGeometry) -> SvgDocument {
        geometry.render()
    }

    /// Current counts for display.
    pub fn scoreboard(&self) -> Scoreboard {
        self.scene.scoreboard(&self.ledger)
    }

    /// Zero both tallies and forget every applied step. Invocable from an
    /// external control at any time.
    pub fn reset(&mut self) {
        self.sync.reset(&mut self.ledger);
        self.active_pos = None;
    }

    /// Read access to the ledger, for display layers beyond the scene.
    pub fn ledger(&self) -> &TallyLedger {
        &self.ledger
    }

    /// The loaded story.
    pub fn story(&self) -> &Story {
        &self.story
    }

    /// Whether a given step id is currently reflected in the tallies.
    pub fn is_applied(&self, step_id: u64) -> bool {
        self.sync.is_applied(step_id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use inktally_core::step::Step;

    fn story() -> Story {
        Story::from_steps(
            0,
            vec![
                Step { id: 1, winner: Side::A },
                Step { id: 2, winner: Side::B },
                Step { id: 3, winner: Side::A },
                Step { id: 4, winner: Side::A },
                Step { id: 5, winner: Side::A },
            ],
        )
        .unwrap()
    }

    fn enter(index: usize) -> StepEvent {
        StepEvent::Enter {
            index,
            direction: Direction::Down,
        }
    }

    fn exit_up(index: usize) -> StepEvent {
        StepEvent::Exit {
            index,
            direction: Direction::Up,
        }
    }

    #[test]
    fn entering_the_last_step_scores_everything() {
        let mut engine = StoryEngine::new(story()).unwrap();
        engine.handle(enter(4));

        assert_eq!(engine.scoreboard(), Scoreboard { a: 4, b: 1 });
    }

    #[test]
    fn walk_down_and_back_up_returns_to_zero() {
        let mut engine = StoryEngine::new(story()).unwrap();
        for index in 0..5 {
            engine.handle(enter(index));
        }
        for index in (0..5).rev() {
            engine.handle(exit_up(index));
        }

        assert_eq!(engine.scoreboard(), Scoreboard { a: 0, b: 0 });
    }

    #[test]
    fn upward_jump_reconciles_without_exit_events() {
        let mut engine = StoryEngine::new(story()).unwrap();
        engine.handle(enter(4));

        // The reader flung the page back to step 1; no exits arrived.
        engine.handle(StepEvent::Enter {
            index: 0,
            direction: Direction::Up,
        });

        assert_eq!(engine.scoreboard(), Scoreboard { a: 1, b: 0 });
        assert!(engine.is_applied(1));
        assert!(!engine.is_applied(5));
    }

    #[test]
    fn unknown_indices_are_ignored() {
        let mut engine = StoryEngine::new(story()).unwrap();
        engine.handle(enter(99));
        engine.handle(exit_up(99));
        assert_eq!(engine.scoreboard(), Scoreboard { a: 0, b: 0 });
    }

    #[test]
    fn reset_clears_marks_and_applied_steps() {
        let mut engine = StoryEngine::new(story()).unwrap();
        engine.handle(enter(3));
        engine.reset();

        assert_eq!(engine.scoreboard(), Scoreboard { a: 0, b: 0 });
        assert!(!engine.is_applied(1));
        assert!(engine.render().board_a.elements().is_empty());
    }

    #[test]
    fn render_settles_entrances_between_frames() {
        let mut engine = StoryEngine::new(story()).unwrap();
        engine.handle(enter(0));

        // A mark animates only once settled, so the frame that introduces it
        // is plain and the next frame carries the entrance class.
        let first = engine.render();
        assert!(!first.board_a.elements()[0].has_class("animate"));

        let second = engine.render();
        assert!(second.board_a.elements()[0].has_class("animate"));
    }
}
