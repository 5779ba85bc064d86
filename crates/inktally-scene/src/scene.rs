//! Tally scene: pure sprite extraction plus SVG rendering.
//!
//! Mirrors the extract-then-render split: [`TallyScene::extract`] reads
//! ledger state into [`MarkSprite`]s with no backend involved (headless
//! testable), and [`TallyScene::render_side`] pushes those sprites through
//! the stroke backend into an [`SvgDocument`].

use inktally_core::ledger::TallyLedger;
use inktally_core::mark::Mark;
use inktally_core::side::Side;
use inktally_sketch::backend::StrokeBackend;
use inktally_sketch::seed::stroke_seed;
use inktally_sketch::stroke::{Line, StrokeStyle};
use serde::{Deserialize, Serialize};

use crate::layout::GridLayout;
use crate::svg::{SvgDocument, SvgElement};

// ---------------------------------------------------------------------------
// MarkSprite
// ---------------------------------------------------------------------------

/// A drawable mark extracted from ledger state: the mark itself plus the
/// line it occupies on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkSprite {
    pub mark: Mark,
    pub line: Line,
}

impl MarkSprite {
    /// CSS classes for the rendered element. Settled marks carry `animate`
    /// so newly added ones get their entrance transition on the frame after
    /// they appear, exactly once.
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = vec!["tally-mark"];
        classes.push(if self.mark.is_closer() {
            "diagonal"
        } else {
            "vertical"
        });
        if self.mark.entered {
            classes.push("animate");
        }
        classes
    }
}

// ---------------------------------------------------------------------------
// Scoreboard
// ---------------------------------------------------------------------------

/// Current integer counts for display next to the boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub a: u32,
    pub b: u32,
}

// ---------------------------------------------------------------------------
// TallyScene
// ---------------------------------------------------------------------------

/// Renders ledger state into per-side SVG boards.
///
/// Owns the stroke backend (chosen once at startup), the stroke style, the
/// grid layout, and the story seed that anchors per-mark jitter.
pub struct TallyScene {
    backend: Box<dyn StrokeBackend>,
    style: StrokeStyle,
    layout: GridLayout,
    story_seed: u64,
}

impl TallyScene {
    /// Create a scene with the default layout and style.
    pub fn new(backend: Box<dyn StrokeBackend>, story_seed: u64) -> TallyScene {
        tracing::debug!(backend = backend.name(), story_seed, "scene ready");
        TallyScene {
            backend,
            style: StrokeStyle::default(),
            layout: GridLayout::default(),
            story_seed,
        }
    }

    /// Replace the grid layout.
    pub fn with_layout(mut self, layout: GridLayout) -> TallyScene {
        self.layout = layout;
        self
    }

    /// Replace the stroke style.
    pub fn with_style(mut self, style: StrokeStyle) -> TallyScene {
        self.style = style;
        self
    }

    /// The active backend's name, for logging and diagnostics.
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Extract one side's sprites from the ledger. Pure; no backend, no
    /// randomness.
    pub fn extract(&self, ledger: &TallyLedger, side: Side) -> Vec<MarkSprite> {
        ledger
            .marks(side)
            .iter()
            .map(|mark| MarkSprite {
                mark: mark.clone(),
                line: self.layout.line_for(mark),
            })
            .collect()
    }

    /// Render one side's board as an SVG document.
    ///
    /// Each mark becomes a `<path>` stroked by the backend; the per-mark
    /// seed depends only on (story seed, side, ordinal), so a board rebuilt
    /// after rollback looks identical to one that never rolled back.
    pub fn render_side(&self, ledger: &TallyLedger, side: Side) -> SvgDocument {
        let sprites = self.extract(ledger, side);
        let (width, height) = self.layout.board_size(sprites.len() as u32);
        let mut doc = SvgDocument::new(width, height);

        for sprite in &sprites {
            let seed = stroke_seed(self.story_seed, side.name(), sprite.mark.ordinal);
            let stroke = self.backend.stroke(sprite.line, &self.style, seed);

            let mut element = SvgElement::new("path")
                .attr("d", stroke.to_path_data())
                .attr("stroke", "currentColor")
                .attr("stroke-width", stroke.style.stroke_width)
                .attr("fill", "none");
            for class in sprite.classes() {
                element = element.class(class);
            }
            doc.push(element);
        }
        doc
    }

    /// Current counts for the scoreboard display.
    pub fn scoreboard(&self, ledger: &TallyLedger) -> Scoreboard {
        Scoreboard {
            a: ledger.count(Side::A),
            b: ledger.count(Side::B),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use inktally_sketch::backend::{PlainBackend, SketchBackend};

    fn ledger_with(a: u32, b: u32) -> TallyLedger {
        let mut ledger = TallyLedger::new();
        for _ in 0..a {
            ledger.increment(Side::A);
        }
        for _ in 0..b {
            ledger.increment(Side::B);
        }
        ledger
    }

    #[test]
    fn extract_is_one_sprite_per_mark() {
        let ledger = ledger_with(7, 2);
        let scene = TallyScene::new(Box::new(PlainBackend), 0);

        assert_eq!(scene.extract(&ledger, Side::A).len(), 7);
        assert_eq!(scene.extract(&ledger, Side::B).len(), 2);
    }

    #[test]
    fn sprites_carry_orientation_classes() {
        let ledger = ledger_with(5, 0);
        let scene = TallyScene::new(Box::new(PlainBackend), 0);
        let sprites = scene.extract(&ledger, Side::A);

        assert!(sprites[3].classes().contains(&"vertical"));
        assert!(sprites[4].classes().contains(&"diagonal"));
        // Nothing settled yet, so nothing animates.
        assert!(!sprites[0].classes().contains(&"animate"));
    }

    #[test]
    fn settled_marks_gain_the_animate_class() {
        let mut ledger = ledger_with(2, 0);
        ledger.settle_entrances();
        ledger.increment(Side::A);

        let scene = TallyScene::new(Box::new(PlainBackend), 0);
        let sprites = scene.extract(&ledger, Side::A);
        assert!(sprites[0].classes().contains(&"animate"));
        assert!(sprites[1].classes().contains(&"animate"));
        assert!(!sprites[2].classes().contains(&"animate"));
    }

    #[test]
    fn render_emits_one_path_per_mark() {
        let ledger = ledger_with(6, 0);
        let scene = TallyScene::new(Box::new(SketchBackend), 7);
        let doc = scene.render_side(&ledger, Side::A);

        assert_eq!(doc.elements().len(), 6);
        for el in doc.elements() {
            assert_eq!(el.name(), "path");
            assert!(el.has_class("tally-mark"));
            assert!(el.get_attr("d").is_some());
        }
    }

    #[test]
    fn backend_choice_does_not_change_sprite_geometry() {
        let ledger = ledger_with(8, 0);
        let sketch = TallyScene::new(Box::new(SketchBackend), 0);
        let plain = TallyScene::new(Box::new(PlainBackend), 0);

        assert_eq!(
            sketch.extract(&ledger, Side::A),
            plain.extract(&ledger, Side::A)
        );
    }

    #[test]
    fn rebuilt_board_renders_identically() {
        // Roll a mark off and back on; the rendered document must not drift.
        let scene = TallyScene::new(Box::new(SketchBackend), 21);

        let before = scene.render_side(&ledger_with(5, 0), Side::A);

        let mut ledger = ledger_with(5, 0);
        ledger.decrement(Side::A);
        ledger.decrement(Side::A);
        ledger.increment(Side::A);
        ledger.increment(Side::A);
        let after = scene.render_side(&ledger, Side::A);

        assert_eq!(before, after);
    }

    #[test]
    fn scoreboard_reports_both_counts() {
        let ledger = ledger_with(4, 9);
        let scene = TallyScene::new(Box::new(PlainBackend), 0);
        assert_eq!(scene.scoreboard(&ledger), Scoreboard { a: 4, b: 9 });
    }

    #[test]
    fn empty_side_renders_an_empty_document() {
        let scene = TallyScene::new(Box::new(SketchBackend), 0);
        let doc = scene.render_side(&TallyLedger::new(), Side::B);
        assert!(doc.elements().is_empty());
        assert!(doc.width() > 0.0 && doc.height() > 0.0);
    }
}
