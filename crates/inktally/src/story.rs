//! Story declaration: the step list consumed from the page.
//!
//! A story is declared as JSON, matching the attributes the surrounding
//! document already carries: each step has an integer `"step"` id and a
//! `"winner"` of `"a"` or `"b"`. An optional `"seed"` anchors the sketch
//! jitter so a story always wobbles the same way.
//!
//! ```
//! use inktally::story::Story;
//!
//! let story = Story::from_json(r#"{
//!     "seed": 7,
//!     "steps": [{"step": 1, "winner": "a"}, {"step": 2, "winner": "b"}]
//! }"#).unwrap();
//! assert_eq!(story.steps.len(), 2);
//! ```

use inktally_core::step::Step;
use serde::{Deserialize, Serialize};

use crate::StoryError;

/// A validated story: steps with strictly increasing ids, read-only to the
/// rest of the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    /// Seed anchoring the hand-drawn jitter for every mark in this story.
    #[serde(default)]
    pub seed: u64,
    /// The narrative steps, ascending by id.
    pub steps: Vec<Step>,
}

impl Story {
    /// Parse and validate a JSON story declaration.
    ///
    /// # Errors
    ///
    /// [`StoryError::Parse`] for malformed JSON or unknown side names;
    /// [`StoryError::Core`] if step ids are not strictly increasing.
    pub fn from_json(json: &str) -> Result<Story, StoryError> {
        let story: Story = serde_json::from_str(json)?;
        story.validate()?;
        Ok(story)
    }

    /// Build a story directly from steps (e.g. in tests).
    pub fn from_steps(seed: u64, steps: Vec<Step>) -> Result<Story, StoryError> {
        let story = Story { seed, steps };
        story.validate()?;
        Ok(story)
    }

    fn validate(&self) -> Result<(), StoryError> {
        for pair in self.steps.windows(2) {
            if pair[1].id <= pair[0].id {
                return Err(inktally_core::CoreError::UnorderedSteps {
                    prev: pair[0].id,
                    id: pair[1].id,
                }
                .into());
            }
        }
        Ok(())
    }

    /// The step at a scroller index, if the index is in range.
    pub fn step_at(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
