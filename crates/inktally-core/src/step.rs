//! Narrative steps and scroll direction.

use serde::{Deserialize, Serialize};

use crate::side::Side;

/// One discrete narrative position in the story, bound to a single scoring
/// event for one side.
///
/// Steps are declared by the story document with strictly increasing ids.
/// The serialized field name for the id is `"step"`, matching the original
/// declaration format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Narrative position, strictly increasing across the story.
    #[serde(rename = "step")]
    pub id: u64,
    /// The tally this step increments.
    pub winner: Side,
}

/// Scroll direction reported by the scroll driver alongside step events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Scrolling toward earlier steps.
    Up,
    /// Scrolling toward later steps.
    Down,
}
