//! The scroll driver: continuous position in, discrete step events out.
//!
//! The page lays out one element per narrative step; after layout it hands
//! the scroller each element's pixel extent. A horizontal trigger line sits
//! at a configurable fraction of the viewport (the classic half-viewport
//! trigger by default). On every observed scroll position the scroller
//! works out which step the trigger line is inside and emits exit/enter
//! events with the scroll direction, in that order, exactly like the
//! original page's scroll library delivered them.
//!
//! The scroller knows nothing about tallies; it is plain position
//! bookkeeping. Resilience to skipped steps lives downstream in the
//! synchronizer.

use inktally_core::step::Direction;
use serde::{Deserialize, Serialize};

use crate::StoryError;

// ---------------------------------------------------------------------------
// Config and events
// ---------------------------------------------------------------------------

/// Scroller configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollerConfig {
    /// Trigger line position as a fraction of viewport height, exclusive of
    /// the edges.
    pub offset: f64,
    /// Viewport height in pixels.
    pub viewport_height: f64,
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        ScrollerConfig {
            offset: 0.5,
            viewport_height: 800.0,
        }
    }
}

/// The pixel extent of one step element in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepExtent {
    pub top: f64,
    pub height: f64,
}

impl StepExtent {
    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// A discrete step event: the step's index in layout order plus the scroll
/// direction at the moment it fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepEvent {
    Enter { index: usize, direction: Direction },
    Exit { index: usize, direction: Direction },
}

// ---------------------------------------------------------------------------
// Scroller
// ---------------------------------------------------------------------------

/// Maps scroll positions to step enter/exit events.
#[derive(Debug, Clone)]
pub struct Scroller {
    config: ScrollerConfig,
    extents: Vec<StepExtent>,
    /// Index of the step the trigger line is currently inside.
    active: Option<usize>,
    last_trigger: Option<f64>,
}

impl Scroller {
    /// Create a scroller over the laid-out step extents.
    ///
    /// # Errors
    ///
    /// Rejects trigger offsets outside `(0, 1)`, non-positive viewports,
    /// and extents with non-positive height.
    pub fn new(config: ScrollerConfig, extents: Vec<StepExtent>) -> Result<Scroller, StoryError> {
        Self::validate(&config, &extents)?;
        Ok(Scroller {
            config,
            extents,
            active: None,
            last_trigger: None,
        })
    }

    fn validate(config: &ScrollerConfig, extents: &[StepExtent]) -> Result<(), StoryError> {
        if !(config.offset > 0.0 && config.offset < 1.0) {
            return Err(StoryError::InvalidOffset {
                offset: config.offset,
            });
        }
        if config.viewport_height <= 0.0 {
            return Err(StoryError::InvalidViewport {
                height: config.viewport_height,
            });
        }
        for (index, extent) in extents.iter().enumerate() {
            if extent.height <= 0.0 {
                return Err(StoryError::InvalidExtent {
                    index,
                    height: extent.height,
                });
            }
        }
        Ok(())
    }

    /// The step index currently holding the trigger line.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Process a new scroll position; returns the events it produced.
    ///
    /// At most one exit (the step that stopped being active) and one enter
    /// (the one that became active), exit first. Positions between steps
    /// produce just the exit; re-observing the same step produces nothing.
    pub fn observe(&mut self, scroll_y: f64) -> Vec<StepEvent> {
        let trigger = scroll_y + self.config.viewport_height * self.config.offset;
        let direction = match self.last_trigger {
            Some(last) if trigger < last => Direction::Up,
            _ => Direction::Down,
        };
        self.last_trigger = Some(trigger);

        let entered = self.extents.iter().position(|e| e.contains(trigger));
        if entered == self.active {
            return Vec::new();
        }

        let mut events = Vec::with_capacity(2);
        if let Some(index) = self.active {
            events.push(StepEvent::Exit { index, direction });
        }
        if let Some(index) = entered {
            events.push(StepEvent::Enter { index, direction });
        }
        tracing::debug!(scroll_y, trigger, ?direction, ?events, "scroll observed");

        self.active = entered;
        events
    }

    /// Replace the layout after a window resize. The active step is kept if
    /// its index still exists; the next observe reconciles the rest.
    pub fn resize(
        &mut self,
        config: ScrollerConfig,
        extents: Vec<StepExtent>,
    ) -> Result<(), StoryError> {
        Self::validate(&config, &extents)?;
        if let Some(active) = self.active {
            if active >= extents.len() {
                self.active = None;
            }
        }
        self.config = config;
        self.extents = extents;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
