//! Timeline connector: the plain vertical line joining event dots.
//!
//! The surrounding document lays out one dot per narrative event; after
//! layout it measures the dot centers and the container size, and this
//! module draws a single line from the first dot to the last. The connector
//! is always drawn with the plain backend -- in the original it is an exact
//! SVG line even when the tally marks are hand-drawn.

use inktally_sketch::backend::{PlainBackend, StrokeBackend};
use inktally_sketch::stroke::{Line, Point, StrokeStyle};
use serde::{Deserialize, Serialize};

use crate::svg::{SvgDocument, SvgElement};

/// Connector stroke color from the original stylesheet.
const CONNECTOR_COLOR: &str = "#bdc3c7";

/// Measured geometry of the timeline container: its size and the centers of
/// the event dots, in container coordinates, document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineGeometry {
    pub width: f64,
    pub height: f64,
    pub dots: Vec<Point>,
}

impl TimelineGeometry {
    /// The connector line: vertical at the first dot's x, from the first
    /// dot's center down to the last dot's center. `None` with no dots --
    /// callers skip drawing rather than erroring.
    pub fn connector(&self) -> Option<Line> {
        let first = self.dots.first()?;
        let last = self.dots.last()?;
        Some(Line::new(first.x, first.y, first.x, last.y))
    }

    /// Render the connector into an SVG document sized to the container.
    ///
    /// An empty geometry produces an empty document.
    pub fn render(&self) -> SvgDocument {
        let mut doc = SvgDocument::new(self.width, self.height);
        let Some(line) = self.connector() else {
            return doc;
        };

        let style = StrokeStyle {
            stroke_width: 2.0,
            ..Default::default()
        };
        let stroke = PlainBackend.stroke(line, &style, 0);
        doc.push(
            SvgElement::new("path")
                .class("timeline-line")
                .attr("d", stroke.to_path_data())
                .attr("stroke", CONNECTOR_COLOR)
                .attr("stroke-width", style.stroke_width)
                .attr("fill", "none"),
        );
        doc
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connector_runs_vertically_between_first_and_last_dots() {
        let geometry = TimelineGeometry {
            width: 300.0,
            height: 900.0,
            dots: vec![
                Point::new(40.0, 50.0),
                Point::new(41.5, 300.0), // slight layout drift is ignored
                Point::new(40.0, 850.0),
            ],
        };

        let line = geometry.connector().unwrap();
        assert_eq!(line.from, Point::new(40.0, 50.0));
        assert_eq!(line.to, Point::new(40.0, 850.0));
    }

    #[test]
    fn single_dot_collapses_to_a_point() {
        let geometry = TimelineGeometry {
            width: 100.0,
            height: 100.0,
            dots: vec![Point::new(10.0, 20.0)],
        };
        let line = geometry.connector().unwrap();
        assert_eq!(line.from, line.to);
    }

    #[test]
    fn no_dots_renders_empty_document() {
        let geometry = TimelineGeometry {
            width: 100.0,
            height: 100.0,
            dots: Vec::new(),
        };
        assert!(geometry.connector().is_none());
        assert!(geometry.render().elements().is_empty());
    }

    #[test]
    fn render_produces_an_exact_line() {
        let geometry = TimelineGeometry {
            width: 200.0,
            height: 400.0,
            dots: vec![Point::new(30.0, 10.0), Point::new(30.0, 390.0)],
        };
        let doc = geometry.render();
        assert_eq!(doc.elements().len(), 1);

        let el = &doc.elements()[0];
        assert_eq!(el.get_attr("stroke"), Some(CONNECTOR_COLOR));
        assert_eq!(el.get_attr("d"), Some("M30.00 10.00 L30.00 390.00"));
    }
}
