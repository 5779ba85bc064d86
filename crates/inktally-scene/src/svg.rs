//! Minimal SVG element tree and writer.
//!
//! Only what the scene needs: a flat list of elements with attributes,
//! classes, and optional text content, serialized into a standalone `<svg>`
//! document. Attribute values are escaped; no external SVG crate is
//! involved.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SvgElement
// ---------------------------------------------------------------------------

/// One SVG element: tag name, attributes in insertion order, CSS classes,
/// optional text content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvgElement {
    name: String,
    attrs: Vec<(String, String)>,
    classes: Vec<String>,
    text: Option<String>,
}

impl SvgElement {
    /// Create an element with the given tag name.
    pub fn new(name: &str) -> SvgElement {
        SvgElement {
            name: name.to_owned(),
            attrs: Vec::new(),
            classes: Vec::new(),
            text: None,
        }
    }

    /// Add or overwrite an attribute.
    pub fn attr(mut self, key: &str, value: impl ToString) -> SvgElement {
        let value = value.to_string();
        if let Some(existing) = self.attrs.iter_mut().find(|(k, _)| k == key) {
            existing.1 = value;
        } else {
            self.attrs.push((key.to_owned(), value));
        }
        self
    }

    /// Append a CSS class.
    pub fn class(mut self, class: &str) -> SvgElement {
        self.classes.push(class.to_owned());
        self
    }

    /// Set text content.
    pub fn text(mut self, text: &str) -> SvgElement {
        self.text = Some(text.to_owned());
        self
    }

    /// The tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute lookup.
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the element carries the given class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn write_to(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.name);
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.classes.join(" ")));
        }
        for (key, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", key, escape(value));
        }
        match &self.text {
            Some(text) => {
                let _ = write!(out, ">{}</{}>", escape(text), self.name);
            }
            None => {
                let _ = write!(out, "/>");
            }
        }
    }
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ---------------------------------------------------------------------------
// SvgDocument
// ---------------------------------------------------------------------------

/// A standalone SVG document with a flat element list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvgDocument {
    width: f64,
    height: f64,
    elements: Vec<SvgElement>,
}

impl SvgDocument {
    /// Create an empty document with the given size (also its viewBox).
    pub fn new(width: f64, height: f64) -> SvgDocument {
        SvgDocument {
            width,
            height,
            elements: Vec::new(),
        }
    }

    /// Append an element.
    pub fn push(&mut self, element: SvgElement) {
        self.elements.push(element);
    }

    /// All elements in document order.
    pub fn elements(&self) -> &[SvgElement] {
        &self.elements
    }

    /// Document width in user units.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Document height in user units.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Serialize the whole document.
    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{:.0}\" height=\"{:.0}\" viewBox=\"0 0 {:.0} {:.0}\">",
            self.width, self.height, self.width, self.height
        );
        for element in &self.elements {
            element.write_to(&mut out);
        }
        out.push_str("</svg>");
        out
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_round_trip_basics() {
        let el = SvgElement::new("path")
            .class("tally-mark")
            .class("vertical")
            .attr("d", "M0 0 L1 1")
            .attr("stroke-width", 4);

        assert!(el.has_class("vertical"));
        assert_eq!(el.get_attr("d"), Some("M0 0 L1 1"));
        assert_eq!(el.get_attr("stroke-width"), Some("4"));
        assert_eq!(el.get_attr("missing"), None);
    }

    #[test]
    fn attr_overwrites_existing_key() {
        let el = SvgElement::new("line").attr("x1", 1).attr("x1", 2);
        assert_eq!(el.get_attr("x1"), Some("2"));
    }

    #[test]
    fn document_serializes_with_viewbox() {
        let mut doc = SvgDocument::new(120.0, 60.0);
        doc.push(SvgElement::new("line").attr("x1", 0).attr("y1", 0));

        let svg = doc.to_svg_string();
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.contains("viewBox=\"0 0 120 60\""));
        assert!(svg.contains("<line x1=\"0\" y1=\"0\"/>"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn text_content_is_escaped() {
        let el = SvgElement::new("text").text("3 < 5 & \"so on\"");
        let mut out = String::new();
        el.write_to(&mut out);
        assert_eq!(out, "<text>3 &lt; 5 &amp; &quot;so on&quot;</text>");
    }
}
