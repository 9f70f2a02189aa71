//! Boundary contract with the external DOM collector.
//!
//! The collector is the headless-browser subsystem that renders a page,
//! queries the live DOM with one selector set per category and reports
//! the visible elements' bounding boxes in page pixels, together with the
//! total rendered page dimensions. Its implementation lives outside this
//! crate; this module pins down the data it must produce and the one
//! policy the boundary carries: **render failures surface as an empty
//! page, never as an error**, so a broken candidate scores 0 against a
//! populated reference and a batch run keeps going.

use std::collections::BTreeMap;
use std::io;

use serde::{Deserialize, Serialize};

use crate::core::errors::LayoutError;
use crate::domain::category::ElementCategory;
use crate::processors::geometry::BoundingBox;

/// One raw element record as reported by the collector.
///
/// Boxes are in page pixels. The collector only reports elements that are
/// visible and have non-zero width and height; for the `text_block`
/// category it only reports elements whose direct children include a
/// non-empty text node (pure container elements are excluded upstream,
/// otherwise their oversized boxes would inflate merged blocks).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawElement {
    /// The element's bounding box in page pixels.
    #[serde(rename = "box")]
    pub bounding_box: BoundingBox,
    /// Direct text content; `null` for non-text categories.
    #[serde(default)]
    pub text: Option<String>,
}

/// The per-page payload produced by the collector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPage {
    /// Full rendered page width in pixels (`document.documentElement.scrollWidth`).
    pub total_width: f64,
    /// Full rendered page height in pixels (`document.documentElement.scrollHeight`).
    pub total_height: f64,
    /// Raw element records keyed by category wire label.
    #[serde(default)]
    pub elements: BTreeMap<ElementCategory, Vec<RawElement>>,
}

impl RawPage {
    /// Creates a page with the given dimensions and no elements yet.
    pub fn new(total_width: f64, total_height: f64) -> Self {
        Self {
            total_width,
            total_height,
            elements: BTreeMap::new(),
        }
    }

    /// The mandated render-failure encoding: no elements, zero
    /// dimensions.
    ///
    /// Collector implementations must return this instead of propagating
    /// a rendering error.
    pub fn empty() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Appends a record under the given category.
    pub fn push_element(&mut self, category: ElementCategory, element: RawElement) {
        self.elements.entry(category).or_default().push(element);
    }

    /// Returns true if no category holds any record.
    pub fn is_empty(&self) -> bool {
        self.elements.values().all(Vec::is_empty)
    }

    /// Parses a collector payload from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::CollectorPayload`] if the payload is
    /// malformed — including unknown category labels, which are rejected
    /// rather than silently dropped.
    pub fn from_json_str(payload: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Parses a collector payload from a reader.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::CollectorPayload`] if the payload is
    /// malformed.
    pub fn from_json_reader<R: io::Read>(reader: R) -> Result<Self, LayoutError> {
        Ok(serde_json::from_reader(reader)?)
    }
}

/// A source of raw page layouts.
///
/// This is the seam a browser-automation driver plugs into. The contract
/// is infallible by design: implementations must map any render failure
/// (navigation timeout, crashed renderer, invalid markup) to
/// [`RawPage::empty()`], never to a panic or an error value, so that one
/// broken page cannot abort a batch scoring run.
pub trait LayoutCollector {
    /// Renders `target` (a URL or file path) and extracts its raw layout.
    fn collect(&mut self, target: &str) -> RawPage;
}
