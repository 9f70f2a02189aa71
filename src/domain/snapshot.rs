//! Categorized layout snapshot of one rendered page.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::category::ElementCategory;
use crate::domain::element::VisualElement;

/// The categorized, normalized set of visual elements of one page.
///
/// Element order within a category is the collector's insertion order; it
/// does not affect scoring but makes consolidation tie-breaking
/// deterministic. A snapshot is built once per rendered page, owned by
/// the comparison that built it, and never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    elements: BTreeMap<ElementCategory, Vec<VisualElement>>,
}

impl LayoutSnapshot {
    /// Creates an empty snapshot.
    ///
    /// An empty snapshot is also the representation of a failed render:
    /// the collector encodes failures as a page with no elements rather
    /// than an error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element to its category's sequence.
    ///
    /// The element's own category determines the sequence it lands in, so
    /// the key/category invariant holds by construction.
    pub fn insert(&mut self, element: VisualElement) {
        self.elements
            .entry(element.category)
            .or_default()
            .push(element);
    }

    /// The elements of one category, in insertion order.
    ///
    /// Categories with no elements yield an empty slice; a missing
    /// category is indistinguishable from an empty one.
    pub fn elements_in(&self, category: ElementCategory) -> &[VisualElement] {
        self.elements
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total number of elements across all categories.
    pub fn len(&self) -> usize {
        self.elements.values().map(Vec::len).sum()
    }

    /// Returns true if no category holds any element.
    pub fn is_empty(&self) -> bool {
        self.elements.values().all(Vec::is_empty)
    }
}
