//! Visual element type.

use serde::{Deserialize, Serialize};

use crate::domain::category::ElementCategory;
use crate::processors::geometry::BoundingBox;

/// A single visible UI element extracted from a rendered page.
///
/// Groups the category, the bounding box and the (text-block only) text
/// content in one struct instead of parallel per-field lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualElement {
    /// The category this element was extracted under.
    pub category: ElementCategory,
    /// The element's bounding box.
    pub bounding_box: BoundingBox,
    /// Text content. Populated only for [`ElementCategory::TextBlock`]
    /// elements and only when non-empty after trimming.
    pub text: Option<String>,
}

impl VisualElement {
    /// Creates an element without text content.
    pub fn new(category: ElementCategory, bounding_box: BoundingBox) -> Self {
        Self {
            category,
            bounding_box,
            text: None,
        }
    }

    /// Creates a text block element with its text content.
    pub fn with_text(
        category: ElementCategory,
        bounding_box: BoundingBox,
        text: impl Into<String>,
    ) -> Self {
        Self {
            category,
            bounding_box,
            text: Some(text.into()),
        }
    }

    /// Returns true if this element carries text content.
    pub fn has_text(&self) -> bool {
        self.text.is_some()
    }
}
