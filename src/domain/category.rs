//! The closed set of visual element categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a visible UI element extracted from a rendered page.
///
/// The set is closed on purpose: the collector queries one selector set
/// per category, and every site that iterates categories matches
/// exhaustively so that a misspelled or silently-added label cannot be
/// dropped. Wire names use `snake_case` to match the collector payload.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ElementCategory {
    /// Embedded video players.
    Video,
    /// Images.
    Image,
    /// Text-bearing blocks (paragraphs, headings, labels, ...).
    TextBlock,
    /// Forms and tables.
    FormTable,
    /// Buttons and button-like controls.
    Button,
    /// Navigation bars and menus.
    NavBar,
    /// Horizontal rules and separator elements.
    Divider,
}

impl ElementCategory {
    /// Every category, in a fixed order.
    ///
    /// Iterate this constant instead of collecting map keys so that
    /// category handling stays exhaustive and deterministic.
    pub const ALL: [ElementCategory; 7] = [
        ElementCategory::Video,
        ElementCategory::Image,
        ElementCategory::TextBlock,
        ElementCategory::FormTable,
        ElementCategory::Button,
        ElementCategory::NavBar,
        ElementCategory::Divider,
    ];

    /// The collector wire label for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementCategory::Video => "video",
            ElementCategory::Image => "image",
            ElementCategory::TextBlock => "text_block",
            ElementCategory::FormTable => "form_table",
            ElementCategory::Button => "button",
            ElementCategory::NavBar => "nav_bar",
            ElementCategory::Divider => "divider",
        }
    }
}

impl fmt::Display for ElementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_labels_round_trip() {
        for category in ElementCategory::ALL {
            let label = serde_json::to_string(&category).unwrap();
            assert_eq!(label, format!("\"{category}\""));
            let parsed: ElementCategory = serde_json::from_str(&label).unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn unknown_label_is_a_deserialization_error() {
        let result: Result<ElementCategory, _> = serde_json::from_str("\"textblock\"");
        assert!(result.is_err());
    }

    #[test]
    fn all_covers_every_category_once() {
        let mut labels: Vec<&str> = ElementCategory::ALL.iter().map(|c| c.as_str()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 7);
    }
}
