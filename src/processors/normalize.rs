//! Coordinate normalization.
//!
//! The collector reports boxes in page pixels. Scoring compares pages that
//! may have been rendered at different sizes, so every box is rescaled to
//! `[0,1]` page-relative units by dividing through the total rendered page
//! dimensions before snapshots are compared.

use crate::domain::element::VisualElement;
use crate::processors::geometry::BoundingBox;

/// Rescales every element's box from page pixels to page-relative units.
///
/// `total_width` and `total_height` are the full rendered page dimensions
/// reported by the collector; callers validate that both are positive
/// before normalizing a non-empty element list.
pub fn normalize_elements(elements: &mut [VisualElement], total_width: f64, total_height: f64) {
    for element in elements {
        let pixel_box = element.bounding_box;
        element.bounding_box = BoundingBox::new(
            pixel_box.x / total_width,
            pixel_box.y / total_height,
            pixel_box.width / total_width,
            pixel_box.height / total_height,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::category::ElementCategory;

    #[test]
    fn boxes_are_rescaled_to_page_relative_units() {
        let mut elements = vec![VisualElement::new(
            ElementCategory::Image,
            BoundingBox::new(320.0, 240.0, 640.0, 480.0),
        )];
        normalize_elements(&mut elements, 1280.0, 960.0);
        assert_eq!(
            elements[0].bounding_box,
            BoundingBox::new(0.25, 0.25, 0.5, 0.5)
        );
    }

    #[test]
    fn empty_list_is_a_no_op() {
        let mut elements: Vec<VisualElement> = Vec::new();
        normalize_elements(&mut elements, 1280.0, 960.0);
        assert!(elements.is_empty());
    }
}
