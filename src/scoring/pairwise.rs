//! Naive pairwise IoU scoring.

use itertools::iproduct;

use crate::domain::element::VisualElement;
use crate::scoring::{CategoryIou, IouScorer};

/// Approximate IoU over two element lists by summing pairwise box
/// intersections.
///
/// Total intersection is the sum of [`intersection_area`] over the full
/// cartesian product of the two lists; the union is the summed box areas
/// minus that intersection. Boxes overlapping *within* one list are not
/// deduplicated, so the score over-counts on self-overlapping input and
/// can exceed 1.0. Kept as a cheap baseline; production scoring uses
/// [`crate::scoring::PolygonUnionIou`].
///
/// [`intersection_area`]: crate::processors::geometry::BoundingBox::intersection_area
#[derive(Debug, Clone, Copy, Default)]
pub struct PairwiseIou;

impl IouScorer for PairwiseIou {
    fn score(&self, candidate: &[VisualElement], reference: &[VisualElement]) -> CategoryIou {
        let total_intersection: f64 = iproduct!(candidate, reference)
            .map(|(a, b)| a.bounding_box.intersection_area(&b.bounding_box))
            .sum();
        let candidate_area: f64 = candidate.iter().map(|e| e.bounding_box.area()).sum();
        let reference_area: f64 = reference.iter().map(|e| e.bounding_box.area()).sum();

        let total_area = candidate_area + reference_area;
        let total_union = total_area - total_intersection;
        let iou = if total_union > 0.0 {
            total_intersection / total_union
        } else {
            0.0
        };
        CategoryIou {
            iou,
            reference_area: total_area,
        }
    }
}
