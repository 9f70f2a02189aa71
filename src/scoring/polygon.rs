//! Exact polygon-union IoU scoring.

use geo::{coord, Area, BooleanOps, MultiPolygon, Rect};

use crate::domain::element::VisualElement;
use crate::processors::geometry::BoundingBox;
use crate::scoring::{CategoryIou, IouScorer};

/// Exact IoU over two element lists via polygon unions.
///
/// Every box becomes a rectangle polygon; each list is collapsed into a
/// single (multi-)polygonal region first, so boxes overlapping within one
/// list are counted once. The score is the area of the two regions'
/// intersection over the area of their union. This is the strategy the
/// system of record uses.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolygonUnionIou;

/// Collapses a list of elements into the union of their box rectangles.
fn union_region(elements: &[VisualElement]) -> MultiPolygon<f64> {
    let mut polygons = elements
        .iter()
        .map(|element| rectangle(&element.bounding_box).to_polygon());
    let Some(first) = polygons.next() else {
        return MultiPolygon::new(Vec::new());
    };
    polygons.fold(MultiPolygon::new(vec![first]), |region, polygon| {
        region.union(&MultiPolygon::new(vec![polygon]))
    })
}

fn rectangle(bounding_box: &BoundingBox) -> Rect<f64> {
    Rect::new(
        coord! { x: bounding_box.x, y: bounding_box.y },
        coord! { x: bounding_box.right(), y: bounding_box.bottom() },
    )
}

impl IouScorer for PolygonUnionIou {
    /// Scores `candidate` against `reference`.
    ///
    /// Degenerate cases are resolved without errors: two empty lists
    /// yield a zero score with zero weighting area; one empty list yields
    /// a zero score weighted by the non-empty side's union area (so an
    /// empty candidate still counts against a populated reference); a
    /// zero-area union yields a zero score.
    fn score(&self, candidate: &[VisualElement], reference: &[VisualElement]) -> CategoryIou {
        if candidate.is_empty() && reference.is_empty() {
            return CategoryIou::ZERO;
        }
        if candidate.is_empty() {
            return CategoryIou {
                iou: 0.0,
                reference_area: union_region(reference).unsigned_area(),
            };
        }
        if reference.is_empty() {
            return CategoryIou {
                iou: 0.0,
                reference_area: union_region(candidate).unsigned_area(),
            };
        }

        let candidate_region = union_region(candidate);
        let reference_region = union_region(reference);

        let intersection_area = candidate_region
            .intersection(&reference_region)
            .unsigned_area();
        let union_area = candidate_region.union(&reference_region).unsigned_area();

        let iou = if union_area > 0.0 {
            intersection_area / union_area
        } else {
            0.0
        };
        CategoryIou {
            iou,
            reference_area: union_area,
        }
    }
}
