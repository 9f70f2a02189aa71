//! Geometric primitives for layout comparison.
//!
//! This module provides the axis-aligned bounding box used throughout the
//! pipeline, together with the adjacency, containment, union and
//! intersection predicates the text block consolidator and the scorers are
//! built on. All operations are pure functions of their inputs.

use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box.
///
/// Coordinates are page pixels as produced by the collector, or `[0,1]`
/// page-relative units after normalization. Width and height are always
/// non-negative; the collector contract guarantees this and the
/// constructor asserts it rather than re-validating downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// X-coordinate of the left edge.
    pub x: f64,
    /// Y-coordinate of the top edge.
    pub y: f64,
    /// Width of the box.
    pub width: f64,
    /// Height of the box.
    pub height: f64,
}

impl BoundingBox {
    /// Creates a new bounding box.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is negative. Negative dimensions
    /// reaching this crate are a collector contract violation, not a
    /// recoverable condition.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        assert!(
            width >= 0.0 && height >= 0.0,
            "bounding box dimensions must be non-negative, got {width}x{height}"
        );
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// X-coordinate of the right edge.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Y-coordinate of the bottom edge.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Area of the box.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// X-coordinate of the box center.
    #[inline]
    pub fn horizontal_center(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Y-coordinate of the box center.
    #[inline]
    pub fn vertical_center(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Checks whether two boxes are adjacent under the given tolerances.
    ///
    /// Two boxes are adjacent when they are nearly aligned on one axis
    /// (centers within `align_tolerance`) and sequential on the other
    /// (the leading box's far edge, expanded by `adj_tolerance`, reaches
    /// the trailing box's near edge). The strict ordering guard
    /// (`self.x < other.x` / `other.x < self.x`) keeps the two sequential
    /// clauses mutually exclusive, so the predicate is symmetric in its
    /// arguments. Tolerances are in the same units as the boxes; in the
    /// pipeline this is always page pixels, pre-normalization.
    pub fn is_adjacent(&self, other: &Self, align_tolerance: f64, adj_tolerance: f64) -> bool {
        let vertically_aligned =
            (self.vertical_center() - other.vertical_center()).abs() <= align_tolerance;
        let horizontally_adjacent = (self.right() + adj_tolerance >= other.x && self.x < other.x)
            || (other.right() + adj_tolerance >= self.x && other.x < self.x);

        let horizontally_aligned =
            (self.horizontal_center() - other.horizontal_center()).abs() <= align_tolerance;
        let vertically_adjacent = (self.bottom() + adj_tolerance >= other.y && self.y < other.y)
            || (other.bottom() + adj_tolerance >= self.y && other.y < self.y);

        (vertically_aligned && horizontally_adjacent)
            || (horizontally_aligned && vertically_adjacent)
    }

    /// Computes the axis-aligned bounding box of the union of two boxes.
    ///
    /// The result always contains both inputs.
    pub fn union(&self, other: &Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self {
            x,
            y,
            width: right - x,
            height: bottom - y,
        }
    }

    /// Checks whether this box lies fully inside `container`.
    ///
    /// Containment is non-strict: a box is inside a container it exactly
    /// coincides with.
    pub fn is_fully_inside(&self, container: &Self) -> bool {
        self.x >= container.x
            && self.y >= container.y
            && self.right() <= container.right()
            && self.bottom() <= container.bottom()
    }

    /// Computes the area of overlap between two boxes.
    ///
    /// Returns `0.0` when the boxes do not overlap on either axis; the
    /// result is never negative.
    pub fn intersection_area(&self, other: &Self) -> f64 {
        let inter_width = self.right().min(other.right()) - self.x.max(other.x);
        let inter_height = self.bottom().min(other.bottom()) - self.y.max(other.y);
        inter_width.max(0.0) * inter_height.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::core::config::{DEFAULT_ADJ_TOLERANCE, DEFAULT_ALIGN_TOLERANCE};

    fn adjacent(a: &BoundingBox, b: &BoundingBox) -> bool {
        a.is_adjacent(b, DEFAULT_ALIGN_TOLERANCE, DEFAULT_ADJ_TOLERANCE)
    }

    #[test]
    fn horizontally_sequential_boxes_are_adjacent() {
        let a = BoundingBox::new(0.0, 0.0, 100.0, 20.0);
        let b = BoundingBox::new(102.0, 0.0, 50.0, 20.0);
        assert!(adjacent(&a, &b));
        assert!(adjacent(&b, &a));
    }

    #[test]
    fn vertically_stacked_boxes_are_adjacent() {
        let a = BoundingBox::new(10.0, 0.0, 80.0, 30.0);
        let b = BoundingBox::new(10.0, 32.0, 80.0, 30.0);
        assert!(adjacent(&a, &b));
        assert!(adjacent(&b, &a));
    }

    #[test]
    fn distant_boxes_are_not_adjacent() {
        let a = BoundingBox::new(0.0, 0.0, 100.0, 20.0);
        let b = BoundingBox::new(200.0, 300.0, 50.0, 20.0);
        assert!(!adjacent(&a, &b));
        assert!(!adjacent(&b, &a));
    }

    #[test]
    fn misaligned_boxes_are_not_adjacent() {
        // Sequential on x but vertical centers 30px apart.
        let a = BoundingBox::new(0.0, 0.0, 100.0, 20.0);
        let b = BoundingBox::new(102.0, 30.0, 50.0, 20.0);
        assert!(!adjacent(&a, &b));
    }

    #[test]
    fn adjacency_at_exact_tolerance_gap_is_symmetric() {
        // Gap between the boxes is exactly the adjacency tolerance.
        let a = BoundingBox::new(0.0, 0.0, 100.0, 20.0);
        let b = BoundingBox::new(100.0 + DEFAULT_ADJ_TOLERANCE, 0.0, 50.0, 20.0);
        assert!(adjacent(&a, &b));
        assert!(adjacent(&b, &a));

        // One pixel past the tolerance, in both argument orders.
        let c = BoundingBox::new(100.0 + DEFAULT_ADJ_TOLERANCE + 1.0, 0.0, 50.0, 20.0);
        assert!(!adjacent(&a, &c));
        assert!(!adjacent(&c, &a));
    }

    #[test]
    fn adjacency_is_symmetric_for_random_layout_pairs() {
        let boxes = [
            BoundingBox::new(0.0, 0.0, 50.0, 10.0),
            BoundingBox::new(53.0, 1.0, 40.0, 10.0),
            BoundingBox::new(0.0, 13.0, 90.0, 10.0),
            BoundingBox::new(200.0, 0.0, 20.0, 20.0),
            BoundingBox::new(48.0, 0.0, 10.0, 10.0),
        ];
        for a in &boxes {
            for b in &boxes {
                assert_eq!(adjacent(a, b), adjacent(b, a), "a={a:?} b={b:?}");
            }
        }
    }

    #[test]
    fn union_contains_both_inputs() {
        let a = BoundingBox::new(5.0, 5.0, 20.0, 10.0);
        let b = BoundingBox::new(30.0, 0.0, 10.0, 40.0);
        let merged = a.union(&b);
        assert!(a.is_fully_inside(&merged));
        assert!(b.is_fully_inside(&merged));
        assert_eq!(merged, BoundingBox::new(5.0, 0.0, 35.0, 40.0));
    }

    #[test]
    fn containment_is_non_strict() {
        let outer = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
        let inner = BoundingBox::new(10.0, 10.0, 50.0, 50.0);
        let partial = BoundingBox::new(80.0, 80.0, 40.0, 40.0);

        assert!(inner.is_fully_inside(&outer));
        assert!(outer.is_fully_inside(&outer));
        assert!(!partial.is_fully_inside(&outer));
        assert!(!outer.is_fully_inside(&inner));
    }

    #[test]
    fn intersection_area_of_disjoint_boxes_is_zero() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(20.0, 20.0, 10.0, 10.0);
        assert_eq!(a.intersection_area(&b), 0.0);

        // Touching edges overlap on a line, not an area.
        let c = BoundingBox::new(10.0, 0.0, 10.0, 10.0);
        assert_eq!(a.intersection_area(&c), 0.0);
    }

    #[test]
    fn intersection_area_of_identical_boxes_is_own_area() {
        let a = BoundingBox::new(3.0, 4.0, 12.0, 7.0);
        assert!((a.intersection_area(&a) - a.area()).abs() < 1e-12);
    }

    #[test]
    fn intersection_area_of_partial_overlap() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(5.0, 5.0, 10.0, 10.0);
        assert!((a.intersection_area(&b) - 25.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "non-negative")]
    fn negative_dimensions_panic() {
        let _ = BoundingBox::new(0.0, 0.0, -1.0, 5.0);
    }
}
