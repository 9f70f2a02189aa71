//! Layout scoring: per-category IoU strategies and the weighted
//! aggregator that combines them into one similarity score.
//!
//! Two strategies implement the [`IouScorer`] interface. The
//! [`PolygonUnionIou`] strategy is the system of record: it collapses
//! self-overlap within a list before intersecting, so its scores are
//! exact. The [`PairwiseIou`] strategy is the cheaper approximate
//! baseline, kept for regression comparison; it can over-count when a
//! list's own boxes overlap each other.

pub mod pairwise;
pub mod polygon;
pub mod weighted;

use serde::{Deserialize, Serialize};

use crate::domain::element::VisualElement;

pub use pairwise::PairwiseIou;
pub use polygon::PolygonUnionIou;
pub use weighted::{compare_with, CategoryScore, ComparisonResult, ScoreBreakdown};

/// The per-category outcome of one IoU strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryIou {
    /// Intersection-over-union of the two element lists, in `[0,1]` for
    /// the polygon-union strategy (the pairwise baseline can exceed 1.0
    /// on self-overlapping input).
    pub iou: f64,
    /// The area used for weighting this category in the aggregate score.
    pub reference_area: f64,
}

impl CategoryIou {
    /// The zero score shared by every degenerate case.
    pub const ZERO: CategoryIou = CategoryIou {
        iou: 0.0,
        reference_area: 0.0,
    };
}

/// A strategy for scoring two same-category element lists against each
/// other.
///
/// Implementations must be pure: no state, no I/O, deterministic for a
/// given input. Degenerate inputs (either or both lists empty, zero-area
/// unions) resolve to zero scores, never to errors.
pub trait IouScorer {
    /// Scores `candidate` against `reference`.
    fn score(&self, candidate: &[VisualElement], reference: &[VisualElement]) -> CategoryIou;
}

/// Named selection of the scoring strategy used by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringStrategy {
    /// Sum of pairwise box intersections; approximate baseline.
    Pairwise,
    /// Exact polygon-union IoU; the system of record.
    #[default]
    PolygonUnion,
}

impl ScoringStrategy {
    /// The scorer implementing this strategy.
    pub fn scorer(self) -> &'static (dyn IouScorer + Send + Sync) {
        match self {
            ScoringStrategy::Pairwise => &PairwiseIou,
            ScoringStrategy::PolygonUnion => &PolygonUnionIou,
        }
    }
}
