//! Area-weighted aggregation of per-category scores.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::category::ElementCategory;
use crate::domain::snapshot::LayoutSnapshot;
use crate::scoring::IouScorer;

/// Per-category score and its share of the overall weighting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    /// IoU of the category's element lists.
    pub iou: f64,
    /// This category's share of the total weighting area, in `[0,1]`.
    pub weight: f64,
}

/// Per-category breakdown of one comparison.
///
/// Only categories present in at least one of the two snapshots appear;
/// weights sum to 1 over those entries (or are all zero in the degenerate
/// zero-total-area case).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    categories: BTreeMap<ElementCategory, CategoryScore>,
}

impl ScoreBreakdown {
    /// The score entry for one category, if it was present in either
    /// snapshot.
    pub fn get(&self, category: ElementCategory) -> Option<&CategoryScore> {
        self.categories.get(&category)
    }

    /// Iterates the scored categories in their fixed enum order.
    pub fn iter(&self) -> impl Iterator<Item = (ElementCategory, &CategoryScore)> {
        self.categories.iter().map(|(category, score)| (*category, score))
    }

    /// Number of scored categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns true if no category was present in either snapshot.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    fn insert(&mut self, category: ElementCategory, score: CategoryScore) {
        self.categories.insert(category, score);
    }
}

/// The outcome of comparing one candidate snapshot against a reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Overall similarity in `[0,1]`.
    pub score: f64,
    /// Per-category `(iou, weight)` breakdown.
    pub breakdown: ScoreBreakdown,
}

/// Compares two snapshots with the given per-category scorer.
///
/// Every category of the closed set is considered; a category empty in
/// both snapshots is excluded from the breakdown, one present on either
/// side contributes its `(iou, area)` pair. The overall score is the
/// area-weighted mean of the per-category IoUs, `0.0` when the total
/// weighting area is zero (two empty snapshots, or a render failure
/// against an empty reference) — degenerate inputs never raise.
pub fn compare_with(
    scorer: &dyn IouScorer,
    candidate: &LayoutSnapshot,
    reference: &LayoutSnapshot,
) -> ComparisonResult {
    let mut scored = Vec::with_capacity(ElementCategory::ALL.len());
    for category in ElementCategory::ALL {
        let candidate_elements = candidate.elements_in(category);
        let reference_elements = reference.elements_in(category);
        if candidate_elements.is_empty() && reference_elements.is_empty() {
            continue;
        }
        let category_iou = scorer.score(candidate_elements, reference_elements);
        tracing::trace!(
            "Category {}: iou={:.4} area={:.6}",
            category,
            category_iou.iou,
            category_iou.reference_area
        );
        scored.push((category, category_iou));
    }

    let total_area: f64 = scored.iter().map(|(_, s)| s.reference_area).sum();

    let mut breakdown = ScoreBreakdown::default();
    let mut weighted_sum = 0.0;
    for (category, category_iou) in scored {
        let weight = if total_area > 0.0 {
            category_iou.reference_area / total_area
        } else {
            0.0
        };
        weighted_sum += category_iou.reference_area * category_iou.iou;
        breakdown.insert(
            category,
            CategoryScore {
                iou: category_iou.iou,
                weight,
            },
        );
    }

    let score = if total_area > 0.0 {
        weighted_sum / total_area
    } else {
        0.0
    };
    ComparisonResult { score, breakdown }
}
