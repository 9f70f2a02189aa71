//! High-level comparison pipeline.
//!
//! This module wires the pieces together: a [`SnapshotBuilder`] turns one
//! collector payload into a normalized [`LayoutSnapshot`], and
//! [`LayoutSimilarity`] scores candidate snapshots against a reference,
//! one at a time or as a batch. Batch comparisons share no state and run
//! in parallel.

use rayon::prelude::*;

use crate::collector::{RawElement, RawPage};
use crate::core::config::ConsolidationConfig;
use crate::core::errors::LayoutError;
use crate::domain::category::ElementCategory;
use crate::domain::element::VisualElement;
use crate::domain::snapshot::LayoutSnapshot;
use crate::processors::consolidate::TextBlockConsolidator;
use crate::processors::normalize::normalize_elements;
use crate::scoring::{compare_with, ComparisonResult, ScoringStrategy};
use crate::utils::validation::validate_page_dimensions;

/// Builds a normalized layout snapshot from one collector payload.
///
/// Per category the builder keeps the collector's insertion order, trims
/// text block content (dropping records left empty by the trim), runs the
/// text block consolidator while coordinates are still in page pixels,
/// and finally rescales every box to `[0,1]` page-relative units.
#[derive(Debug, Clone, Default)]
pub struct SnapshotBuilder {
    consolidator: TextBlockConsolidator,
}

impl SnapshotBuilder {
    /// Creates a builder with the given consolidation tolerances.
    pub fn new(config: ConsolidationConfig) -> Self {
        Self {
            consolidator: TextBlockConsolidator::new(config),
        }
    }

    /// Builds the snapshot for one page.
    ///
    /// An entirely empty page — the collector's render-failure encoding —
    /// builds an empty snapshot without consulting the page dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidPageDimensions`] if the page has
    /// elements but non-positive total dimensions; normalization would be
    /// meaningless.
    pub fn build(&self, page: RawPage) -> Result<LayoutSnapshot, LayoutError> {
        let RawPage {
            total_width,
            total_height,
            mut elements,
        } = page;

        let mut collected: Vec<(ElementCategory, Vec<VisualElement>)> =
            Vec::with_capacity(ElementCategory::ALL.len());
        for category in ElementCategory::ALL {
            let records = elements.remove(&category).unwrap_or_default();
            let mut members = materialize(category, records);
            if category == ElementCategory::TextBlock {
                members = self.consolidator.consolidate(members);
            }
            collected.push((category, members));
        }

        let mut snapshot = LayoutSnapshot::new();
        let element_count: usize = collected.iter().map(|(_, members)| members.len()).sum();
        if element_count == 0 {
            return Ok(snapshot);
        }

        validate_page_dimensions(total_width, total_height)?;
        for (_, members) in &mut collected {
            normalize_elements(members, total_width, total_height);
        }

        for (_, members) in collected {
            for element in members {
                snapshot.insert(element);
            }
        }
        tracing::debug!("Built snapshot with {} elements", snapshot.len());
        Ok(snapshot)
    }
}

/// Converts raw records into visual elements.
///
/// Text block records carry their trimmed text; records whose text trims
/// to nothing are dropped (the collector excludes them upstream, but the
/// builder does not rely on that). Other categories never carry text.
fn materialize(category: ElementCategory, records: Vec<RawElement>) -> Vec<VisualElement> {
    if category == ElementCategory::TextBlock {
        records
            .into_iter()
            .filter_map(|record| {
                let trimmed = record
                    .text
                    .as_deref()
                    .map(str::trim)
                    .filter(|text| !text.is_empty())?;
                Some(VisualElement::with_text(
                    category,
                    record.bounding_box,
                    trimmed,
                ))
            })
            .collect()
    } else {
        records
            .into_iter()
            .map(|record| VisualElement::new(category, record.bounding_box))
            .collect()
    }
}

/// Fluent builder for [`LayoutSimilarity`].
#[derive(Debug, Clone, Default)]
pub struct LayoutSimilarityBuilder {
    consolidation: ConsolidationConfig,
    strategy: ScoringStrategy,
}

impl LayoutSimilarityBuilder {
    /// Creates a builder with default tolerances and the polygon-union
    /// strategy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the full consolidation configuration.
    pub fn with_consolidation(mut self, config: ConsolidationConfig) -> Self {
        self.consolidation = config;
        self
    }

    /// Overrides the center-alignment tolerance (page pixels).
    pub fn with_align_tolerance(mut self, tolerance: f64) -> Self {
        self.consolidation.align_tolerance = tolerance;
        self
    }

    /// Overrides the edge-adjacency tolerance (page pixels).
    pub fn with_adj_tolerance(mut self, tolerance: f64) -> Self {
        self.consolidation.adj_tolerance = tolerance;
        self
    }

    /// Selects the per-category scoring strategy.
    pub fn with_strategy(mut self, strategy: ScoringStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Builds the comparison engine.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfig`] if a tolerance is negative
    /// or non-finite.
    pub fn build(self) -> Result<LayoutSimilarity, LayoutError> {
        self.consolidation.validate()?;
        Ok(LayoutSimilarity {
            snapshot_builder: SnapshotBuilder::new(self.consolidation),
            strategy: self.strategy,
        })
    }
}

/// The layout similarity comparison engine.
///
/// Stateless once built: every comparison is a pure function of its two
/// snapshots, so batches parallelize without coordination.
#[derive(Debug, Clone)]
pub struct LayoutSimilarity {
    snapshot_builder: SnapshotBuilder,
    strategy: ScoringStrategy,
}

impl Default for LayoutSimilarity {
    fn default() -> Self {
        Self {
            snapshot_builder: SnapshotBuilder::default(),
            strategy: ScoringStrategy::default(),
        }
    }
}

impl LayoutSimilarity {
    /// Starts building an engine with custom settings.
    pub fn builder() -> LayoutSimilarityBuilder {
        LayoutSimilarityBuilder::new()
    }

    /// Builds the normalized snapshot for one collector payload.
    ///
    /// # Errors
    ///
    /// See [`SnapshotBuilder::build`].
    pub fn snapshot(&self, page: RawPage) -> Result<LayoutSnapshot, LayoutError> {
        self.snapshot_builder.build(page)
    }

    /// Compares one candidate snapshot against a reference.
    pub fn compare(
        &self,
        candidate: &LayoutSnapshot,
        reference: &LayoutSnapshot,
    ) -> ComparisonResult {
        compare_with(self.strategy.scorer(), candidate, reference)
    }

    /// Compares every candidate snapshot against one reference.
    ///
    /// Results are returned in candidate order. Comparisons are
    /// independent and run on the rayon thread pool.
    pub fn compare_batch(
        &self,
        candidates: &[LayoutSnapshot],
        reference: &LayoutSnapshot,
    ) -> Vec<ComparisonResult> {
        candidates
            .par_iter()
            .map(|candidate| self.compare(candidate, reference))
            .collect()
    }

    /// Scores a list of candidate pages against one reference page.
    ///
    /// Builds the reference snapshot once, then builds and scores every
    /// candidate. A candidate that failed to render arrives as an empty
    /// page and scores `0.0` against a populated reference instead of
    /// aborting the batch.
    ///
    /// # Errors
    ///
    /// Returns the first snapshot-building error (invalid page
    /// dimensions on a non-empty page).
    pub fn score_pages(
        &self,
        candidates: Vec<RawPage>,
        reference: RawPage,
    ) -> Result<Vec<ComparisonResult>, LayoutError> {
        let reference = self.snapshot(reference)?;
        let candidates = candidates
            .into_iter()
            .map(|page| self.snapshot(page))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!("Scoring {} candidate pages", candidates.len());
        Ok(self.compare_batch(&candidates, &reference))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::processors::geometry::BoundingBox;

    fn raw(x: f64, y: f64, width: f64, height: f64, text: Option<&str>) -> RawElement {
        RawElement {
            bounding_box: BoundingBox::new(x, y, width, height),
            text: text.map(str::to_string),
        }
    }

    fn sample_page() -> RawPage {
        let mut page = RawPage::new(1000.0, 1000.0);
        page.push_element(ElementCategory::Image, raw(500.0, 0.0, 500.0, 500.0, None));
        page.push_element(
            ElementCategory::TextBlock,
            raw(0.0, 0.0, 100.0, 20.0, Some("Hello")),
        );
        page.push_element(
            ElementCategory::TextBlock,
            raw(100.0, 0.0, 100.0, 20.0, Some("World")),
        );
        page
    }

    #[test]
    fn builder_consolidates_then_normalizes() {
        let snapshot = SnapshotBuilder::default().build(sample_page()).unwrap();

        let text_blocks = snapshot.elements_in(ElementCategory::TextBlock);
        assert_eq!(text_blocks.len(), 1);
        assert_eq!(text_blocks[0].text.as_deref(), Some("Hello World"));
        // Merged in pixels (0,0,200,20), then normalized by 1000x1000.
        assert_eq!(
            text_blocks[0].bounding_box,
            BoundingBox::new(0.0, 0.0, 0.2, 0.02)
        );

        let images = snapshot.elements_in(ElementCategory::Image);
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].bounding_box, BoundingBox::new(0.5, 0.0, 0.5, 0.5));
    }

    #[test]
    fn text_records_trimming_to_empty_are_dropped() {
        let mut page = RawPage::new(100.0, 100.0);
        page.push_element(
            ElementCategory::TextBlock,
            raw(0.0, 0.0, 10.0, 10.0, Some("   ")),
        );
        page.push_element(ElementCategory::TextBlock, raw(0.0, 50.0, 10.0, 10.0, None));
        let snapshot = SnapshotBuilder::default().build(page).unwrap();
        assert!(snapshot.is_empty());
    }

    #[test]
    fn render_failure_builds_an_empty_snapshot() {
        let snapshot = SnapshotBuilder::default().build(RawPage::empty()).unwrap();
        assert!(snapshot.is_empty());
    }

    #[test]
    fn non_empty_page_with_bad_dimensions_is_an_error() {
        let mut page = RawPage::new(0.0, 0.0);
        page.push_element(ElementCategory::Image, raw(0.0, 0.0, 10.0, 10.0, None));
        assert!(matches!(
            SnapshotBuilder::default().build(page),
            Err(LayoutError::InvalidPageDimensions { .. })
        ));
    }

    #[test]
    fn page_scored_against_itself_is_perfect() {
        let engine = LayoutSimilarity::default();
        let results = engine
            .score_pages(vec![sample_page()], sample_page())
            .unwrap();
        assert_eq!(results.len(), 1);
        assert!(
            (results[0].score - 1.0).abs() < 1e-6,
            "score: {}",
            results[0].score
        );
    }

    #[test]
    fn failed_render_scores_zero_against_a_populated_reference() {
        let engine = LayoutSimilarity::default();
        let results = engine
            .score_pages(vec![RawPage::empty()], sample_page())
            .unwrap();
        assert_eq!(results[0].score, 0.0);
        assert!(!results[0].breakdown.is_empty());
    }

    #[test]
    fn batch_results_preserve_candidate_order() {
        let engine = LayoutSimilarity::default();

        // Shift the image further away in each successive candidate.
        let candidate = |offset: f64| {
            let mut page = RawPage::new(1000.0, 1000.0);
            page.push_element(
                ElementCategory::Image,
                raw(500.0 + offset, 0.0, 500.0 - offset, 500.0, None),
            );
            page
        };
        let reference = {
            let mut page = RawPage::new(1000.0, 1000.0);
            page.push_element(ElementCategory::Image, raw(500.0, 0.0, 500.0, 500.0, None));
            page
        };

        let results = engine
            .score_pages(
                vec![candidate(0.0), candidate(100.0), candidate(300.0)],
                reference,
            )
            .unwrap();
        assert_eq!(results.len(), 3);
        assert!(results[0].score > results[1].score);
        assert!(results[1].score > results[2].score);
        assert!((results[0].score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn strategy_selection_is_honored() {
        // Self-overlapping candidate: the pairwise baseline over-counts,
        // the polygon-union strategy does not.
        let mut candidate = RawPage::new(100.0, 100.0);
        candidate.push_element(ElementCategory::Image, raw(0.0, 0.0, 20.0, 20.0, None));
        candidate.push_element(ElementCategory::Image, raw(0.0, 0.0, 20.0, 20.0, None));
        let mut reference = RawPage::new(100.0, 100.0);
        reference.push_element(ElementCategory::Image, raw(0.0, 0.0, 20.0, 20.0, None));

        let pairwise = LayoutSimilarity::builder()
            .with_strategy(ScoringStrategy::Pairwise)
            .build()
            .unwrap();
        let polygon = LayoutSimilarity::builder()
            .with_strategy(ScoringStrategy::PolygonUnion)
            .build()
            .unwrap();

        let pairwise_score = pairwise
            .score_pages(vec![candidate.clone()], reference.clone())
            .unwrap()[0]
            .score;
        let polygon_score = polygon.score_pages(vec![candidate], reference).unwrap()[0].score;
        assert!(pairwise_score > 1.0);
        assert!((polygon_score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn invalid_tolerances_fail_the_builder() {
        let result = LayoutSimilarity::builder().with_align_tolerance(-3.0).build();
        assert!(matches!(result, Err(LayoutError::InvalidConfig { .. })));
    }
}
