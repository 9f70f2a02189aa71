//! Text block consolidation.
//!
//! The collector reports every text-bearing DOM element separately, so one
//! visual paragraph often arrives as several fragments (a heading split
//! across spans, a sentence with an inline link). This module merges
//! nearby and overlapping fragments into single logical blocks using the
//! spatial adjacency and containment predicates from
//! [`crate::processors::geometry`], and prunes fragments that are fully
//! covered by another block.

use crate::core::config::ConsolidationConfig;
use crate::domain::element::VisualElement;

/// Merges fragmented text elements into logical blocks.
///
/// The consolidator owns its working buffer: callers hand over the raw
/// text element list and receive a new merged list. Input order is
/// irrelevant (the buffer is re-sorted), but the sort makes the merge
/// tie-breaking deterministic, which decides which text ends up attached
/// to which box.
#[derive(Debug, Clone, Default)]
pub struct TextBlockConsolidator {
    config: ConsolidationConfig,
}

impl TextBlockConsolidator {
    /// Creates a consolidator with the given tolerances.
    pub fn new(config: ConsolidationConfig) -> Self {
        Self { config }
    }

    /// Consolidates a list of text elements into merged logical blocks.
    ///
    /// The algorithm works top-to-bottom, left-to-right:
    ///
    /// 1. Sort the buffer by `(y, x)` ascending.
    /// 2. Take the first remaining element as `current` and scan the rest
    ///    in order: a candidate fully inside `current` is deleted; if
    ///    `current` is fully inside a candidate, `current` is subsumed and
    ///    dropped; an adjacent candidate is absorbed (text concatenated in
    ///    reading order, box replaced by the union) and the scan restarts
    ///    from the beginning, since the grown box may now reach elements
    ///    that were skipped earlier.
    /// 3. Append `current` to the output unless it was subsumed; repeat.
    ///
    /// Worst case is O(n^2) to O(n^3) because of the restart after every
    /// merge; element counts per page are tens to low hundreds, so this
    /// has not been worth optimizing.
    pub fn consolidate(&self, blocks: Vec<VisualElement>) -> Vec<VisualElement> {
        let input_len = blocks.len();

        let mut work = blocks;
        work.sort_by(|a, b| {
            a.bounding_box
                .y
                .total_cmp(&b.bounding_box.y)
                .then(a.bounding_box.x.total_cmp(&b.bounding_box.x))
        });

        let mut merged: Vec<VisualElement> = Vec::with_capacity(work.len());
        while !work.is_empty() {
            let mut current = work.remove(0);
            let mut subsumed = false;
            let mut scan = 0;
            while scan < work.len() {
                let candidate_box = work[scan].bounding_box;
                if candidate_box.is_fully_inside(&current.bounding_box) {
                    // Already covered by the block under construction.
                    work.remove(scan);
                    continue;
                }
                if current.bounding_box.is_fully_inside(&candidate_box) {
                    subsumed = true;
                    break;
                }
                if current.bounding_box.is_adjacent(
                    &candidate_box,
                    self.config.align_tolerance,
                    self.config.adj_tolerance,
                ) {
                    let candidate = work.remove(scan);
                    absorb(&mut current, candidate);
                    // The grown box may reach candidates skipped earlier.
                    scan = 0;
                    continue;
                }
                scan += 1;
            }
            if !subsumed {
                merged.push(current);
            }
        }

        tracing::debug!(
            "Consolidated {} text fragments into {} blocks",
            input_len,
            merged.len()
        );
        merged
    }
}

/// Absorbs `candidate` into `current`: text concatenated in reading order,
/// box replaced by the union of both boxes.
fn absorb(current: &mut VisualElement, candidate: VisualElement) {
    let current_reads_first = current.bounding_box.x < candidate.bounding_box.x
        || current.bounding_box.y < candidate.bounding_box.y;
    current.text = if current_reads_first {
        join_text(current.text.take(), candidate.text)
    } else {
        join_text(candidate.text, current.text.take())
    };
    current.bounding_box = current.bounding_box.union(&candidate.bounding_box);
}

fn join_text(first: Option<String>, second: Option<String>) -> Option<String> {
    match (first, second) {
        (Some(first), Some(second)) => Some(format!("{first} {second}")),
        (Some(first), None) => Some(first),
        (None, second) => second,
    }
}
