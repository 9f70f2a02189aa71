//! Visual layout similarity scoring for rendered web pages.
//!
//! This crate grades how visually similar a rendered HTML page is to a
//! reference rendering by comparing the sets and positions of visible UI
//! elements (text blocks, images, buttons, forms, navigation bars,
//! dividers) extracted from each page's live layout. It is built to
//! automatically score machine-generated HTML against a ground-truth
//! page.
//!
//! The pipeline:
//!
//! 1. An external collector (headless-browser automation, out of scope
//!    here — see [`collector::LayoutCollector`]) renders each page and
//!    reports per-category element boxes in page pixels.
//! 2. [`pipeline::SnapshotBuilder`] merges fragmented text nodes into
//!    logical blocks and normalizes all coordinates to `[0,1]`
//!    page-relative units, producing a [`domain::LayoutSnapshot`].
//! 3. [`pipeline::LayoutSimilarity`] scores candidate snapshots against
//!    the reference: per category an IoU is computed over the polygon
//!    union of the element boxes, and categories are combined weighted
//!    by their share of the total visual footprint.
//!
//! # Example
//!
//! ```
//! use layout_sim::{BoundingBox, ElementCategory, LayoutSimilarity, RawElement, RawPage};
//!
//! let mut reference = RawPage::new(1280.0, 960.0);
//! reference.push_element(
//!     ElementCategory::Image,
//!     RawElement {
//!         bounding_box: BoundingBox::new(0.0, 0.0, 640.0, 480.0),
//!         text: None,
//!     },
//! );
//!
//! let engine = LayoutSimilarity::default();
//! let results = engine
//!     .score_pages(vec![reference.clone()], reference)
//!     .unwrap();
//! assert!((results[0].score - 1.0).abs() < 1e-6);
//! ```

pub mod collector;
pub mod core;
pub mod domain;
pub mod pipeline;
pub mod processors;
pub mod scoring;
pub mod utils;

pub use crate::core::config::ConsolidationConfig;
pub use crate::core::errors::LayoutError;
pub use collector::{LayoutCollector, RawElement, RawPage};
pub use domain::{ElementCategory, LayoutSnapshot, VisualElement};
pub use pipeline::{LayoutSimilarity, LayoutSimilarityBuilder, SnapshotBuilder};
pub use processors::geometry::BoundingBox;
pub use processors::TextBlockConsolidator;
pub use scoring::{
    CategoryScore, ComparisonResult, IouScorer, PairwiseIou, PolygonUnionIou, ScoreBreakdown,
    ScoringStrategy,
};
