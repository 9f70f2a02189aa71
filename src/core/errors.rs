//! Core error types for the layout comparison pipeline.
//!
//! This module defines the error taxonomy used across the crate. Degenerate
//! geometry (empty element lists, zero-area unions) is deliberately *not*
//! represented here: those cases are resolved by explicit zero-score rules
//! in the scoring layer and never raise.

use thiserror::Error;

/// Errors that can occur while ingesting collector output or building
/// layout snapshots.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The collector payload could not be deserialized.
    #[error("invalid collector payload: {0}")]
    CollectorPayload(#[from] serde_json::Error),

    /// The page dimensions reported by the collector cannot be used for
    /// coordinate normalization.
    #[error("invalid page dimensions {width}x{height}: {context}")]
    InvalidPageDimensions {
        /// Total page width reported by the collector.
        width: f64,
        /// Total page height reported by the collector.
        height: f64,
        /// Additional context about why the dimensions were rejected.
        context: String,
    },

    /// A configuration value failed validation.
    #[error("invalid configuration: {context}")]
    InvalidConfig {
        /// Description of the rejected value.
        context: String,
    },
}
