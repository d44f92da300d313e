//! Error types for boundary extraction.
//!
//! Packing has no error type: an empty or short layout is its defined
//! outcome when nothing (more) fits.

use thiserror::Error;

/// Result type alias for extraction operations.
pub type Result<T, E = ExtractionError> = std::result::Result<T, E>;

/// Errors that can occur while turning a boundary source into a polygon.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtractionError {
    /// A polyline source is open.
    #[error("boundary is not closed")]
    NotClosed,

    /// The source shape cannot be turned into a boundary.
    #[error("unsupported boundary shape: {kind}")]
    UnsupportedShape {
        /// Host-side name of the shape.
        kind: String,
    },

    /// No eligible loop of a composite region produced at least 3 distinct points.
    #[error("no usable boundary loop ({loops_tried} eligible loops tried)")]
    NoUsableLoop {
        /// Number of `External`/`Default` loops that were attempted.
        loops_tried: usize,
    },

    /// A curve evaluator failed while sampling a segment, and no later
    /// eligible loop succeeded.
    #[error("curve evaluation failed in loop {loop_index}, segment {segment_index}: {source}")]
    CurveEvaluationFailed {
        /// Index of the loop within the region.
        loop_index: usize,
        /// Index of the segment within the loop.
        segment_index: usize,
        /// What the evaluator reported.
        source: EvaluationError,
    },
}

/// Errors reported by a [`CurveEvaluator`](crate::curves::CurveEvaluator).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    /// The parameter lies outside the curve's domain.
    #[error("parameter {param} outside curve domain")]
    OutOfDomain {
        /// The rejected parameter.
        param: f64,
    },

    /// The evaluator produced a NaN or infinite coordinate.
    #[error("non-finite point at parameter {param}")]
    NonFinite {
        /// The parameter that was evaluated.
        param: f64,
    },

    /// The host curve object failed for its own reasons.
    #[error("host evaluator failed: {0}")]
    Host(String),
}
