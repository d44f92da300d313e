//! Boundary extraction: turns a host shape description into a closed polygon.
//!
//! Polylines are taken as-is, circles are sampled at a fixed count, and
//! composite regions are walked segment by segment from their first usable
//! outer loop. Every successful extraction is explicitly closed: the last
//! vertex equals the first within tolerance.

mod config;
mod extract;
mod source;

pub use config::SamplingConfig;
pub use extract::{extract, extract_with_report, DegradedSegment, Extraction};
pub use source::{BoundaryLoop, BoundarySegment, BoundarySource, LoopKind};
