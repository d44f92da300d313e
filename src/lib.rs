//! plantfill - Boundary extraction and greedy circle packing
//!
//! Turns a closed boundary (polyline, circle, or a region built from lines,
//! arcs and curves) into a sampled polygon, then fills that polygon with
//! non-overlapping circles of caller-chosen radii. Typical use is laying
//! out plants inside a bed outline.
//!
//! # Example
//!
//! ```
//! use plantfill::{extract, pack, BoundarySource, Point2, Tolerance};
//!
//! let source = BoundarySource::Polyline {
//!     vertices: vec![
//!         Point2::new(0.0, 0.0),
//!         Point2::new(10.0, 0.0),
//!         Point2::new(10.0, 10.0),
//!         Point2::new(0.0, 10.0),
//!     ],
//!     closed: true,
//! };
//!
//! let tol = Tolerance::default();
//! let polygon = extract(&source, &tol).unwrap();
//! let layout = pack(&polygon, &[3.0, 2.0, 1.0], tol, None);
//!
//! assert!(!layout.is_empty());
//! assert!(!layout.overlaps(&tol));
//! ```

pub mod boundary;
pub mod curves;
pub mod error;
pub mod packing;
pub mod polygon;
pub mod primitives;
pub mod tolerance;

pub use boundary::{
    extract, extract_with_report, BoundaryLoop, BoundarySegment, BoundarySource, Extraction,
    LoopKind, SamplingConfig,
};
pub use curves::{CurveEvaluator, FnEvaluator};
pub use error::{EvaluationError, ExtractionError};
pub use packing::{pack, PackConfig, PackOutcome, PackedLayout, Packer, PlantCircle};
pub use polygon::{
    polygon_centroid, polygon_contains, polygon_signed_area, polygon_signed_distance, Polygon,
};
pub use primitives::{Point2, Point3, Vec2};
pub use tolerance::Tolerance;
