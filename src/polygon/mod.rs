//! Polygon geometry: containment, boundary distance, and centroid.
//!
//! All functions are pure and take the tolerance explicitly. Degenerate
//! loops never fail; they return sentinels (`false` containment, `+inf`
//! distance) that callers must check for before trusting clearances.
//!
//! # Example
//!
//! ```
//! use plantfill::polygon::Polygon;
//! use plantfill::tolerance::Tolerance;
//! use plantfill::Point2;
//!
//! let square = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(0.0, 4.0),
//! ]);
//! let tol = Tolerance::default();
//!
//! assert!(square.contains(Point2::new(1.0, 1.0), &tol));
//! assert_eq!(square.signed_distance(Point2::new(1.0, 2.0), &tol), -1.0);
//! ```

mod core;

pub use self::core::{
    polygon_centroid, polygon_contains, polygon_signed_area, polygon_signed_distance, Polygon,
};
