//! Curve evaluation and discretization.
//!
//! Boundary segments are flattened with fixed sample counts rather than
//! chord-error tolerances, so the output point count is predictable.

mod arc;
mod bezier;
mod eval;

pub use arc::Arc2;
pub use bezier::CubicBezier2;
pub use eval::{normalize_sweep, sample_span, CurveEvaluator, FnEvaluator};
