//! Epsilon-aware comparisons.
//!
//! Every approximate decision in the crate goes through a [`Tolerance`].
//! No hidden epsilons are used for point equality, boundary slack, or
//! overlap slack.

mod predicates;
mod settings;
mod weld;

pub use predicates::point_on_segment;
pub use settings::Tolerance;
pub use weld::{distinct_count, has_three_distinct, push_distinct, weld_vertices_keep_first};
