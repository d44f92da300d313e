//! Circle packing inside a boundary polygon.
//!
//! [`Packer`] places circles greedily: the seed goes at the polygon
//! centroid, then circles grow outward on rings around those already
//! placed until nothing else fits or the iteration cap is reached.
//! Packing never fails; an empty [`PackedLayout`] means nothing fit.

mod config;
mod layout;
mod packer;

pub use config::PackConfig;
pub use layout::{PackedLayout, PlantCircle};
pub use packer::{pack, PackOutcome, Packer};
