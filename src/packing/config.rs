//! Packing configuration.

use crate::tolerance::Tolerance;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for [`Packer`](super::Packer).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackConfig<F> {
    /// Upper bound on growth iterations. Each iteration places at most one circle.
    pub max_iterations: usize,

    /// Candidate centers sampled around each placed circle (minimum 1).
    pub ring_samples: usize,

    /// Tolerance for containment slack and overlap slack.
    pub tolerance: Tolerance<F>,
}

impl<F: Float> Default for PackConfig<F> {
    fn default() -> Self {
        Self {
            max_iterations: 5000,
            ring_samples: 12,
            tolerance: Tolerance::default(),
        }
    }
}

impl<F: Float> PackConfig<F> {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the growth iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the number of candidate centers per ring.
    pub fn with_ring_samples(mut self, ring_samples: usize) -> Self {
        self.ring_samples = ring_samples.max(1);
        self
    }

    /// Sets the tolerance.
    pub fn with_tolerance(mut self, tolerance: Tolerance<F>) -> Self {
        self.tolerance = tolerance;
        self
    }
}
