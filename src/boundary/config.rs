//! Sample counts used when flattening boundary curves.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How finely each curved boundary kind is discretized.
///
/// The defaults are the counts the packing pipeline is tuned for; hosts
/// rarely need to change them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SamplingConfig {
    /// Samples around a full circle source (minimum 3).
    pub circle_samples: usize,
    /// Sub-segments per circular arc segment (minimum 1).
    pub arc_segments: usize,
    /// Steps per elliptical or parametric segment (minimum 1).
    pub curve_steps: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            circle_samples: 64,
            arc_segments: 16,
            curve_steps: 48,
        }
    }
}

impl SamplingConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of samples around a circle source.
    pub fn with_circle_samples(mut self, n: usize) -> Self {
        self.circle_samples = n.max(3);
        self
    }

    /// Sets the number of sub-segments per arc.
    pub fn with_arc_segments(mut self, n: usize) -> Self {
        self.arc_segments = n.max(1);
        self
    }

    /// Sets the number of steps per elliptical or parametric curve.
    pub fn with_curve_steps(mut self, n: usize) -> Self {
        self.curve_steps = n.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = SamplingConfig::default();
        assert_eq!(cfg.circle_samples, 64);
        assert_eq!(cfg.arc_segments, 16);
        assert_eq!(cfg.curve_steps, 48);
    }

    #[test]
    fn test_builders_clamp() {
        let cfg = SamplingConfig::new()
            .with_circle_samples(1)
            .with_arc_segments(0)
            .with_curve_steps(0);
        assert_eq!(cfg.circle_samples, 3);
        assert_eq!(cfg.arc_segments, 1);
        assert_eq!(cfg.curve_steps, 1);
    }
}
