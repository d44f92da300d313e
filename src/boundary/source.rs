//! Boundary source model.
//!
//! A closed set of shapes a host can describe. Each host entity kind maps
//! to exactly one variant; the extractor matches exhaustively.

use crate::curves::{Arc2, CurveEvaluator};
use crate::primitives::{Point2, Point3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The shape a boundary polygon is extracted from.
#[derive(Debug)]
pub enum BoundarySource<F> {
    /// Lightweight polyline with planar vertices.
    Polyline {
        vertices: Vec<Point2<F>>,
        closed: bool,
    },
    /// 3D polyline; elevations are dropped.
    SpatialPolyline3D {
        vertices: Vec<Point3<F>>,
        closed: bool,
    },
    /// Old-style 2D polyline.
    LegacyPolyline2D {
        vertices: Vec<Point2<F>>,
        closed: bool,
    },
    /// Full circle.
    Circle { center: Point2<F>, radius: F },
    /// Multi-loop region such as a hatch boundary.
    CompositeRegion { loops: Vec<BoundaryLoop<F>> },
    /// Anything else the host selected. Always rejected.
    Unsupported { kind: String },
}

impl<F> BoundarySource<F> {
    /// Returns a short name for the variant, used in error messages and logs.
    pub fn kind(&self) -> &str {
        match self {
            BoundarySource::Polyline { .. } => "Polyline",
            BoundarySource::SpatialPolyline3D { .. } => "SpatialPolyline3D",
            BoundarySource::LegacyPolyline2D { .. } => "LegacyPolyline2D",
            BoundarySource::Circle { .. } => "Circle",
            BoundarySource::CompositeRegion { .. } => "CompositeRegion",
            BoundarySource::Unsupported { kind } => kind.as_str(),
        }
    }
}

/// Role of a loop within a composite region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LoopKind {
    /// Outermost boundary; preferred.
    External,
    /// Untagged loop; used when no external loop is usable.
    Default,
    /// Islands, text boxes and the like; never used as a boundary.
    Other,
}

/// One loop of a composite region: an ordered run of curve segments.
#[derive(Debug)]
pub struct BoundaryLoop<F> {
    pub kind: LoopKind,
    pub segments: Vec<BoundarySegment<F>>,
}

impl<F> BoundaryLoop<F> {
    /// Creates a loop.
    pub fn new(kind: LoopKind, segments: Vec<BoundarySegment<F>>) -> Self {
        Self { kind, segments }
    }

    /// Returns `true` if the loop may be used as a boundary.
    pub fn is_eligible(&self) -> bool {
        matches!(self.kind, LoopKind::External | LoopKind::Default)
    }
}

/// A single curve segment of a loop.
#[derive(Debug)]
pub enum BoundarySegment<F> {
    /// Straight segment.
    Line { start: Point2<F>, end: Point2<F> },
    /// Circular arc, counter-clockwise from its start angle.
    Arc(Arc2<F>),
    /// Elliptical arc sampled by eccentric angle through the evaluator.
    EllipticalArc {
        curve: Box<dyn CurveEvaluator<F>>,
        start_angle: F,
        end_angle: F,
    },
    /// Free-form curve sampled by parameter through the evaluator.
    ParametricCurve {
        curve: Box<dyn CurveEvaluator<F>>,
        start_param: F,
        end_param: F,
    },
    /// A curve kind the host could not describe; only its endpoint is known.
    Unsupported { end: Point2<F> },
}

impl<F> BoundarySegment<F> {
    /// Shorthand for a line segment.
    pub fn line(start: Point2<F>, end: Point2<F>) -> Self {
        BoundarySegment::Line { start, end }
    }
}
