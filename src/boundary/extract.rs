//! Polygon extraction from boundary sources.

use super::config::SamplingConfig;
use super::source::{BoundaryLoop, BoundarySegment, BoundarySource, LoopKind};
use crate::curves::{normalize_sweep, sample_span};
use crate::error::{ExtractionError, Result};
use crate::polygon::Polygon;
use crate::primitives::{Circle2, Point2};
use crate::tolerance::{distinct_count, push_distinct, Tolerance};
use num_traits::Float;

/// A segment that contributed only its endpoint because its curve kind
/// could not be sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegradedSegment {
    /// Index of the loop within the region.
    pub loop_index: usize,
    /// Index of the segment within the loop.
    pub segment_index: usize,
}

/// Successful extraction together with diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction<F> {
    /// The closed boundary.
    pub polygon: Polygon<F>,
    /// Index of the region loop that was used, for composite sources.
    pub loop_index: Option<usize>,
    /// Segments of the chosen loop that were approximated by their endpoint.
    pub degraded: Vec<DegradedSegment>,
}

impl<F> Extraction<F> {
    fn simple(polygon: Polygon<F>) -> Self {
        Self {
            polygon,
            loop_index: None,
            degraded: Vec::new(),
        }
    }

    /// Returns `true` if any segment was approximated.
    pub fn is_degraded(&self) -> bool {
        !self.degraded.is_empty()
    }
}

/// Extracts a closed polygon from `source` with the default sample counts.
///
/// # Example
///
/// ```
/// use plantfill::boundary::{extract, BoundarySource};
/// use plantfill::tolerance::Tolerance;
/// use plantfill::Point2;
///
/// let source = BoundarySource::Circle { center: Point2::new(0.0, 0.0), radius: 5.0 };
/// let polygon = extract(&source, &Tolerance::default()).unwrap();
/// assert_eq!(polygon.len(), 65);
/// ```
pub fn extract<F: Float>(source: &BoundarySource<F>, tol: &Tolerance<F>) -> Result<Polygon<F>> {
    extract_with_report(source, tol, &SamplingConfig::default()).map(|e| e.polygon)
}

/// Extracts a closed polygon from `source`, reporting which loop was used
/// and which segments were degraded.
pub fn extract_with_report<F: Float>(
    source: &BoundarySource<F>,
    tol: &Tolerance<F>,
    sampling: &SamplingConfig,
) -> Result<Extraction<F>> {
    log::debug!("extracting boundary from {}", source.kind());
    match source {
        BoundarySource::Polyline { vertices, closed }
        | BoundarySource::LegacyPolyline2D { vertices, closed } => {
            closed_polyline(vertices.iter().copied(), *closed, tol).map(Extraction::simple)
        }
        BoundarySource::SpatialPolyline3D { vertices, closed } => {
            closed_polyline(vertices.iter().map(|v| v.to_xy()), *closed, tol)
                .map(Extraction::simple)
        }
        BoundarySource::Circle { center, radius } => {
            let mut points = Circle2::new(*center, *radius).to_polygon(sampling.circle_samples);
            close_ring(&mut points, tol);
            Ok(Extraction::simple(Polygon::new(points)))
        }
        BoundarySource::CompositeRegion { loops } => composite_region(loops, tol, sampling),
        BoundarySource::Unsupported { .. } => Err(ExtractionError::UnsupportedShape {
            kind: source.kind().to_string(),
        }),
    }
}

fn closed_polyline<F: Float>(
    vertices: impl Iterator<Item = Point2<F>>,
    closed: bool,
    tol: &Tolerance<F>,
) -> Result<Polygon<F>> {
    if !closed {
        return Err(ExtractionError::NotClosed);
    }
    let mut points: Vec<Point2<F>> = vertices.collect();
    close_ring(&mut points, tol);
    Ok(Polygon::new(points))
}

/// Appends the first point if the ring does not already end on it.
fn close_ring<F: Float>(points: &mut Vec<Point2<F>>, tol: &Tolerance<F>) {
    if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
        if !tol.points_equal(first, last) {
            points.push(first);
        }
    }
}

fn composite_region<F: Float>(
    loops: &[BoundaryLoop<F>],
    tol: &Tolerance<F>,
    sampling: &SamplingConfig,
) -> Result<Extraction<F>> {
    // External loops first, then the remaining eligible loops, each in
    // region order.
    let candidates = loops
        .iter()
        .enumerate()
        .filter(|(_, l)| l.kind == LoopKind::External)
        .chain(
            loops
                .iter()
                .enumerate()
                .filter(|(_, l)| l.is_eligible() && l.kind != LoopKind::External),
        );

    let mut tried = 0;
    let mut last_error = None;

    for (loop_index, boundary_loop) in candidates {
        tried += 1;
        match sample_loop(loop_index, boundary_loop, tol, sampling) {
            Ok((points, degraded)) if distinct_count(&points, tol) >= 3 => {
                log::debug!(
                    "using {:?} loop {} ({} points, {} degraded segments)",
                    boundary_loop.kind,
                    loop_index,
                    points.len(),
                    degraded.len()
                );
                return Ok(Extraction {
                    polygon: Polygon::new(points),
                    loop_index: Some(loop_index),
                    degraded,
                });
            }
            Ok((points, _)) => {
                log::warn!(
                    "skipping loop {}: only {} distinct points",
                    loop_index,
                    distinct_count(&points, tol)
                );
                last_error = None;
            }
            Err(err) => {
                log::warn!("skipping loop {}: {}", loop_index, err);
                last_error = Some(err);
            }
        }
    }

    Err(last_error.unwrap_or(ExtractionError::NoUsableLoop { loops_tried: tried }))
}

type SampledLoop<F> = (Vec<Point2<F>>, Vec<DegradedSegment>);

fn sample_loop<F: Float>(
    loop_index: usize,
    boundary_loop: &BoundaryLoop<F>,
    tol: &Tolerance<F>,
    sampling: &SamplingConfig,
) -> Result<SampledLoop<F>> {
    let mut points = Vec::new();
    let mut degraded = Vec::new();

    for (segment_index, segment) in boundary_loop.segments.iter().enumerate() {
        let eval_failed = |source| ExtractionError::CurveEvaluationFailed {
            loop_index,
            segment_index,
            source,
        };

        match segment {
            BoundarySegment::Line { start, end } => {
                push_distinct(&mut points, *start, tol);
                push_distinct(&mut points, *end, tol);
            }
            BoundarySegment::Arc(arc) => {
                for p in arc.sample(sampling.arc_segments) {
                    push_distinct(&mut points, p, tol);
                }
            }
            BoundarySegment::EllipticalArc {
                curve,
                start_angle,
                end_angle,
            } => {
                let end = normalize_sweep(*start_angle, *end_angle);
                let samples = sample_span(&**curve, *start_angle, end, sampling.curve_steps)
                    .map_err(eval_failed)?;
                for p in samples {
                    push_distinct(&mut points, p, tol);
                }
            }
            BoundarySegment::ParametricCurve {
                curve,
                start_param,
                end_param,
            } => {
                let samples =
                    sample_span(&**curve, *start_param, *end_param, sampling.curve_steps)
                        .map_err(eval_failed)?;
                for p in samples {
                    push_distinct(&mut points, p, tol);
                }
            }
            BoundarySegment::Unsupported { end } => {
                log::warn!(
                    "loop {} segment {}: unsupported curve, keeping endpoint only",
                    loop_index,
                    segment_index
                );
                push_distinct(&mut points, *end, tol);
                degraded.push(DegradedSegment {
                    loop_index,
                    segment_index,
                });
            }
        }
    }

    close_ring(&mut points, tol);
    Ok((points, degraded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::{Arc2, CubicBezier2, FnEvaluator};
    use crate::error::EvaluationError;
    use crate::primitives::{Ellipse2, Point3};
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn tol() -> Tolerance<f64> {
        Tolerance::default()
    }

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    fn unit_square_lines() -> Vec<BoundarySegment<f64>> {
        vec![
            BoundarySegment::line(p(0.0, 0.0), p(1.0, 0.0)),
            BoundarySegment::line(p(1.0, 0.0), p(1.0, 1.0)),
            BoundarySegment::line(p(1.0, 1.0), p(0.0, 1.0)),
            BoundarySegment::line(p(0.0, 1.0), p(0.0, 0.0)),
        ]
    }

    #[test]
    fn test_polyline_open_fails() {
        let src = BoundarySource::Polyline {
            vertices: vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)],
            closed: false,
        };
        assert_eq!(extract(&src, &tol()), Err(ExtractionError::NotClosed));
    }

    #[test]
    fn test_polyline_closed_appends_closing_vertex() {
        let src = BoundarySource::Polyline {
            vertices: vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0)],
            closed: true,
        };
        let poly = extract(&src, &tol()).unwrap();
        assert_eq!(
            poly.vertices,
            vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 0.0)]
        );
    }

    #[test]
    fn test_polyline_already_closed_is_untouched() {
        let vertices = vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 1e-12)];
        let src = BoundarySource::LegacyPolyline2D {
            vertices: vertices.clone(),
            closed: true,
        };
        assert_eq!(extract(&src, &tol()).unwrap().vertices, vertices);
    }

    #[test]
    fn test_spatial_polyline_drops_z() {
        let src = BoundarySource::SpatialPolyline3D {
            vertices: vec![
                Point3::new(0.0, 0.0, 5.0),
                Point3::new(3.0, 0.0, 6.0),
                Point3::new(3.0, 3.0, 7.0),
            ],
            closed: true,
        };
        let poly = extract(&src, &tol()).unwrap();
        assert_eq!(poly.len(), 4);
        assert_eq!(poly.vertices[1], p(3.0, 0.0));
        assert_eq!(poly.vertices[3], p(0.0, 0.0));
    }

    #[test]
    fn test_spatial_polyline_open_fails() {
        let src = BoundarySource::SpatialPolyline3D {
            vertices: vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)],
            closed: false,
        };
        assert_eq!(extract(&src, &tol()), Err(ExtractionError::NotClosed));
    }

    #[test]
    fn test_circle_has_65_points() {
        let src = BoundarySource::Circle {
            center: p(0.0, 0.0),
            radius: 5.0,
        };
        let poly = extract(&src, &tol()).unwrap();
        assert_eq!(poly.len(), 65);
        assert_eq!(poly.vertices[0], poly.vertices[64]);
        assert_relative_eq!(poly.vertices[0].x, 5.0);
        for v in &poly.vertices {
            assert_relative_eq!(v.distance(p(0.0, 0.0)), 5.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_circle_respects_sampling_config() {
        let src = BoundarySource::Circle {
            center: p(1.0, 1.0),
            radius: 2.0,
        };
        let cfg = SamplingConfig::new().with_circle_samples(8);
        let out = extract_with_report(&src, &tol(), &cfg).unwrap();
        assert_eq!(out.polygon.len(), 9);
        assert!(out.loop_index.is_none());
    }

    #[test]
    fn test_unsupported_shape() {
        let src: BoundarySource<f64> = BoundarySource::Unsupported {
            kind: "Text".into(),
        };
        assert_eq!(
            extract(&src, &tol()),
            Err(ExtractionError::UnsupportedShape {
                kind: "Text".into()
            })
        );
    }

    #[test]
    fn test_region_ignores_ineligible_loops() {
        let src = BoundarySource::CompositeRegion {
            loops: vec![
                BoundaryLoop::new(LoopKind::Other, unit_square_lines()),
                BoundaryLoop::new(LoopKind::Other, unit_square_lines()),
            ],
        };
        let BoundarySource::CompositeRegion { loops } = &src else {
            unreachable!()
        };
        assert!(loops.iter().all(|l| !l.is_eligible()));
        assert_eq!(src.kind(), "CompositeRegion");
        assert_eq!(
            extract(&src, &tol()),
            Err(ExtractionError::NoUsableLoop { loops_tried: 0 })
        );
    }

    #[test]
    fn test_region_unit_square() {
        let src = BoundarySource::CompositeRegion {
            loops: vec![BoundaryLoop::new(LoopKind::External, unit_square_lines())],
        };
        let poly = extract(&src, &tol()).unwrap();
        assert_eq!(
            poly.vertices,
            vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0), p(0.0, 0.0)]
        );
    }

    #[test]
    fn test_region_prefers_external_over_default() {
        let default_loop = vec![
            BoundarySegment::line(p(10.0, 10.0), p(20.0, 10.0)),
            BoundarySegment::line(p(20.0, 10.0), p(20.0, 20.0)),
            BoundarySegment::line(p(20.0, 20.0), p(10.0, 10.0)),
        ];
        let src = BoundarySource::CompositeRegion {
            loops: vec![
                BoundaryLoop::new(LoopKind::Default, default_loop),
                BoundaryLoop::new(LoopKind::Other, unit_square_lines()),
                BoundaryLoop::new(LoopKind::External, unit_square_lines()),
            ],
        };
        let out = extract_with_report(&src, &tol(), &SamplingConfig::default()).unwrap();
        assert_eq!(out.loop_index, Some(2));
        assert_eq!(out.polygon.len(), 5);
    }

    #[test]
    fn test_region_falls_back_to_default() {
        let src = BoundarySource::CompositeRegion {
            loops: vec![
                BoundaryLoop::new(LoopKind::Other, unit_square_lines()),
                BoundaryLoop::new(LoopKind::Default, unit_square_lines()),
            ],
        };
        let out = extract_with_report(&src, &tol(), &SamplingConfig::default()).unwrap();
        assert_eq!(out.loop_index, Some(1));
    }

    #[test]
    fn test_region_skips_degenerate_loop() {
        let sliver = vec![
            BoundarySegment::line(p(0.0, 0.0), p(1.0, 0.0)),
            BoundarySegment::line(p(1.0, 0.0), p(0.0, 0.0)),
        ];
        let src = BoundarySource::CompositeRegion {
            loops: vec![
                BoundaryLoop::new(LoopKind::External, sliver),
                BoundaryLoop::new(LoopKind::Default, unit_square_lines()),
            ],
        };
        let out = extract_with_report(&src, &tol(), &SamplingConfig::default()).unwrap();
        assert_eq!(out.loop_index, Some(1));
    }

    #[test]
    fn test_region_no_usable_loop() {
        let src = BoundarySource::CompositeRegion {
            loops: vec![
                BoundaryLoop::new(LoopKind::Other, unit_square_lines()),
                BoundaryLoop::new(
                    LoopKind::External,
                    vec![BoundarySegment::line(p(0.0, 0.0), p(1.0, 0.0))],
                ),
            ],
        };
        assert_eq!(
            extract(&src, &tol()),
            Err(ExtractionError::NoUsableLoop { loops_tried: 1 })
        );

        let empty: BoundarySource<f64> = BoundarySource::CompositeRegion { loops: Vec::new() };
        assert_eq!(
            extract(&empty, &tol()),
            Err(ExtractionError::NoUsableLoop { loops_tried: 0 })
        );
    }

    #[test]
    fn test_region_arc_sampling() {
        // Half disc: line along the diameter, arc back over the top.
        let src = BoundarySource::CompositeRegion {
            loops: vec![BoundaryLoop::new(
                LoopKind::External,
                vec![
                    BoundarySegment::line(p(-1.0, 0.0), p(1.0, 0.0)),
                    BoundarySegment::Arc(Arc2::new(p(0.0, 0.0), 1.0, 0.0, PI)),
                ],
            )],
        };
        let poly = extract(&src, &tol()).unwrap();
        // 2 line points + 16 new arc points (start shared) + closing point
        // coincides with the arc end, so no extra vertex.
        assert_eq!(poly.len(), 18);
        assert!(poly.is_closed(&tol()));
        assert_relative_eq!(poly.vertices[9].x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(poly.vertices[9].y, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_region_elliptical_arc_wraps() {
        let ellipse = Ellipse2::axis_aligned(p(0.0, 0.0), 2.0, 1.0);
        let src = BoundarySource::CompositeRegion {
            loops: vec![BoundaryLoop::new(
                LoopKind::External,
                vec![BoundarySegment::EllipticalArc {
                    curve: Box::new(ellipse),
                    start_angle: FRAC_PI_2,
                    end_angle: FRAC_PI_2 - 1e-3,
                }],
            )],
        };
        let poly = extract(&src, &tol()).unwrap();
        // 49 samples spanning almost a full turn, then closure.
        assert_eq!(poly.len(), 50);
        assert!(poly.is_closed(&tol()));
        assert_relative_eq!(poly.vertices[24].x, 0.0, epsilon = 1e-2);
        assert!(poly.vertices[24].y < -0.99);
    }

    #[test]
    fn test_region_parametric_curve() {
        let cap = CubicBezier2::new(p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0), p(0.0, 0.0));
        let src = BoundarySource::CompositeRegion {
            loops: vec![BoundaryLoop::new(
                LoopKind::External,
                vec![
                    BoundarySegment::line(p(0.0, 0.0), p(2.0, 0.0)),
                    BoundarySegment::ParametricCurve {
                        curve: Box::new(cap),
                        start_param: 0.0,
                        end_param: 1.0,
                    },
                ],
            )],
        };
        let poly = extract(&src, &tol()).unwrap();
        // 2 line points + 48 new curve points; the curve ends on the start.
        assert_eq!(poly.len(), 50);
        assert!(poly.is_closed(&tol()));
    }

    #[test]
    fn test_region_evaluator_failure() {
        let failing = FnEvaluator::new(|t: f64| {
            if t > 0.5 {
                Err(EvaluationError::Host("bad knot vector".into()))
            } else {
                Ok(Point2::new(t, t))
            }
        });
        let src = BoundarySource::CompositeRegion {
            loops: vec![BoundaryLoop::new(
                LoopKind::External,
                vec![
                    BoundarySegment::line(p(0.0, 0.0), p(1.0, 0.0)),
                    BoundarySegment::ParametricCurve {
                        curve: Box::new(failing),
                        start_param: 0.0,
                        end_param: 1.0,
                    },
                ],
            )],
        };
        assert_eq!(
            extract(&src, &tol()),
            Err(ExtractionError::CurveEvaluationFailed {
                loop_index: 0,
                segment_index: 1,
                source: EvaluationError::Host("bad knot vector".into()),
            })
        );
    }

    #[test]
    fn test_region_evaluator_failure_tries_next_loop() {
        let failing = FnEvaluator::new(|_t: f64| Err(EvaluationError::Host("gone".into())));
        let src = BoundarySource::CompositeRegion {
            loops: vec![
                BoundaryLoop::new(
                    LoopKind::External,
                    vec![BoundarySegment::EllipticalArc {
                        curve: Box::new(failing),
                        start_angle: 0.0,
                        end_angle: PI,
                    }],
                ),
                BoundaryLoop::new(LoopKind::Default, unit_square_lines()),
            ],
        };
        let out = extract_with_report(&src, &tol(), &SamplingConfig::default()).unwrap();
        assert_eq!(out.loop_index, Some(1));
    }

    #[test]
    fn test_region_unsupported_segment_is_degraded() {
        let src = BoundarySource::CompositeRegion {
            loops: vec![BoundaryLoop::new(
                LoopKind::External,
                vec![
                    BoundarySegment::line(p(0.0, 0.0), p(4.0, 0.0)),
                    BoundarySegment::Unsupported { end: p(4.0, 4.0) },
                    BoundarySegment::line(p(4.0, 4.0), p(0.0, 4.0)),
                ],
            )],
        };
        let out = extract_with_report(&src, &tol(), &SamplingConfig::default()).unwrap();
        assert!(out.is_degraded());
        assert_eq!(
            out.degraded,
            vec![DegradedSegment {
                loop_index: 0,
                segment_index: 1
            }]
        );
        assert_eq!(
            out.polygon.vertices,
            vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0), p(0.0, 0.0)]
        );
    }
}
