//! Greedy ring-growth circle packer.

use super::config::PackConfig;
use super::layout::{PackedLayout, PlantCircle};
use crate::polygon::Polygon;
use crate::primitives::Point2;
use crate::tolerance::Tolerance;
use num_traits::Float;
use std::cmp::Ordering;

/// Result of a packing run with its termination details.
#[derive(Debug, Clone, PartialEq)]
pub struct PackOutcome<F> {
    /// Placed circles in order.
    pub layout: PackedLayout<F>,
    /// Growth iterations consumed, the seed not included.
    pub iterations: usize,
    /// `true` when growth stopped because nothing else fit, `false` when
    /// the iteration cap was reached first.
    pub saturated: bool,
}

/// Places circles of the given radii inside a polygon.
///
/// The packer is greedy: a seed circle is anchored at the polygon
/// centroid, then each growth iteration samples candidate centers on rings
/// around placed circles and keeps the first radius/candidate pair that
/// fits. Placed circles never move.
///
/// # Example
///
/// ```
/// use plantfill::packing::{PackConfig, Packer};
/// use plantfill::polygon::Polygon;
/// use plantfill::primitives::Point2;
///
/// let square = Polygon::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(10.0, 10.0),
///     Point2::new(0.0, 10.0),
///     Point2::new(0.0, 0.0),
/// ]);
///
/// let layout = Packer::new(PackConfig::default()).pack(&square, &[3.0, 1.0]);
/// assert_eq!(layout.seed().map(|c| c.radius), Some(3.0));
/// ```
#[derive(Debug, Clone)]
pub struct Packer<F> {
    config: PackConfig<F>,
}

impl<F: Float> Default for Packer<F> {
    fn default() -> Self {
        Self::new(PackConfig::default())
    }
}

impl<F: Float> Packer<F> {
    /// Creates a packer with the given configuration.
    pub fn new(config: PackConfig<F>) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &PackConfig<F> {
        &self.config
    }

    /// Packs `radii` into `polygon`, returning only the layout.
    pub fn pack(&self, polygon: &Polygon<F>, radii: &[F]) -> PackedLayout<F> {
        self.run(polygon, radii).layout
    }

    /// Packs `radii` into `polygon`.
    ///
    /// Radii are tried in the order given. Non-finite or non-positive radii
    /// are ignored. A degenerate polygon, or one too small for every
    /// radius, yields an empty layout.
    pub fn run(&self, polygon: &Polygon<F>, radii: &[F]) -> PackOutcome<F> {
        let tol = &self.config.tolerance;
        let radii = usable_radii(radii);

        let empty = PackOutcome {
            layout: PackedLayout::new(),
            iterations: 0,
            saturated: true,
        };

        if radii.is_empty() {
            log::debug!("no usable radii, nothing to pack");
            return empty;
        }
        if polygon.is_degenerate(tol) {
            log::debug!(
                "polygon has {} distinct vertices, nothing to pack",
                polygon.distinct_vertex_count(tol)
            );
            return empty;
        }
        let centroid = match polygon.centroid() {
            Some(c) => c,
            None => return empty,
        };
        let min_radius = radii.iter().copied().fold(F::infinity(), F::min);

        let mut state = PackState {
            polygon,
            tol,
            layout: PackedLayout::new(),
        };

        state.seed(centroid, &radii);

        let mut iterations = 0;
        let mut saturated = false;
        while iterations < self.config.max_iterations {
            iterations += 1;
            let candidates = state.candidates(centroid, min_radius, self.config.ring_samples);
            if !state.place_first(&candidates, &radii) {
                saturated = true;
                break;
            }
        }

        log::debug!(
            "packing finished: {} circles after {} growth iterations ({})",
            state.layout.len(),
            iterations,
            if saturated { "saturated" } else { "iteration cap" }
        );

        PackOutcome {
            layout: state.layout,
            iterations,
            saturated,
        }
    }
}

/// Packs `radii` into `polygon` with the default ring sampling.
///
/// `max_iterations` defaults to 5000 when `None`.
pub fn pack<F: Float>(
    polygon: &Polygon<F>,
    radii: &[F],
    tolerance: Tolerance<F>,
    max_iterations: Option<usize>,
) -> PackedLayout<F> {
    let mut config = PackConfig::default().with_tolerance(tolerance);
    if let Some(n) = max_iterations {
        config = config.with_max_iterations(n);
    }
    Packer::new(config).pack(polygon, radii)
}

fn usable_radii<F: Float>(radii: &[F]) -> Vec<F> {
    let usable: Vec<F> = radii
        .iter()
        .copied()
        .filter(|r| r.is_finite() && *r > F::zero())
        .collect();
    if usable.len() != radii.len() {
        log::warn!(
            "ignoring {} non-finite or non-positive radii",
            radii.len() - usable.len()
        );
    }
    usable
}

/// Mutable state of one packing run.
struct PackState<'a, F> {
    polygon: &'a Polygon<F>,
    tol: &'a Tolerance<F>,
    layout: PackedLayout<F>,
}

impl<F: Float> PackState<'_, F> {
    /// Clearance test against the boundary, then against every placed circle.
    fn can_place(&self, center: Point2<F>, radius: F) -> bool {
        let candidate = PlantCircle::new(center, radius);
        if candidate.escapes(self.polygon, self.tol) {
            return false;
        }
        !self.layout.iter().any(|c| c.overlaps(&candidate, self.tol))
    }

    fn place(&mut self, center: Point2<F>, radius: F) {
        log::trace!(
            "placed circle #{} r={} at ({}, {})",
            self.layout.len(),
            as_f64(radius),
            as_f64(center.x),
            as_f64(center.y)
        );
        self.layout.push(PlantCircle::new(center, radius));
    }

    fn seed(&mut self, centroid: Point2<F>, radii: &[F]) {
        let anchors = std::iter::once(centroid).chain(self.polygon.first());
        for anchor in anchors {
            if let Some(&r) = radii.iter().find(|&&r| self.can_place(anchor, r)) {
                log::debug!("seed r={} placed", as_f64(r));
                self.place(anchor, r);
                return;
            }
        }
        log::debug!("no radius fits at the centroid or the first vertex");
    }

    /// Candidate centers inside the polygon, nearest to the centroid first.
    fn candidates(&self, centroid: Point2<F>, min_radius: F, ring_samples: usize) -> Vec<Point2<F>> {
        let mut points = Vec::new();

        if self.layout.is_empty() {
            let vertices = &self.polygon.vertices;
            let stride = (vertices.len() / 10).max(1);
            points.extend(vertices.iter().step_by(stride).copied());
        } else {
            let samples = ring_samples.max(1);
            let step = F::from(std::f64::consts::TAU).unwrap() / F::from(samples).unwrap();
            let gap = min_radius + self.tol.equal_point + self.tol.equal_point;
            for c in self.layout.iter() {
                let ring = c.radius + gap;
                for k in 0..samples {
                    let angle = step * F::from(k).unwrap();
                    points.push(c.center.polar_offset(ring, angle));
                }
            }
        }

        points.retain(|p| self.polygon.contains(*p, self.tol));

        let mut keyed: Vec<(F, Point2<F>)> = points
            .into_iter()
            .map(|p| (p.distance_squared(centroid), p))
            .collect();
        keyed.sort_by(|a, b| {
            cmp_f(a.0, b.0)
                .then_with(|| cmp_f(a.1.x, b.1.x))
                .then_with(|| cmp_f(a.1.y, b.1.y))
        });
        keyed.dedup_by(|a, b| a.1 == b.1);
        keyed.into_iter().map(|(_, p)| p).collect()
    }

    /// Places the first fitting radius/candidate pair, radii in caller order.
    fn place_first(&mut self, candidates: &[Point2<F>], radii: &[F]) -> bool {
        for &r in radii {
            if let Some(&p) = candidates.iter().find(|&&p| self.can_place(p, r)) {
                self.place(p, r);
                return true;
            }
        }
        false
    }
}

fn as_f64<F: Float>(v: F) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

#[inline]
fn cmp_f<F: Float>(a: F, b: F) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
