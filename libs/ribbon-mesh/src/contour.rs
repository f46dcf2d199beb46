//! # Contour Generation
//!
//! One closed planar centerline per layer: a circle of the layer radius,
//! rippled by coherent noise, modulated by a petal sinusoid and optionally
//! pushed along its rays by an attractor field.

use crate::noise::NoiseSource;
use config::constants::{
    contour_sample_count, MIN_ATTRACTED_RADIUS, MIN_CONTOUR_POINTS, MIN_CONTOUR_RADIUS,
    NOISE_Y_SEED_FACTOR, PETAL_PHASE_FACTOR,
};
use glam::{DVec2, DVec3};
use tracing::warn;

/// Settings of a single contour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContourParams {
    /// Base radius.
    pub radius: f64,
    /// Noise ripple amplitude.
    pub amplitude: f64,
    /// Angular noise sampling frequency.
    pub noise_freq: f64,
    /// Petal count per revolution.
    pub lobes: u32,
    /// Petal amplitude.
    pub lobe_amp: f64,
    /// Noise and petal phase offset.
    pub seed_offset: f64,
    /// Angular step in radians.
    pub step: f64,
}

/// Radial deformation field.
///
/// Points closer than `radius` to the center get `strength * (1 - d / radius)`
/// added to their radius. The point stays on its own ray from the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attractor {
    /// Center X.
    pub x: f64,
    /// Center Y.
    pub y: f64,
    /// Radius of influence.
    pub radius: f64,
    /// Radius change at the center.
    pub strength: f64,
}

impl Attractor {
    /// Applies the field to a sample at `angle` with radius `r`.
    ///
    /// ```rust
    /// use ribbon_mesh::contour::Attractor;
    ///
    /// let field = Attractor { x: 50.0, y: 0.0, radius: 10.0, strength: 4.0 };
    /// // Sample exactly at the center gets the full strength
    /// assert_eq!(field.apply(0.0, 50.0), 54.0);
    /// // Outside the radius nothing changes
    /// assert_eq!(field.apply(0.0, 70.0), 70.0);
    /// ```
    pub fn apply(&self, angle: f64, r: f64) -> f64 {
        let (sin, cos) = angle.sin_cos();
        let d = DVec2::new(r * cos, r * sin).distance(DVec2::new(self.x, self.y));
        if d < self.radius {
            let influence = 1.0 - d / self.radius;
            (r + self.strength * influence).max(MIN_ATTRACTED_RADIUS)
        } else {
            r
        }
    }
}

/// A closed planar polyline.
///
/// The last point connects back to the first; the closing point is not
/// repeated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contour {
    points: Vec<DVec3>,
}

impl Contour {
    /// Wraps a point sequence.
    pub fn new(points: Vec<DVec3>) -> Self {
        Self { points }
    }

    /// The points in order.
    #[inline]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when there are no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when the contour has too few points to extrude.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < MIN_CONTOUR_POINTS
    }
}

/// Samples the contour described by `params`.
///
/// Returns an empty contour when `params.step` cannot produce a sweep.
///
/// # Example
///
/// ```rust
/// use ribbon_mesh::contour::{make_contour, ContourParams};
/// use ribbon_mesh::noise::NoiseSource;
///
/// let params = ContourParams {
///     radius: 60.0,
///     amplitude: 0.0,
///     noise_freq: 0.0,
///     lobes: 0,
///     lobe_amp: 0.0,
///     seed_offset: 0.0,
///     step: std::f64::consts::FRAC_PI_2,
/// };
/// let contour = make_contour(&params, &NoiseSource::with_seed(1), None);
/// assert_eq!(contour.len(), 4);
/// ```
pub fn make_contour(
    params: &ContourParams,
    noise: &NoiseSource,
    attractor: Option<&Attractor>,
) -> Contour {
    let Some(count) = contour_sample_count(params.step) else {
        warn!(step = params.step, "angular step yields no contour");
        return Contour::default();
    };

    let lobes = f64::from(params.lobes);
    let mut points = Vec::with_capacity(count);

    for k in 0..count {
        let a = k as f64 * params.step;
        let (sin, cos) = a.sin_cos();

        let n = noise.sample(
            cos * params.noise_freq + params.seed_offset,
            sin * params.noise_freq + NOISE_Y_SEED_FACTOR * params.seed_offset,
        );
        let ripple = (n - 0.5) * 2.0 * params.amplitude;
        let petals = (a * lobes + PETAL_PHASE_FACTOR * params.seed_offset).sin() * params.lobe_amp;

        let mut r = (params.radius + ripple + petals).max(MIN_CONTOUR_RADIUS);
        if let Some(field) = attractor {
            r = field.apply(a, r);
        }

        points.push(DVec3::new(r * cos, r * sin, 0.0));
    }

    Contour::new(points)
}
