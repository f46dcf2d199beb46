//! # Coherent Noise
//!
//! Seeded 2D gradient noise with octave summation.
//!
//! Every lattice point carries a unit gradient drawn from a seeded
//! [`StdRng`] table of [`NOISE_TABLE_SIZE`] angles. A sample blends the
//! corner contributions with a cosine ease, so the output varies smoothly
//! with the coordinates and is exactly 0.5 on integer lattice points. A
//! source holds no mutable state: building a new one from the same seed
//! reproduces every sample bit for bit.

use config::constants::{NoiseDetail, NOISE_TABLE_SIZE};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::{FRAC_1_SQRT_2, PI, TAU};

/// Row stride of the lattice, as a shift.
const Y_WRAP_SHIFT: u32 = 4;
const Y_WRAP: u64 = 1 << Y_WRAP_SHIFT;
const TABLE_MASK: u64 = NOISE_TABLE_SIZE as u64 - 1;

/// Deterministic coherent noise source.
///
/// # Example
///
/// ```rust
/// use ribbon_mesh::noise::NoiseSource;
///
/// let a = NoiseSource::with_seed(1337);
/// let b = NoiseSource::with_seed(1337);
/// assert_eq!(a.sample(0.3, 1.7), b.sample(0.3, 1.7));
///
/// let n = a.sample(12.5, -4.0);
/// assert!((0.0..=1.0).contains(&n));
///
/// // Integer lattice points sit on the mid-level
/// assert_eq!(a.sample(0.0, 0.0), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct NoiseSource {
    gradients: Vec<DVec2>,
    detail: NoiseDetail,
}

impl NoiseSource {
    /// Creates a noise source from a seed and octave settings.
    pub fn new(seed: i64, detail: NoiseDetail) -> Self {
        let mut rng = StdRng::seed_from_u64(seed as u64);
        let gradients = (0..NOISE_TABLE_SIZE)
            .map(|_| DVec2::from_angle(rng.gen::<f64>() * TAU))
            .collect();
        Self { gradients, detail }
    }

    /// Creates a noise source with the default octave settings.
    pub fn with_seed(seed: i64) -> Self {
        Self::new(seed, NoiseDetail::default())
    }

    /// Samples the noise field at `(x, y)`.
    ///
    /// Returns a value in `[0, 1]`, 0.5 at integer lattice points. Negative
    /// coordinates are mirrored; non-finite or huge coordinates wrap around
    /// the lattice.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let (mut xi, mut xf) = split(x.abs());
        let (mut yi, mut yf) = split(y.abs());

        let mut result = 0.5;
        let mut amplitude = 0.5;

        for _ in 0..self.detail.octaves {
            let offset = xi.wrapping_add(yi.wrapping_shl(Y_WRAP_SHIFT));
            let rx = ease(xf);
            let ry = ease(yf);

            let d00 = self.gradient(offset).dot(DVec2::new(xf, yf));
            let d10 = self
                .gradient(offset.wrapping_add(1))
                .dot(DVec2::new(xf - 1.0, yf));
            let d01 = self
                .gradient(offset.wrapping_add(Y_WRAP))
                .dot(DVec2::new(xf, yf - 1.0));
            let d11 = self
                .gradient(offset.wrapping_add(Y_WRAP + 1))
                .dot(DVec2::new(xf - 1.0, yf - 1.0));

            let near = d00 + rx * (d10 - d00);
            let far = d01 + rx * (d11 - d01);
            // Corner blends peak near ±1/√2; scale that to ±1/2
            result += (near + ry * (far - near)) * FRAC_1_SQRT_2 * amplitude;
            amplitude *= self.detail.falloff;

            xi = xi.wrapping_shl(1);
            xf *= 2.0;
            yi = yi.wrapping_shl(1);
            yf *= 2.0;

            if xf >= 1.0 {
                xi = xi.wrapping_add(1);
                xf -= 1.0;
            }
            if yf >= 1.0 {
                yi = yi.wrapping_add(1);
                yf -= 1.0;
            }
        }

        result.clamp(0.0, 1.0)
    }

    #[inline]
    fn gradient(&self, offset: u64) -> DVec2 {
        self.gradients[(offset & TABLE_MASK) as usize]
    }
}

/// Splits a non-negative coordinate into lattice cell and fraction.
fn split(value: f64) -> (u64, f64) {
    if !value.is_finite() {
        return (0, 0.0);
    }
    let cell = value.floor();
    let fraction = value - cell;
    // Reduce before the integer cast so huge values keep their low bits
    let wrapped = cell % (NOISE_TABLE_SIZE as f64 * 1024.0);
    (wrapped as u64, fraction.clamp(0.0, 1.0 - f64::EPSILON))
}

/// Cosine ease from 0 to 1 over the unit interval.
#[inline]
fn ease(t: f64) -> f64 {
    0.5 * (1.0 - (t * PI).cos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_same_seed_same_values() {
        let a = NoiseSource::with_seed(42);
        let b = NoiseSource::with_seed(42);
        for i in 0..200 {
            let x = i as f64 * 0.173;
            let y = i as f64 * -0.091;
            assert_eq!(a.sample(x, y).to_bits(), b.sample(x, y).to_bits());
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = NoiseSource::with_seed(1);
        let b = NoiseSource::with_seed(2);
        let differs = (0..50).any(|i| {
            let x = i as f64 * 0.37;
            a.sample(x, 0.5) != b.sample(x, 0.5)
        });
        assert!(differs);
    }

    #[test]
    fn test_output_in_unit_range() {
        let noise = NoiseSource::with_seed(7);
        for i in 0..1000 {
            let x = (i as f64 * 0.731).sin() * 50.0;
            let y = (i as f64 * 0.417).cos() * 50.0;
            let n = noise.sample(x, y);
            assert!((0.0..=1.0).contains(&n), "sample {n} out of range");
        }
    }

    #[test]
    fn test_continuity() {
        let noise = NoiseSource::with_seed(1337);
        let mut previous = noise.sample(0.0, 0.0);
        for i in 1..2000 {
            let x = i as f64 * 1e-4;
            let current = noise.sample(x, x * 0.5);
            assert!((current - previous).abs() < 1e-2, "jump at x = {x}");
            previous = current;
        }
    }

    #[test]
    fn test_lattice_points_are_mid_level() {
        for seed in [0, 3, 1337, -9] {
            let noise = NoiseSource::with_seed(seed);
            for (x, y) in [(0.0, 0.0), (2.0, 0.0), (7.0, 13.0), (-4.0, 1.0)] {
                assert_eq!(noise.sample(x, y), 0.5, "seed {seed} at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_single_octave_follows_corner_gradient() {
        let detail = NoiseDetail::new(1, 0.5).unwrap();
        let noise = NoiseSource::new(3, detail);
        // Near a lattice point only that corner's gradient matters
        let h = 1e-6;
        let slope = (noise.sample(2.0 + h, 0.0) - 0.5) / h;
        let expected = noise.gradients[2].x * FRAC_1_SQRT_2 * 0.5;
        assert_relative_eq!(slope, expected, epsilon = 1e-4);
    }

    #[test]
    fn test_non_finite_input_is_total() {
        let noise = NoiseSource::with_seed(5);
        for (x, y) in [
            (f64::NAN, 0.0),
            (f64::INFINITY, 1.0),
            (1e300, -1e300),
            (f64::MAX, f64::MIN),
        ] {
            let n = noise.sample(x, y);
            assert!((0.0..=1.0).contains(&n));
        }
    }

    #[test]
    fn test_negative_coordinates_mirror() {
        let noise = NoiseSource::with_seed(11);
        assert_eq!(noise.sample(-1.25, 0.5), noise.sample(1.25, 0.5));
    }
}
