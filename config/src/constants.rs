//! # Configuration Constants
//!
//! Centralized constants for the ribbon mesh pipeline. Default shape
//! parameters, numeric floors and sampling limits are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Shape Defaults**: Default values of every shape parameter
//! - **Contour**: Radius floors, noise/petal phase factors, layer tapers
//! - **Noise**: Lattice size and octave defaults
//! - **Limits**: Maximum values for safety bounds
//! - **Export**: Header text and file naming

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance used when closing the angular sweep of a contour.
///
/// A sample whose angle lies within this distance of `2π` would coincide
/// with the sample at angle 0 and is therefore not emitted.
pub const ANGLE_CLOSE_EPSILON: f64 = 1e-4;

/// Squared length below which a triangle normal is treated as degenerate.
pub const DEGENERATE_NORMAL_EPSILON: f64 = 1e-24;

// =============================================================================
// SHAPE DEFAULTS
// =============================================================================

/// Default number of ribbon layers.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_LAYERS;
///
/// let user_layers: Option<u32> = None;
/// assert_eq!(user_layers.unwrap_or(DEFAULT_LAYERS), 9);
/// ```
pub const DEFAULT_LAYERS: u32 = 9;

/// Default base radius of the innermost layer (design units).
pub const DEFAULT_MIN_R: f64 = 18.0;

/// Default base radius of the outermost layer (design units).
pub const DEFAULT_MAX_R: f64 = 170.0;

/// Default angular noise sampling frequency.
pub const DEFAULT_NOISE_FREQ: f64 = 0.9;

/// Default maximum noise ripple amplitude (design units).
pub const DEFAULT_WOBBLE_PX: f64 = 15.0;

/// Default petal count per revolution.
pub const DEFAULT_LOBES: u32 = 6;

/// Default petal amplitude (design units).
pub const DEFAULT_LOBE_AMP: f64 = 12.0;

/// Default angular sampling step in radians.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_STEP_A;
///
/// let samples = (std::f64::consts::TAU / DEFAULT_STEP_A).ceil();
/// assert_eq!(samples, 225.0);
/// ```
pub const DEFAULT_STEP_A: f64 = 0.028;

/// Default ribbon width of the innermost layer.
pub const DEFAULT_RIBBON_W_MIN: f64 = 8.0;

/// Default ribbon width of the outermost layer.
pub const DEFAULT_RIBBON_W_MAX: f64 = 5.0;

/// Default ribbon depth along Z.
pub const DEFAULT_EXTRUDE_Z: f64 = 10.0;

/// Default noise seed.
pub const DEFAULT_SEED: i64 = 1337;

/// Default physical diameter of the exported piece, in millimetres.
pub const DEFAULT_TARGET_DIAM_MM: f64 = 45.0;

/// Default attractor radius of influence (design units).
pub const DEFAULT_ATTRACTOR_RADIUS: f64 = 60.0;

/// Default attractor strength added to the radius at the attractor center.
pub const DEFAULT_ATTRACTOR_STRENGTH: f64 = 20.0;

/// Exclusive upper bound for randomly chosen seeds.
///
/// # Example
///
/// ```rust
/// use config::constants::RANDOM_SEED_BOUND;
///
/// let seed = 99_999_i64;
/// assert!(seed < RANDOM_SEED_BOUND);
/// ```
pub const RANDOM_SEED_BOUND: i64 = 100_000;

// =============================================================================
// CONTOUR CONSTANTS
// =============================================================================

/// Hard floor applied to the noise + petal radius of a contour sample.
///
/// Keeps contours away from the origin where they would self-intersect.
pub const MIN_CONTOUR_RADIUS: f64 = 5.0;

/// Floor applied after the attractor modulated the radius.
pub const MIN_ATTRACTED_RADIUS: f64 = 0.1;

/// Minimum number of points for an extrudable contour.
pub const MIN_CONTOUR_POINTS: usize = 3;

/// Angular offset between consecutive layers' noise and petal phases.
pub const LAYER_SEED_STRIDE: f64 = 2.38;

/// Factor applied to the seed offset on the noise Y axis.
pub const NOISE_Y_SEED_FACTOR: f64 = 0.7;

/// Factor applied to the seed offset in the petal phase.
pub const PETAL_PHASE_FACTOR: f64 = 1.3;

/// Wobble taper: layer amplitude is `WOBBLE_PX * (BASE - SLOPE * t)`.
pub const WOBBLE_TAPER_BASE: f64 = 1.1;

/// Wobble taper slope, see [`WOBBLE_TAPER_BASE`].
pub const WOBBLE_TAPER_SLOPE: f64 = 0.5;

/// Petal taper: layer petal amplitude is `LOBE_AMP * (BASE - SLOPE * t)`.
pub const LOBE_TAPER_BASE: f64 = 1.2;

/// Petal taper slope, see [`LOBE_TAPER_BASE`].
pub const LOBE_TAPER_SLOPE: f64 = 0.6;

// =============================================================================
// NOISE CONSTANTS
// =============================================================================

/// Number of entries in the noise lattice table (power of two).
pub const NOISE_TABLE_SIZE: usize = 4096;

/// Default number of noise octaves.
pub const DEFAULT_NOISE_OCTAVES: u32 = 4;

/// Default amplitude falloff between noise octaves.
pub const DEFAULT_NOISE_FALLOFF: f64 = 0.5;

/// Maximum number of noise octaves accepted by [`NoiseDetail::new`].
pub const MAX_NOISE_OCTAVES: u32 = 16;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of angular samples in one contour.
///
/// A step small enough to exceed this count makes the layer degenerate
/// instead of exhausting memory.
///
/// # Example
///
/// ```rust
/// use config::constants::{contour_sample_count, MAX_CONTOUR_SAMPLES};
///
/// let tiny_step = std::f64::consts::TAU / (MAX_CONTOUR_SAMPLES as f64 * 4.0);
/// assert_eq!(contour_sample_count(tiny_step), None);
/// ```
pub const MAX_CONTOUR_SAMPLES: usize = 1 << 20;

/// Maximum number of vertices addressable by a `u32` triangle index.
pub const MAX_VERTICES: usize = u32::MAX as usize;

/// Maximum number of ribbon layers accepted at a configuration boundary.
///
/// Far above any wearable piece, and small enough that per-layer
/// bookkeeping never approaches allocation limits on 32-bit targets.
pub const MAX_LAYERS: u32 = 1024;

// =============================================================================
// EXPORT CONSTANTS
// =============================================================================

/// Comment line written at the top of every OBJ file.
pub const OBJ_HEADER: &str = "# OBJ exported from ribbon-mesh";

/// Solid name used in STL files when the caller gives none.
pub const DEFAULT_STL_SOLID_NAME: &str = "ribbon";

/// Prefix of exported file names.
pub const EXPORT_FILE_PREFIX: &str = "arete";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Computes how many samples an angular sweep with the given step produces.
///
/// Samples sit at `k * step` for every `k` with `k * step < 2π - ANGLE_CLOSE_EPSILON`.
/// Returns `None` when the step is not a positive finite number or when the
/// count would exceed [`MAX_CONTOUR_SAMPLES`].
///
/// # Example
///
/// ```rust
/// use config::constants::contour_sample_count;
///
/// // Quarter turns: 0, π/2, π, 3π/2
/// assert_eq!(contour_sample_count(std::f64::consts::FRAC_PI_2), Some(4));
/// assert_eq!(contour_sample_count(0.0), None);
/// assert_eq!(contour_sample_count(-1.0), None);
/// ```
pub fn contour_sample_count(step: f64) -> Option<usize> {
    if !step.is_finite() || step <= 0.0 {
        return None;
    }

    let limit = std::f64::consts::TAU - ANGLE_CLOSE_EPSILON;
    let estimate = (limit / step).ceil();
    if estimate > MAX_CONTOUR_SAMPLES as f64 {
        return None;
    }

    // Fix up rounding so exactly the angles below the limit are counted
    let mut count = estimate as usize;
    while count > 0 && ((count - 1) as f64) * step >= limit {
        count -= 1;
    }
    while (count as f64) * step < limit {
        count += 1;
    }
    Some(count)
}

/// Linear interpolation between `start` and `stop`.
///
/// # Example
///
/// ```rust
/// use config::constants::lerp;
///
/// assert_eq!(lerp(18.0, 170.0, 0.0), 18.0);
/// assert_eq!(lerp(18.0, 170.0, 1.0), 170.0);
/// assert_eq!(lerp(0.0, 10.0, 0.25), 2.5);
/// ```
#[inline]
pub fn lerp(start: f64, stop: f64, t: f64) -> f64 {
    start + (stop - start) * t
}

// =============================================================================
// NOISE DETAIL
// =============================================================================

/// Octave settings for the coherent noise source.
///
/// # Examples
/// ```
/// use config::constants::NoiseDetail;
/// let detail = NoiseDetail::default();
/// assert_eq!(detail.octaves, 4);
/// assert_eq!(detail.falloff, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseDetail {
    /// Number of summed octaves.
    pub octaves: u32,
    /// Amplitude multiplier from one octave to the next.
    pub falloff: f64,
}

impl NoiseDetail {
    /// Builds noise detail settings, rejecting values that would push the
    /// noise output outside `[0, 1]`.
    ///
    /// # Examples
    /// ```
    /// use config::constants::NoiseDetail;
    /// let detail = NoiseDetail::new(6, 0.4).expect("valid detail");
    /// assert_eq!(detail.octaves, 6);
    /// assert!(NoiseDetail::new(0, 0.5).is_err());
    /// assert!(NoiseDetail::new(4, 0.9).is_err());
    /// ```
    pub fn new(octaves: u32, falloff: f64) -> Result<Self, ConfigError> {
        if octaves == 0 || octaves > MAX_NOISE_OCTAVES {
            return Err(ConfigError::InvalidOctaves(octaves));
        }
        if !(falloff > 0.0 && falloff <= 0.5) {
            return Err(ConfigError::InvalidFalloff(falloff));
        }
        Ok(Self { octaves, falloff })
    }
}

impl Default for NoiseDetail {
    fn default() -> Self {
        Self {
            octaves: DEFAULT_NOISE_OCTAVES,
            falloff: DEFAULT_NOISE_FALLOFF,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the octave count is zero or above [`MAX_NOISE_OCTAVES`].
    InvalidOctaves(u32),
    /// Raised when the falloff is outside `(0, 0.5]`.
    InvalidFalloff(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidOctaves(value) => {
                write!(f, "octaves must be in 1..={MAX_NOISE_OCTAVES}: {value}")
            }
            ConfigError::InvalidFalloff(value) => {
                write!(f, "falloff must be in (0, 0.5]: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
