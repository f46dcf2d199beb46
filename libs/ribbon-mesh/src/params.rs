//! # Shape Parameters
//!
//! The flat configuration that drives a build, and the per-layer values
//! derived from it.
//!
//! `ShapeParams` serializes with the editor's upper-case keys so presets
//! written for the browser editor load unchanged:
//!
//! ```rust
//! use ribbon_mesh::ShapeParams;
//!
//! let params: ShapeParams = serde_json::from_str(r#"{ "LAYERS": 3, "SEED": 7 }"#).unwrap();
//! assert_eq!(params.layers, 3);
//! assert_eq!(params.seed, 7);
//! assert_eq!(params.max_r, ShapeParams::default().max_r);
//! ```

use crate::contour::{Attractor, ContourParams};
use crate::error::MeshError;
use crate::ops::extrude::RibbonProfile;
use config::constants::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Global shape configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ShapeParams {
    /// Number of ribbon layers.
    pub layers: u32,
    /// Base radius of the innermost layer.
    pub min_r: f64,
    /// Base radius of the outermost layer.
    pub max_r: f64,
    /// Angular noise sampling frequency.
    pub noise_freq: f64,
    /// Maximum noise ripple amplitude.
    pub wobble_px: f64,
    /// Petal count per revolution.
    pub lobes: u32,
    /// Petal amplitude.
    pub lobe_amp: f64,
    /// Angular sampling step in radians.
    pub step_a: f64,
    /// Ribbon width of the innermost layer.
    pub ribbon_w_min: f64,
    /// Ribbon width of the outermost layer.
    pub ribbon_w_max: f64,
    /// Ribbon depth along Z.
    pub extrude_z: f64,
    /// Noise seed.
    pub seed: i64,
    /// Physical export diameter in millimetres.
    pub target_diam_mm: f64,
    /// Optional radial deformation field.
    #[serde(flatten)]
    pub attractor: AttractorParams,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            layers: DEFAULT_LAYERS,
            min_r: DEFAULT_MIN_R,
            max_r: DEFAULT_MAX_R,
            noise_freq: DEFAULT_NOISE_FREQ,
            wobble_px: DEFAULT_WOBBLE_PX,
            lobes: DEFAULT_LOBES,
            lobe_amp: DEFAULT_LOBE_AMP,
            step_a: DEFAULT_STEP_A,
            ribbon_w_min: DEFAULT_RIBBON_W_MIN,
            ribbon_w_max: DEFAULT_RIBBON_W_MAX,
            extrude_z: DEFAULT_EXTRUDE_Z,
            seed: DEFAULT_SEED,
            target_diam_mm: DEFAULT_TARGET_DIAM_MM,
            attractor: AttractorParams::default(),
        }
    }
}

/// Attractor switch and field settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttractorParams {
    /// Whether the field is applied.
    #[serde(rename = "ATTRACTOR_ON")]
    pub on: bool,
    /// Field center X.
    #[serde(rename = "ATTRACTOR_X")]
    pub x: f64,
    /// Field center Y.
    #[serde(rename = "ATTRACTOR_Y")]
    pub y: f64,
    /// Radius of influence.
    #[serde(rename = "ATTRACTOR_RADIUS")]
    pub radius: f64,
    /// Radius change at the field center.
    #[serde(rename = "ATTRACTOR_STRENGTH")]
    pub strength: f64,
}

impl Default for AttractorParams {
    fn default() -> Self {
        Self {
            on: false,
            x: 0.0,
            y: 0.0,
            radius: DEFAULT_ATTRACTOR_RADIUS,
            strength: DEFAULT_ATTRACTOR_STRENGTH,
        }
    }
}

impl AttractorParams {
    /// The active field, or `None` when switched off.
    pub fn active(&self) -> Option<Attractor> {
        self.on.then(|| Attractor {
            x: self.x,
            y: self.y,
            radius: self.radius,
            strength: self.strength,
        })
    }
}

impl ShapeParams {
    /// Interpolation fraction of layer `index` across `[0, layers - 1]`.
    ///
    /// ```rust
    /// use ribbon_mesh::ShapeParams;
    ///
    /// let params = ShapeParams { layers: 5, ..Default::default() };
    /// assert_eq!(params.layer_fraction(0), 0.0);
    /// assert_eq!(params.layer_fraction(2), 0.5);
    /// assert_eq!(params.layer_fraction(4), 1.0);
    ///
    /// let single = ShapeParams { layers: 1, ..Default::default() };
    /// assert_eq!(single.layer_fraction(0), 0.0);
    /// ```
    pub fn layer_fraction(&self, index: u32) -> f64 {
        if self.layers <= 1 {
            0.0
        } else {
            f64::from(index) / f64::from(self.layers - 1)
        }
    }

    /// Derives the values of layer `index`.
    pub fn layer(&self, index: u32) -> LayerParams {
        let t = self.layer_fraction(index);
        LayerParams {
            index,
            t,
            radius: lerp(self.min_r, self.max_r, t),
            wobble: self.wobble_px * (WOBBLE_TAPER_BASE - WOBBLE_TAPER_SLOPE * t),
            lobe_amp: self.lobe_amp * (LOBE_TAPER_BASE - LOBE_TAPER_SLOPE * t),
            ribbon_width: lerp(self.ribbon_w_min, self.ribbon_w_max, t),
            seed_offset: LAYER_SEED_STRIDE * f64::from(index),
        }
    }

    /// Checks the parameters at a configuration boundary.
    ///
    /// The geometry core accepts any finite input; callers that want to
    /// refuse values producing zero-volume or inverted geometry call this
    /// first.
    ///
    /// ```rust
    /// use ribbon_mesh::ShapeParams;
    ///
    /// assert!(ShapeParams::default().validate().is_ok());
    ///
    /// let bad = ShapeParams { step_a: 0.0, ..Default::default() };
    /// assert!(bad.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.layers > MAX_LAYERS {
            return Err(MeshError::invalid_param(
                "LAYERS",
                self.layers,
                "exceeds the layer limit",
            ));
        }

        let finite = [
            ("MIN_R", self.min_r),
            ("MAX_R", self.max_r),
            ("NOISE_FREQ", self.noise_freq),
            ("WOBBLE_PX", self.wobble_px),
            ("LOBE_AMP", self.lobe_amp),
            ("STEP_A", self.step_a),
            ("RIBBON_W_MIN", self.ribbon_w_min),
            ("RIBBON_W_MAX", self.ribbon_w_max),
            ("EXTRUDE_Z", self.extrude_z),
            ("TARGET_DIAM_MM", self.target_diam_mm),
            ("ATTRACTOR_X", self.attractor.x),
            ("ATTRACTOR_Y", self.attractor.y),
            ("ATTRACTOR_RADIUS", self.attractor.radius),
            ("ATTRACTOR_STRENGTH", self.attractor.strength),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(MeshError::invalid_param(name, value, "must be finite"));
            }
        }

        let non_negative = [
            ("NOISE_FREQ", self.noise_freq),
            ("WOBBLE_PX", self.wobble_px),
            ("LOBE_AMP", self.lobe_amp),
            ("EXTRUDE_Z", self.extrude_z),
            ("ATTRACTOR_RADIUS", self.attractor.radius),
        ];
        for (name, value) in non_negative {
            if value < 0.0 {
                return Err(MeshError::invalid_param(name, value, "must not be negative"));
            }
        }

        let positive = [
            ("STEP_A", self.step_a),
            ("RIBBON_W_MIN", self.ribbon_w_min),
            ("RIBBON_W_MAX", self.ribbon_w_max),
            ("TARGET_DIAM_MM", self.target_diam_mm),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(MeshError::invalid_param(name, value, "must be positive"));
            }
        }

        if contour_sample_count(self.step_a).is_none() {
            return Err(MeshError::invalid_param(
                "STEP_A",
                self.step_a,
                "too small: contour would exceed the sample limit",
            ));
        }

        Ok(())
    }
}

/// Draws a seed in `[0, RANDOM_SEED_BOUND)`.
pub fn random_seed<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.gen_range(0..RANDOM_SEED_BOUND)
}

/// Values of one layer, derived from [`ShapeParams`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerParams {
    /// Layer index.
    pub index: u32,
    /// Interpolation fraction in `[0, 1]`.
    pub t: f64,
    /// Base contour radius.
    pub radius: f64,
    /// Noise ripple amplitude.
    pub wobble: f64,
    /// Petal amplitude.
    pub lobe_amp: f64,
    /// Ribbon width.
    pub ribbon_width: f64,
    /// Noise and petal phase offset.
    pub seed_offset: f64,
}

impl LayerParams {
    /// Contour settings of this layer.
    pub fn contour(&self, params: &ShapeParams) -> ContourParams {
        ContourParams {
            radius: self.radius,
            amplitude: self.wobble,
            noise_freq: params.noise_freq,
            lobes: params.lobes,
            lobe_amp: self.lobe_amp,
            seed_offset: self.seed_offset,
            step: params.step_a,
        }
    }

    /// Cross-section of this layer's ribbon.
    pub fn profile(&self, params: &ShapeParams) -> RibbonProfile {
        RibbonProfile {
            width: self.ribbon_width,
            depth: params.extrude_z,
        }
    }
}
