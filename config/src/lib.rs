//! # Config Crate
//!
//! Centralized configuration constants for the ribbon mesh pipeline.
//! Default shape parameters, numeric floors, noise detail and safety limits
//! are defined here so the geometry crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{contour_sample_count, DEFAULT_STEP_A, MIN_CONTOUR_RADIUS};
//!
//! // Angular sampling of one contour with the default step
//! let samples = contour_sample_count(DEFAULT_STEP_A).unwrap();
//! assert!(samples > 200);
//!
//! // Contour radii never drop below the floor
//! let r = (2.0_f64).max(MIN_CONTOUR_RADIUS);
//! assert_eq!(r, 5.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Editor Compatible**: Defaults match the browser editor presets

pub mod constants;
