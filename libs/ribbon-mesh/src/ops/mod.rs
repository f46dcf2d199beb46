//! # Mesh Operations
//!
//! Operations that append geometry to a [`crate::Mesh`].

pub mod extrude;

pub use extrude::{ribbon_extrude, RibbonProfile, RibbonStats};
