//! # Ribbon Mesh
//!
//! Deterministic procedural geometry for layered ribbon jewelry.
//! Converts a flat [`ShapeParams`] value into a closed triangle mesh.
//!
//! ## Architecture
//!
//! ```text
//! ShapeParams → layer params → contour (noise + petals + attractor)
//!             → ribbon_extrude → Mesh → export (OBJ / ASCII STL)
//! ```
//!
//! ## Guarantees
//!
//! - **Deterministic**: equal parameters give bit-identical meshes
//! - **Total**: [`build_mesh`] never fails; unusable layers are skipped
//! - **Closed**: every layer is a watertight, outward-facing shell
//!
//! ## Usage
//!
//! ```rust
//! use ribbon_mesh::{build_mesh, dimensions, export, ShapeParams};
//!
//! let params = ShapeParams { layers: 3, ..Default::default() };
//! let mesh = build_mesh(&params);
//!
//! let diameter = dimensions::diameter_px(mesh.vertices());
//! let scale = dimensions::export_scale(params.target_diam_mm, diameter);
//! let obj = export::to_obj_string(&mesh, scale).unwrap();
//! assert!(obj.starts_with("# OBJ exported from ribbon-mesh"));
//! ```

pub mod contour;
pub mod dimensions;
pub mod error;
pub mod export;
pub mod from_params;
pub mod mesh;
pub mod noise;
pub mod ops;
pub mod params;
pub mod session;

pub use error::MeshError;
pub use export::ExportFormat;
pub use from_params::{build_mesh, build_mesh_with_report, BuildReport, LayerReport};
pub use mesh::Mesh;
pub use params::{random_seed, AttractorParams, LayerParams, ShapeParams};
pub use session::MeshSession;
