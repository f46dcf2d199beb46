//! # Parameters to Mesh
//!
//! Assembles the full ribbon mesh from [`ShapeParams`]: one contour and one
//! extruded shell per layer, appended in layer order.

use crate::contour::make_contour;
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::noise::NoiseSource;
use crate::ops::extrude::ribbon_extrude;
use crate::params::ShapeParams;
use config::constants::MAX_LAYERS;
use serde::Serialize;
use tracing::{debug, info, info_span, warn};

/// Outcome of one layer in a build.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayerReport {
    /// Layer index.
    pub index: u32,
    /// Base radius of the layer contour.
    pub radius: f64,
    /// Ribbon width of the layer.
    pub ribbon_width: f64,
    /// Number of contour samples.
    pub points: usize,
    /// True when the layer produced no geometry.
    pub skipped: bool,
}

/// Per-layer diagnostics of a build.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BuildReport {
    /// One entry per requested layer.
    pub layers: Vec<LayerReport>,
}

impl BuildReport {
    /// Number of layers that produced geometry.
    pub fn built_layers(&self) -> usize {
        self.layers.iter().filter(|layer| !layer.skipped).count()
    }

    /// Number of layers that were skipped.
    pub fn skipped_layers(&self) -> usize {
        self.layers.len() - self.built_layers()
    }
}

/// Builds the ribbon mesh described by `params`.
///
/// Never fails: layers whose contour cannot be extruded are left out.
/// `layers == 0` yields an empty mesh. Two calls with equal parameters
/// return identical meshes.
///
/// # Example
///
/// ```rust
/// use ribbon_mesh::{build_mesh, ShapeParams};
///
/// let mesh = build_mesh(&ShapeParams { layers: 2, ..Default::default() });
/// assert!(mesh.triangle_count() > 0);
/// assert!(mesh.is_closed());
/// ```
pub fn build_mesh(params: &ShapeParams) -> Mesh {
    build_mesh_with_report(params).0
}

/// Builds the ribbon mesh and reports what each layer contributed.
pub fn build_mesh_with_report(params: &ShapeParams) -> (Mesh, BuildReport) {
    let span = info_span!("build_mesh", layers = params.layers, seed = params.seed);
    let _enter = span.enter();

    let noise = NoiseSource::with_seed(params.seed);
    let attractor = params.attractor.active();
    let mut mesh = Mesh::new();
    let mut report = BuildReport {
        layers: Vec::with_capacity(params.layers.min(MAX_LAYERS) as usize),
    };

    for index in 0..params.layers {
        let layer = params.layer(index);
        let contour = make_contour(&layer.contour(params), &noise, attractor.as_ref());

        let skipped = match ribbon_extrude(&mut mesh, &contour, &layer.profile(params)) {
            Ok(stats) => {
                debug!(
                    layer = index,
                    radius = layer.radius,
                    points = contour.len(),
                    triangles = stats.triangles,
                    "layer extruded"
                );
                false
            }
            Err(err @ MeshError::TooManyVertices { .. }) => {
                warn!(layer = index, %err, "layer skipped");
                true
            }
            Err(err) => {
                debug!(layer = index, %err, "layer skipped");
                true
            }
        };

        report.layers.push(LayerReport {
            index,
            radius: layer.radius,
            ribbon_width: layer.ribbon_width,
            points: contour.len(),
            skipped,
        });
    }

    info!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        skipped = report.skipped_layers(),
        "mesh built"
    );

    (mesh, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_zero_layers_is_empty() {
        let (mesh, report) = build_mesh_with_report(&ShapeParams {
            layers: 0,
            ..Default::default()
        });
        assert!(mesh.is_empty());
        assert_eq!(mesh.triangle_count(), 0);
        assert!(report.layers.is_empty());
    }

    #[test]
    fn test_layer_counts_add_up() {
        let params = ShapeParams {
            layers: 3,
            ..Default::default()
        };
        let (mesh, report) = build_mesh_with_report(&params);
        let points: usize = report.layers.iter().map(|l| l.points).sum();
        assert_eq!(report.built_layers(), 3);
        assert_eq!(mesh.vertex_count(), 4 * points);
        assert_eq!(mesh.triangle_count(), 8 * points);
    }

    #[test]
    fn test_degenerate_layers_are_skipped() {
        // Two samples per revolution cannot be extruded
        let params = ShapeParams {
            layers: 4,
            step_a: PI,
            ..Default::default()
        };
        let (mesh, report) = build_mesh_with_report(&params);
        assert!(mesh.is_empty());
        assert_eq!(report.skipped_layers(), 4);
        assert!(report.layers.iter().all(|l| l.points == 2));
    }

    #[test]
    fn test_invalid_step_builds_empty() {
        for step_a in [0.0, -1.0, f64::NAN] {
            let mesh = build_mesh(&ShapeParams {
                step_a,
                ..Default::default()
            });
            assert!(mesh.is_empty());
        }
    }

    fn quarter_turn() -> ShapeParams {
        // WOBBLE_PX keeps its default: the ripple vanishes because the
        // noise sits on a lattice point
        ShapeParams {
            layers: 1,
            min_r: 60.0,
            max_r: 60.0,
            noise_freq: 0.0,
            lobes: 0,
            step_a: FRAC_PI_2,
            ..Default::default()
        }
    }

    #[test]
    fn test_quarter_turn_contour_is_exact_square() {
        let params = quarter_turn();
        assert!(params.wobble_px > 0.0);
        let layer = params.layer(0);
        let noise = NoiseSource::with_seed(params.seed);
        let contour = make_contour(&layer.contour(&params), &noise, None);

        let expected = [(60.0, 0.0), (0.0, 60.0), (-60.0, 0.0), (0.0, -60.0)];
        assert_eq!(contour.len(), expected.len());
        for (p, (x, y)) in contour.points().iter().zip(expected) {
            assert_abs_diff_eq!(p.x, x, epsilon = 1e-9);
            assert_abs_diff_eq!(p.y, y, epsilon = 1e-9);
            assert_eq!(p.z, 0.0);
        }
    }

    #[test]
    fn test_single_layer_square() {
        let params = quarter_turn();
        let (mesh, report) = build_mesh_with_report(&params);
        assert_eq!(report.layers[0].points, 4);
        assert_eq!(mesh.vertex_count(), 16);
        assert_eq!(mesh.triangle_count(), 32);
        assert!(mesh.is_closed());
    }
}
