//! # Extrusion Integration Tests
//!
//! Topology and orientation checks for ribbon_extrude on generated contours.

use super::*;
use crate::contour::{make_contour, Contour, ContourParams};
use crate::mesh::Mesh;
use crate::noise::NoiseSource;
use glam::DVec3;
use std::collections::HashSet;

fn circle(radius: f64, step: f64) -> Contour {
    let params = ContourParams {
        radius,
        amplitude: 0.0,
        noise_freq: 0.0,
        lobes: 0,
        lobe_amp: 0.0,
        seed_offset: 0.0,
        step,
    };
    make_contour(&params, &NoiseSource::with_seed(0), None)
}

#[test]
fn test_three_point_contour_counts() {
    let contour = Contour::new(vec![
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(10.0, 0.0, 0.0),
        DVec3::new(0.0, 10.0, 0.0),
    ]);
    let mut mesh = Mesh::new();
    ribbon_extrude(&mut mesh, &contour, &RibbonProfile::new(2.0, 2.0)).unwrap();

    assert_eq!(mesh.vertex_count(), 12);
    assert_eq!(mesh.triangle_count(), 24);
    assert!(mesh.validate_indices().is_ok());
    assert!(mesh.check_closed().is_ok());
}

#[test]
fn test_counts_scale_with_points() {
    let contour = circle(40.0, 0.05);
    let n = contour.len();
    let mut mesh = Mesh::new();
    let stats = ribbon_extrude(&mut mesh, &contour, &RibbonProfile::new(5.0, 10.0)).unwrap();

    assert_eq!(stats.vertices, 4 * n);
    assert_eq!(stats.triangles, 8 * n);
    assert_eq!(mesh.vertex_count(), 4 * n);
    assert_eq!(mesh.triangle_count(), 8 * n);
}

#[test]
fn test_noisy_contour_is_watertight() {
    let params = ContourParams {
        radius: 80.0,
        amplitude: 15.0,
        noise_freq: 0.9,
        lobes: 6,
        lobe_amp: 12.0,
        seed_offset: 2.38,
        step: 0.028,
    };
    let contour = make_contour(&params, &NoiseSource::with_seed(1337), None);
    let mut mesh = Mesh::new();
    ribbon_extrude(&mut mesh, &contour, &RibbonProfile::new(8.0, 10.0)).unwrap();

    assert!(mesh.validate_indices().is_ok());
    assert!(mesh.check_closed().is_ok());
}

#[test]
fn test_faces_point_out_of_the_solid() {
    let radius = 50.0;
    let contour = circle(radius, 0.1);
    let mut mesh = Mesh::new();
    ribbon_extrude(&mut mesh, &contour, &RibbonProfile::new(4.0, 6.0)).unwrap();

    for face in 0..mesh.triangle_count() {
        let [a, b, c] = mesh.triangle_positions(face);
        let centroid = (a + b + c) / 3.0;
        let normal = mesh.face_normal(face);

        if normal.z.abs() > 0.99 {
            // Lids face away from the mid-plane
            assert_eq!(normal.z.signum(), centroid.z.signum(), "lid face {face}");
        } else {
            // Walls face away from the centerline
            let radial = centroid.truncate().normalize();
            let facing = normal.truncate().dot(radial);
            if centroid.truncate().length() > radius {
                assert!(facing > 0.9, "outer wall face {face}: {facing}");
            } else {
                assert!(facing < -0.9, "inner wall face {face}: {facing}");
            }
        }
    }
}

#[test]
fn test_zero_width_keeps_topology() {
    let contour = circle(20.0, 0.2);
    let mut mesh = Mesh::new();
    ribbon_extrude(&mut mesh, &contour, &RibbonProfile::new(0.0, 0.0)).unwrap();

    assert!(mesh.validate_indices().is_ok());
    assert!(mesh.check_closed().is_ok());
    assert!(mesh.vertices().iter().all(|v| v.is_finite()));
}

#[test]
fn test_coincident_points_stay_finite() {
    let contour = Contour::new(vec![DVec3::ZERO, DVec3::ZERO, DVec3::ZERO, DVec3::X]);
    let mut mesh = Mesh::new();
    ribbon_extrude(&mut mesh, &contour, &RibbonProfile::new(1.0, 1.0)).unwrap();

    assert!(mesh.vertices().iter().all(|v| v.is_finite()));
}

#[test]
fn test_extrusions_are_disjoint() {
    let mut mesh = Mesh::new();
    let profile = RibbonProfile::new(3.0, 3.0);
    let first = ribbon_extrude(&mut mesh, &circle(20.0, 0.3), &profile).unwrap();
    let second = ribbon_extrude(&mut mesh, &circle(40.0, 0.3), &profile).unwrap();

    let used = |stats: &RibbonStats| -> HashSet<u32> {
        mesh.triangles()[stats.first_triangle..stats.first_triangle + stats.triangles]
            .iter()
            .flatten()
            .copied()
            .collect()
    };
    assert!(used(&first).is_disjoint(&used(&second)));
    assert!(mesh.check_closed().is_ok());
}
