//! # Dimensions
//!
//! Planar extent of a mesh and the factor that maps it to a physical
//! diameter for export.

use glam::DVec3;

/// Largest planar extent, `max(width, height)` of the XY bounding box.
///
/// Z is ignored. Returns 0 for an empty slice.
///
/// ```rust
/// use glam::DVec3;
/// use ribbon_mesh::dimensions::diameter_px;
///
/// let points = [DVec3::new(-10.0, 0.0, 5.0), DVec3::new(30.0, 20.0, -5.0)];
/// assert_eq!(diameter_px(&points), 40.0);
/// assert_eq!(diameter_px(&[]), 0.0);
/// ```
pub fn diameter_px(vertices: &[DVec3]) -> f64 {
    let Some((first, rest)) = vertices.split_first() else {
        return 0.0;
    };

    let (min, max) = rest.iter().fold((first.truncate(), first.truncate()), |(min, max), v| {
        (min.min(v.truncate()), max.max(v.truncate()))
    });

    (max - min).max_element()
}

/// Factor mapping `diameter_px` onto `target_mm`.
///
/// Falls back to 1 when the diameter is 0, so an empty mesh exports
/// unscaled.
///
/// ```rust
/// use ribbon_mesh::dimensions::export_scale;
///
/// assert_eq!(export_scale(45.0, 90.0), 0.5);
/// assert_eq!(export_scale(45.0, 0.0), 1.0);
/// ```
pub fn export_scale(target_mm: f64, diameter_px: f64) -> f64 {
    if diameter_px == 0.0 {
        1.0
    } else {
        target_mm / diameter_px
    }
}
