//! # Mesh Session
//!
//! Owns the live parameters and the mesh built from them for an interactive
//! editor. Parameter edits only mark the session dirty; the host calls
//! [`MeshSession::rebuild_if_dirty`] once per frame, which builds a complete
//! new mesh and swaps it in. Readers holding the previous [`Arc<Mesh>`] keep
//! seeing a consistent mesh.

use crate::dimensions::{diameter_px, export_scale};
use crate::from_params::{build_mesh_with_report, BuildReport};
use crate::mesh::Mesh;
use crate::params::{random_seed, ShapeParams};
use rand::Rng;
use std::sync::Arc;
use tracing::debug;

/// Live parameters plus the mesh last built from them.
#[derive(Debug, Clone)]
pub struct MeshSession {
    params: ShapeParams,
    mesh: Arc<Mesh>,
    report: BuildReport,
    dirty: bool,
}

impl MeshSession {
    /// Creates a session with an empty mesh, pending its first build.
    pub fn new(params: ShapeParams) -> Self {
        Self {
            params,
            mesh: Arc::new(Mesh::new()),
            report: BuildReport::default(),
            dirty: true,
        }
    }

    /// Current parameters.
    pub fn params(&self) -> &ShapeParams {
        &self.params
    }

    /// Replaces the parameters and schedules a rebuild.
    pub fn set_params(&mut self, params: ShapeParams) {
        self.params = params;
        self.dirty = true;
    }

    /// Edits the parameters in place and schedules a rebuild.
    ///
    /// ```rust
    /// use ribbon_mesh::{MeshSession, ShapeParams};
    ///
    /// let mut session = MeshSession::new(ShapeParams { layers: 1, ..Default::default() });
    /// session.rebuild_if_dirty();
    /// session.update_params(|p| p.lobes = 3);
    /// assert!(session.is_dirty());
    /// assert!(session.rebuild_if_dirty());
    /// assert_eq!(session.params().lobes, 3);
    /// ```
    pub fn update_params(&mut self, edit: impl FnOnce(&mut ShapeParams)) {
        edit(&mut self.params);
        self.dirty = true;
    }

    /// Schedules a rebuild without changing parameters.
    pub fn request_rebuild(&mut self) {
        self.dirty = true;
    }

    /// Picks a new seed in `[0, RANDOM_SEED_BOUND)` and schedules a rebuild.
    pub fn randomize_seed<R: Rng + ?Sized>(&mut self, rng: &mut R) -> i64 {
        let seed = random_seed(rng);
        self.update_params(|p| p.seed = seed);
        seed
    }

    /// True when the installed mesh is stale.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Rebuilds when stale. Returns whether a build happened.
    pub fn rebuild_if_dirty(&mut self) -> bool {
        if !self.dirty {
            return false;
        }
        self.rebuild();
        true
    }

    /// Builds from the current parameters and installs the result.
    pub fn rebuild(&mut self) {
        let (mesh, report) = build_mesh_with_report(&self.params);
        debug!(triangles = mesh.triangle_count(), "session mesh replaced");
        self.mesh = Arc::new(mesh);
        self.report = report;
        self.dirty = false;
    }

    /// The installed mesh.
    pub fn mesh(&self) -> Arc<Mesh> {
        Arc::clone(&self.mesh)
    }

    /// Diagnostics of the installed mesh's build.
    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    /// Planar diameter of the installed mesh.
    pub fn diameter_px(&self) -> f64 {
        diameter_px(self.mesh.vertices())
    }

    /// Export scale of the installed mesh for the current target diameter.
    pub fn export_scale(&self) -> f64 {
        export_scale(self.params.target_diam_mm, self.diameter_px())
    }
}

impl Default for MeshSession {
    fn default() -> Self {
        Self::new(ShapeParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use config::constants::RANDOM_SEED_BOUND;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small() -> ShapeParams {
        ShapeParams {
            layers: 2,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_session_is_dirty_and_empty() {
        let session = MeshSession::new(small());
        assert!(session.is_dirty());
        assert!(session.mesh().is_empty());
        assert_eq!(session.export_scale(), 1.0);
    }

    #[test]
    fn test_rebuild_only_when_dirty() {
        let mut session = MeshSession::new(small());
        assert!(session.rebuild_if_dirty());
        assert!(!session.is_dirty());
        assert!(!session.rebuild_if_dirty());

        session.request_rebuild();
        assert!(session.rebuild_if_dirty());
    }

    #[test]
    fn test_previous_mesh_survives_swap() {
        let mut session = MeshSession::new(small());
        session.rebuild_if_dirty();
        let before = session.mesh();
        let snapshot = (*before).clone();

        session.set_params(ShapeParams {
            layers: 4,
            ..Default::default()
        });
        session.rebuild_if_dirty();

        assert_eq!(*before, snapshot);
        assert!(!Arc::ptr_eq(&before, &session.mesh()));
        assert!(session.mesh().triangle_count() > before.triangle_count());
        assert_eq!(session.report().layers.len(), 4);
    }

    #[test]
    fn test_randomize_seed_in_range() {
        let mut session = MeshSession::new(small());
        session.rebuild_if_dirty();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let seed = session.randomize_seed(&mut rng);
            assert!((0..RANDOM_SEED_BOUND).contains(&seed));
            assert_eq!(session.params().seed, seed);
            assert!(session.is_dirty());
        }
    }

    #[test]
    fn test_export_scale_hits_target() {
        let mut session = MeshSession::new(small());
        session.rebuild_if_dirty();
        let diameter = session.diameter_px();
        assert!(diameter > 0.0);
        assert_relative_eq!(
            diameter * session.export_scale(),
            session.params().target_diam_mm,
            max_relative = 1e-12
        );
    }
}
