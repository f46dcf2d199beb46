//! # Mesh Errors
//!
//! Error types for ribbon mesh generation and export.
//!
//! The geometry core is total: [`crate::build_mesh`] never returns an error.
//! These errors surface from the individual building blocks (a degenerate
//! contour handed to the extruder, parameters rejected at a boundary, a
//! failed write) and are recovered or reported by their callers.

use thiserror::Error;

/// Errors that can occur during mesh generation and export.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Invalid mesh topology
    #[error("Invalid topology: {message}")]
    InvalidTopology {
        /// Description of the topological defect.
        message: String,
    },

    /// Degenerate geometry
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry {
        /// Description of the degenerate input.
        message: String,
    },

    /// Mesh validation failed
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the failed check.
        message: String,
    },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices {
        /// Vertex count the operation would have produced.
        count: usize,
        /// Maximum addressable vertex count.
        max: usize,
    },

    /// A shape parameter was rejected at the configuration boundary.
    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Parameter name, as spelled in presets.
        name: &'static str,
        /// The offending value.
        value: String,
        /// Why the value is rejected.
        reason: &'static str,
    },

    /// Writing an export failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a validation failed error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::degenerate("contour has 2 points");
        assert!(err.to_string().contains("Degenerate geometry"));
        assert!(err.to_string().contains("2 points"));

        let err = MeshError::invalid_param("STEP_A", -0.1, "must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid parameter: STEP_A = -0.1 (must be positive)"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
