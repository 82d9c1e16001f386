//! # Mesh Errors
//!
//! Error types for mesh construction and geometry operations.

use thiserror::Error;

/// Errors that can occur in the geometry facade.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Degenerate geometry or parameters (non-positive sizes, too few segments)
    #[error("Degenerate geometry: {message}")]
    Degenerate { message: String },

    /// Color string that is neither a known name nor `#rrggbb` hex
    #[error("Invalid color: '{value}'")]
    InvalidColor { value: String },

    /// Axis name other than x, y or z
    #[error("Invalid axis: '{axis}'")]
    InvalidAxis { axis: String },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::Degenerate {
            message: message.into(),
        }
    }

    /// Creates an invalid color error.
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }

    /// Creates an invalid axis error.
    pub fn invalid_axis(axis: impl Into<String>) -> Self {
        Self::InvalidAxis { axis: axis.into() }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::degenerate("radius must be positive");
        assert!(err.to_string().contains("radius must be positive"));

        let err = MeshError::invalid_color("#zz0000");
        assert!(err.to_string().contains("#zz0000"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
