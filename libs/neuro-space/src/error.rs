//! # Space Errors

use thiserror::Error;

/// Errors raised while resolving anatomical spaces and atlas coordinates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpaceError {
    /// Space code that is not three letters from distinct axis pairs
    #[error("Invalid anatomical space '{origin}': {message}")]
    InvalidSpace { origin: String, message: String },

    /// Axis name other than sagittal, vertical or frontal
    #[error("Unknown anatomical axis: '{name}'")]
    UnknownAxisName { name: String },

    /// Point outside the atlas volume
    #[error("Point {point:?} is outside the atlas")]
    OutOfBounds { point: [f64; 3] },

    /// Atlas with a zero-sized or non-positive dimension
    #[error("Invalid atlas: {message}")]
    InvalidAtlas { message: String },
}

impl SpaceError {
    /// Creates an invalid space error.
    pub fn invalid_space(origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSpace {
            origin: origin.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid atlas error.
    pub fn invalid_atlas(message: impl Into<String>) -> Self {
        Self::InvalidAtlas {
            message: message.into(),
        }
    }
}

/// Result type alias for space operations.
pub type SpaceResult<T> = Result<T, SpaceError>;
