//! # Actor Errors
//!
//! Error types for actor construction, delegation and derived-actor
//! synthesis.
//!
//! ## Error Policy
//!
//! - Caller contract violations fail at call time, before any mutation
//! - Atlas lookup misses during label placement are recovered locally and
//!   never surface here

use neuro_mesh::MeshError;
use thiserror::Error;

/// Errors that can occur in actor operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActorError {
    /// Attribute defined neither on the actor nor on its mesh
    #[error("Actor does not have attribute '{attribute}'")]
    AttributeNotFound { attribute: String },

    /// Mirror axis that is neither spatial nor anatomical
    #[error("Unsupported axis: '{axis}'")]
    UnsupportedAxis { axis: String },

    /// Label text/actor mismatch, or a source without geometry
    #[error("Invalid label input: {message}")]
    InvalidLabelInput { message: String },

    /// Silhouette requested before a configuration was attached
    #[error("No silhouette configuration for actor '{name}'")]
    MissingSilhouetteConfig { name: String },

    /// Error from the geometry engine
    #[error("Geometry error: {0}")]
    Mesh(#[from] MeshError),
}

impl ActorError {
    /// Creates an attribute-not-found error.
    pub fn attribute_not_found(attribute: impl Into<String>) -> Self {
        Self::AttributeNotFound {
            attribute: attribute.into(),
        }
    }

    /// Creates an unsupported axis error.
    pub fn unsupported_axis(axis: impl Into<String>) -> Self {
        Self::UnsupportedAxis { axis: axis.into() }
    }

    /// Creates an invalid label input error.
    pub fn invalid_label_input(message: impl Into<String>) -> Self {
        Self::InvalidLabelInput {
            message: message.into(),
        }
    }
}

/// Result type alias for actor operations.
pub type ActorResult<T> = Result<T, ActorError>;
