//! # Mesh Operations
//!
//! Geometric queries and derived geometry on meshes.

pub mod closest_point;
pub mod silhouette;

pub use closest_point::closest_point;
pub use silhouette::silhouette;
