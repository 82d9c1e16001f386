//! # Geometry Capability
//!
//! The read-only mesh surface shared by raw meshes and actors, so an actor
//! can stand in wherever a mesh is queried.

use glam::DVec3;
use neuro_mesh::{Color, Mesh};

/// Mesh queries available on both [`Mesh`] and [`crate::Actor`].
pub trait Geometry {
    /// Vertex positions.
    fn vertices(&self) -> &[DVec3];

    /// Number of vertices.
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Vertices label placement starts from.
    ///
    /// Defaults to [`Geometry::vertices`]. Actors return their primary mesh
    /// even when a display mesh is attached.
    fn anchor_vertices(&self) -> &[DVec3] {
        self.vertices()
    }

    /// True when all connectivity indices refer to existing vertices.
    fn indices_in_bounds(&self) -> bool;

    /// Unweighted mean of the vertices.
    fn center_of_mass(&self) -> DVec3;

    /// Bounds as `[xmin, xmax, ymin, ymax, zmin, zmax]`.
    fn bounds(&self) -> [f64; 6];

    /// Point on the geometry closest to `query`, `None` when empty.
    fn closest_point(&self, query: DVec3) -> Option<DVec3>;

    /// Display color.
    fn color(&self) -> Color;

    /// Display opacity.
    fn alpha(&self) -> f32;
}

impl Geometry for Mesh {
    fn vertices(&self) -> &[DVec3] {
        Mesh::vertices(self)
    }

    fn indices_in_bounds(&self) -> bool {
        Mesh::indices_in_bounds(self)
    }

    fn center_of_mass(&self) -> DVec3 {
        Mesh::center_of_mass(self)
    }

    fn bounds(&self) -> [f64; 6] {
        Mesh::bounds(self)
    }

    fn closest_point(&self, query: DVec3) -> Option<DVec3> {
        Mesh::closest_point(self, query)
    }

    fn color(&self) -> Color {
        Mesh::color(self)
    }

    fn alpha(&self) -> f32 {
        Mesh::alpha(self)
    }
}
