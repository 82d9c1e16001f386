//! # Silhouette Extraction
//!
//! Builds an outline-only mesh from a triangle mesh.
//!
//! An edge belongs to the silhouette when it is a boundary edge (one adjacent
//! triangle) or when its adjacent triangles disagree on facing relative to the
//! view direction. The result holds line segments only.

use std::collections::BTreeMap;

use glam::DVec3;

use crate::mesh::Mesh;

/// Extracts the outline of `mesh` as seen along `direction`.
///
/// Vertices are re-indexed so the outline carries only the vertices its
/// segments use. Display attributes are not copied.
///
/// # Example
///
/// ```rust
/// use neuro_mesh::{ops::silhouette, Mesh};
/// use glam::DVec3;
///
/// let tri = Mesh::from_triangles(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![[0, 1, 2]]);
/// let outline = silhouette(&tri, DVec3::Z);
/// assert_eq!(outline.line_count(), 3);
/// assert_eq!(outline.triangle_count(), 0);
/// ```
pub fn silhouette(mesh: &Mesh, direction: DVec3) -> Mesh {
    let vertices = mesh.vertices();

    // Edge (low, high) -> facing of each adjacent triangle
    let mut edges: BTreeMap<(u32, u32), Vec<bool>> = BTreeMap::new();
    for tri in mesh.triangles() {
        let [a, b, c] = tri.map(|i| vertices[i as usize]);
        let front = (b - a).cross(c - a).dot(direction) > 0.0;

        for (i, j) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            edges.entry((i.min(j), i.max(j))).or_default().push(front);
        }
    }

    let mut outline = Mesh::new();
    let mut remap: BTreeMap<u32, u32> = BTreeMap::new();

    for ((i, j), facing) in &edges {
        let boundary = facing.len() == 1;
        let fold = facing.iter().any(|f| *f != facing[0]);
        if !(boundary || fold) {
            continue;
        }
        let a = *remap
            .entry(*i)
            .or_insert_with(|| outline.add_vertex(vertices[*i as usize]));
        let b = *remap
            .entry(*j)
            .or_insert_with(|| outline.add_vertex(vertices[*j as usize]));
        outline.add_line(a, b);
    }

    outline
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::create_sphere;

    /// Axis-aligned closed box as 12 triangles.
    fn closed_box() -> Mesh {
        let mut mesh = Mesh::new();
        crate::primitives::push_box(&mut mesh, DVec3::ZERO, DVec3::ONE);
        mesh
    }

    #[test]
    fn test_closed_box_outline_along_z() {
        let outline = silhouette(&closed_box(), DVec3::Z);
        // Side faces are edge-on and count as back-facing, so the fold is the
        // rim of the top face.
        assert_eq!(outline.line_count(), 4);
        assert_eq!(outline.triangle_count(), 0);
        assert!(outline.validate());
        for v in outline.vertices() {
            assert_eq!(v.z, 1.0);
        }
    }

    #[test]
    fn test_flat_quad_keeps_only_boundary() {
        let quad = Mesh::from_triangles(
            vec![
                DVec3::ZERO,
                DVec3::X,
                DVec3::new(1.0, 1.0, 0.0),
                DVec3::Y,
            ],
            vec![[0, 1, 2], [0, 2, 3]],
        );
        let outline = silhouette(&quad, DVec3::Z);
        // Shared diagonal is interior
        assert_eq!(outline.line_count(), 4);
        assert_eq!(outline.vertex_count(), 4);
    }

    #[test]
    fn test_sphere_outline_is_nonempty() {
        let sphere = create_sphere(DVec3::ZERO, 10.0, 12).unwrap();
        let outline = silhouette(&sphere, DVec3::Z);
        assert!(outline.line_count() > 0);
        assert!(outline.vertex_count() < sphere.vertex_count());
    }

    #[test]
    fn test_point_cloud_has_no_outline() {
        let cloud = Mesh::from_points(vec![DVec3::ZERO, DVec3::ONE]);
        assert!(silhouette(&cloud, DVec3::Z).is_empty());
    }
}
