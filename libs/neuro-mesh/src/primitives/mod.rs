//! # Primitives
//!
//! Mesh generation for the primitives actors are built from (anchor spheres,
//! flat text glyphs).

pub mod sphere;
pub mod text;

pub use sphere::create_sphere;
pub use text::create_text;

use glam::DVec3;

use crate::mesh::Mesh;

/// Appends an axis-aligned box spanning `min..max` with outward winding.
pub fn push_box(mesh: &mut Mesh, min: DVec3, max: DVec3) {
    let corners = [
        DVec3::new(min.x, min.y, min.z),
        DVec3::new(max.x, min.y, min.z),
        DVec3::new(max.x, max.y, min.z),
        DVec3::new(min.x, max.y, min.z),
        DVec3::new(min.x, min.y, max.z),
        DVec3::new(max.x, min.y, max.z),
        DVec3::new(max.x, max.y, max.z),
        DVec3::new(min.x, max.y, max.z),
    ];
    let base = mesh.vertex_count() as u32;
    for corner in corners {
        mesh.add_vertex(corner);
    }

    const FACES: [[u32; 3]; 12] = [
        [0, 2, 1], [0, 3, 2], // -z
        [4, 5, 6], [4, 6, 7], // +z
        [0, 1, 5], [0, 5, 4], // -y
        [3, 7, 6], [3, 6, 2], // +y
        [0, 4, 7], [0, 7, 3], // -x
        [1, 2, 6], [1, 6, 5], // +x
    ];
    for [a, b, c] in FACES {
        mesh.add_triangle(base + a, base + b, base + c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_is_valid_and_outward() {
        let mut mesh = Mesh::new();
        push_box(&mut mesh, DVec3::ZERO, DVec3::new(2.0, 3.0, 4.0));
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 12);
        assert!(mesh.validate());

        // Every face normal points away from the box center
        let center = mesh.center_of_mass();
        for tri in mesh.triangles() {
            let [a, b, c] = tri.map(|i| mesh.vertex(i));
            let normal = (b - a).cross(c - a);
            assert!(normal.dot((a + b + c) / 3.0 - center) > 0.0);
        }
    }
}
