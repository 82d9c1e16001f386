//! # Sphere Primitive
//!
//! Generates a UV sphere, used for label anchor markers.

use std::f64::consts::PI;

use config::constants::MIN_SPHERE_RESOLUTION;
use glam::DVec3;

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;

/// Creates a sphere mesh centered on `center`.
///
/// # Arguments
///
/// * `center` - Sphere center
/// * `radius` - Sphere radius
/// * `resolution` - Number of latitude bands; longitude uses twice as many
///
/// # Algorithm
///
/// - One vertex at each pole
/// - `resolution - 1` rings at polar angle `phi = PI * i / resolution`
/// - Fans at the poles, quads between rings
///
/// # Example
///
/// ```rust
/// use neuro_mesh::primitives::create_sphere;
/// use glam::DVec3;
///
/// let mesh = create_sphere(DVec3::ZERO, 5.0, 8).unwrap();
/// assert_eq!(mesh.vertex_count(), 2 + 7 * 16);
/// ```
pub fn create_sphere(center: DVec3, radius: f64, resolution: u32) -> MeshResult<Mesh> {
    if !(radius > 0.0) {
        return Err(MeshError::degenerate(format!(
            "Sphere radius must be positive: {}",
            radius
        )));
    }

    if resolution < MIN_SPHERE_RESOLUTION {
        return Err(MeshError::degenerate(format!(
            "Sphere resolution must be at least {}: {}",
            MIN_SPHERE_RESOLUTION, resolution
        )));
    }

    let segments = 2 * resolution;
    let ring_count = resolution - 1;
    let mut mesh = Mesh::with_capacity(
        (2 + ring_count * segments) as usize,
        (2 * segments * ring_count) as usize,
    );

    let north = mesh.add_vertex(center + DVec3::new(0.0, 0.0, radius));

    let mut rings: Vec<Vec<u32>> = Vec::with_capacity(ring_count as usize);
    for i in 1..resolution {
        let phi = PI * i as f64 / resolution as f64;
        let (sin_phi, cos_phi) = phi.sin_cos();

        let ring = (0..segments)
            .map(|j| {
                let theta = 2.0 * PI * j as f64 / segments as f64;
                let (sin_theta, cos_theta) = theta.sin_cos();
                mesh.add_vertex(
                    center
                        + radius * DVec3::new(sin_phi * cos_theta, sin_phi * sin_theta, cos_phi),
                )
            })
            .collect();
        rings.push(ring);
    }

    let south = mesh.add_vertex(center - DVec3::new(0.0, 0.0, radius));

    let next = |j: u32| ((j + 1) % segments) as usize;

    // North cap
    let first = &rings[0];
    for j in 0..segments {
        mesh.add_triangle(north, first[j as usize], first[next(j)]);
    }

    // Bands between adjacent rings
    for pair in rings.windows(2) {
        let (upper, lower) = (&pair[0], &pair[1]);
        for j in 0..segments {
            let (a0, a1) = (upper[j as usize], upper[next(j)]);
            let (b0, b1) = (lower[j as usize], lower[next(j)]);
            mesh.add_triangle(a0, b0, b1);
            mesh.add_triangle(a0, b1, a1);
        }
    }

    // South cap
    let last = &rings[rings.len() - 1];
    for j in 0..segments {
        mesh.add_triangle(south, last[next(j)], last[j as usize]);
    }

    Ok(mesh)
}
