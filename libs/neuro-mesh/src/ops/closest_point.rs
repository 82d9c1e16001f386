//! # Closest Point Query
//!
//! Finds the point on a mesh nearest to a query point.
//!
//! ## Algorithm
//!
//! Each triangle is tested with the Voronoi-region method (Ericson,
//! *Real-Time Collision Detection* §5.1.5). Triangles are scanned in parallel
//! with rayon; ties are broken on the lowest primitive index so the result is
//! deterministic.

use config::constants::approx_zero;
use glam::DVec3;
use rayon::prelude::*;

use crate::mesh::Mesh;

/// Returns the point on `mesh` closest to `query`.
///
/// Falls back to line segments when the mesh has no triangles, and to bare
/// vertices when it has neither. Returns `None` for an empty mesh.
///
/// # Example
///
/// ```rust
/// use neuro_mesh::{ops::closest_point, Mesh};
/// use glam::DVec3;
///
/// let mesh = Mesh::from_triangles(
///     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
///     vec![[0, 1, 2]],
/// );
/// let p = closest_point(&mesh, DVec3::new(0.25, 0.25, 5.0)).unwrap();
/// assert_eq!(p, DVec3::new(0.25, 0.25, 0.0));
/// ```
pub fn closest_point(mesh: &Mesh, query: DVec3) -> Option<DVec3> {
    let vertices = mesh.vertices();

    if mesh.triangle_count() > 0 {
        return nearest(mesh.triangles().par_iter().map(|tri| {
            closest_on_triangle(
                query,
                vertices[tri[0] as usize],
                vertices[tri[1] as usize],
                vertices[tri[2] as usize],
            )
        }), query);
    }

    if mesh.line_count() > 0 {
        return nearest(mesh.lines().par_iter().map(|line| {
            closest_on_segment(query, vertices[line[0] as usize], vertices[line[1] as usize])
        }), query);
    }

    nearest(vertices.par_iter().copied(), query)
}

/// Picks the candidate nearest to `query`, lowest index first on ties.
fn nearest<I>(candidates: I, query: DVec3) -> Option<DVec3>
where
    I: IndexedParallelIterator<Item = DVec3>,
{
    candidates
        .enumerate()
        .map(|(i, p)| (p.distance_squared(query), i, p))
        .min_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
        .map(|(_, _, p)| p)
}

/// Closest point to `p` on segment `ab`.
pub fn closest_on_segment(p: DVec3, a: DVec3, b: DVec3) -> DVec3 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if approx_zero(len_sq) {
        return a;
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

/// Closest point to `p` on triangle `abc`.
pub fn closest_on_triangle(p: DVec3, a: DVec3, b: DVec3, c: DVec3) -> DVec3 {
    let ab = b - a;
    let ac = c - a;

    // Vertex region A
    let ap = p - a;
    let d1 = ab.dot(ap);
    let d2 = ac.dot(ap);
    if d1 <= 0.0 && d2 <= 0.0 {
        return a;
    }

    // Vertex region B
    let bp = p - b;
    let d3 = ab.dot(bp);
    let d4 = ac.dot(bp);
    if d3 >= 0.0 && d4 <= d3 {
        return b;
    }

    // Edge region AB
    let vc = d1 * d4 - d3 * d2;
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        return a + ab * (d1 / (d1 - d3));
    }

    // Vertex region C
    let cp = p - c;
    let d5 = ab.dot(cp);
    let d6 = ac.dot(cp);
    if d6 >= 0.0 && d5 <= d6 {
        return c;
    }

    // Edge region AC
    let vb = d5 * d2 - d1 * d6;
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        return a + ac * (d2 / (d2 - d6));
    }

    // Edge region BC
    let va = d3 * d6 - d5 * d4;
    if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
        return b + (c - b) * ((d4 - d3) / ((d4 - d3) + (d5 - d6)));
    }

    // Face region
    let denom = va + vb + vc;
    if denom == 0.0 {
        // Collinear corners
        return [
            closest_on_segment(p, a, b),
            closest_on_segment(p, b, c),
            closest_on_segment(p, a, c),
        ]
        .into_iter()
        .min_by(|x, y| x.distance_squared(p).total_cmp(&y.distance_squared(p)))
        .unwrap_or(a);
    }
    a + ab * (vb / denom) + ac * (vc / denom)
}
