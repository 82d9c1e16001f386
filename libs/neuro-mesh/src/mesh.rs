//! # Mesh Data Structure
//!
//! Core mesh representation with vertices, triangles, outline segments and
//! display attributes (color, opacity, line width).

use config::constants::{DEFAULT_ALPHA, DEFAULT_COLOR, DEFAULT_VIEW_DIRECTION, DEGENERATE_AREA_EPSILON};
use glam::{DMat4, DVec3};

use crate::axis::Axis;
use crate::color::Color;
use crate::error::{MeshError, MeshResult};
use crate::ops;

/// A triangle mesh with optional line segments and display attributes.
///
/// All geometry calculations use f64. Color and opacity are only stored when
/// set explicitly; the getters fall back to the engine defaults.
///
/// # Example
///
/// ```rust
/// use neuro_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.vertex_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Line segment indices (outlines, silhouettes)
    lines: Vec<[u32; 2]>,
    /// Optional vertex normals
    normals: Option<Vec<DVec3>>,
    /// Explicit color override
    color: Option<Color>,
    /// Explicit opacity override
    alpha: Option<f32>,
    /// Width used when drawing line segments
    line_width: Option<f64>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            ..Self::default()
        }
    }

    /// Creates a mesh from vertex positions and triangle indices.
    ///
    /// Indices are not checked here; see [`Mesh::indices_in_bounds`].
    pub fn from_triangles(vertices: Vec<DVec3>, triangles: Vec<[u32; 3]>) -> Self {
        Self {
            vertices,
            triangles,
            ..Self::default()
        }
    }

    /// Creates a point-only mesh.
    pub fn from_points(points: Vec<DVec3>) -> Self {
        Self::from_triangles(points, Vec::new())
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the number of line segments.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices. Indices are not checked.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Adds a line segment by vertex indices.
    pub fn add_line(&mut self, v0: u32, v1: u32) {
        self.lines.push([v0, v1]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns a reference to the line segments.
    #[inline]
    pub fn lines(&self) -> &[[u32; 2]] {
        &self.lines
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    // =========================================================================
    // DISPLAY ATTRIBUTES
    // =========================================================================

    /// Sets a uniform color.
    pub fn set_color(&mut self, color: Color) {
        self.color = Some(color);
    }

    /// Returns the mesh color, or the engine default when none was set.
    pub fn color(&self) -> Color {
        self.color.unwrap_or_else(|| Color::from(DEFAULT_COLOR))
    }

    /// Returns the color only if one was set explicitly.
    pub fn explicit_color(&self) -> Option<Color> {
        self.color
    }

    /// Sets the opacity, clamped into `[0.0, 1.0]`.
    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = Some(alpha.clamp(0.0, 1.0));
    }

    /// Returns the opacity, or fully opaque when none was set.
    pub fn alpha(&self) -> f32 {
        self.alpha.unwrap_or(DEFAULT_ALPHA)
    }

    /// Sets the width used to draw line segments.
    pub fn set_line_width(&mut self, width: f64) -> MeshResult<()> {
        if !(width > 0.0) {
            return Err(MeshError::degenerate(format!(
                "Line width must be positive: {}",
                width
            )));
        }
        self.line_width = Some(width);
        Ok(())
    }

    /// Returns the line width, if set.
    pub fn line_width(&self) -> Option<f64> {
        self.line_width
    }

    // =========================================================================
    // NORMALS
    // =========================================================================

    /// Returns the vertex normals.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Computes and sets area-weighted vertex normals.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for tri in &self.triangles {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            let normal = (v1 - v0).cross(v2 - v0);

            normals[tri[0] as usize] += normal;
            normals[tri[1] as usize] += normal;
            normals[tri[2] as usize] += normal;
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        self.normals = Some(normals);
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Bounds as `[xmin, xmax, ymin, ymax, zmin, zmax]`.
    pub fn bounds(&self) -> [f64; 6] {
        let (min, max) = self.bounding_box();
        [min.x, max.x, min.y, max.y, min.z, max.z]
    }

    /// Unweighted mean of the vertex positions.
    ///
    /// Returns the origin for an empty mesh.
    pub fn center_of_mass(&self) -> DVec3 {
        if self.vertices.is_empty() {
            return DVec3::ZERO;
        }
        let sum: DVec3 = self.vertices.iter().copied().sum();
        sum / self.vertices.len() as f64
    }

    /// Point on the mesh closest to `query`.
    ///
    /// Searches triangles when present, then line segments, then bare
    /// vertices. Returns `None` for an empty mesh.
    pub fn closest_point(&self, query: DVec3) -> Option<DVec3> {
        ops::closest_point(self, query)
    }

    /// Outline of the mesh as seen along the default view direction.
    pub fn silhouette(&self) -> Mesh {
        self.silhouette_along(DVec3::from_array(DEFAULT_VIEW_DIRECTION))
    }

    /// Outline of the mesh as seen along `direction`.
    pub fn silhouette_along(&self, direction: DVec3) -> Mesh {
        ops::silhouette(self, direction)
    }

    // =========================================================================
    // TRANSFORMS
    // =========================================================================

    /// Transforms all vertices by a 4x4 matrix.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }

        // Normals use the inverse transpose
        if let Some(normals) = &mut self.normals {
            let normal_matrix = matrix.inverse().transpose();
            for n in normals {
                *n = normal_matrix.transform_vector3(*n).normalize_or_zero();
            }
        }
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Rotates the mesh about the world origin.
    ///
    /// # Example
    ///
    /// ```rust
    /// use neuro_mesh::{Axis, Mesh};
    /// use glam::DVec3;
    ///
    /// let mut mesh = Mesh::from_points(vec![DVec3::new(0.0, 1.0, 0.0)]);
    /// mesh.rotate(Axis::X, 180.0);
    /// assert!((mesh.vertex(0).y + 1.0).abs() < 1e-9);
    /// ```
    pub fn rotate(&mut self, axis: Axis, degrees: f64) {
        let matrix = DMat4::from_axis_angle(axis.unit(), degrees.to_radians());
        self.transform(&matrix);
    }

    /// Reflects the mesh across the plane normal to `axis` through `origin`.
    ///
    /// Triangle winding is flipped so faces keep pointing outward.
    pub fn mirror(&mut self, axis: Axis, origin: DVec3) {
        let i = axis.index();
        let pivot = 2.0 * origin[i];

        for v in &mut self.vertices {
            v[i] = pivot - v[i];
        }
        for tri in &mut self.triangles {
            tri.swap(1, 2);
        }
        if let Some(normals) = &mut self.normals {
            for n in normals {
                n[i] = -n[i];
            }
        }
    }

    /// True when every triangle and line index refers to an existing vertex.
    ///
    /// Queries such as [`Mesh::closest_point`] index vertices directly and
    /// expect this to hold.
    pub fn indices_in_bounds(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;
        self.lines.iter().flatten().all(|&i| i < vertex_count)
            && self.triangles.iter().flatten().all(|&i| i < vertex_count)
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle and line indices are valid
    /// - No degenerate triangles (repeated index or zero area)
    pub fn validate(&self) -> bool {
        if !self.indices_in_bounds() {
            return false;
        }

        self.triangles.iter().all(|tri| {
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            (v1 - v0).cross(v2 - v0).length() > DEGENERATE_AREA_EPSILON
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_triangle() -> Mesh {
        Mesh::from_triangles(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![[0, 1, 2]])
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert_eq!(mesh.line_count(), 0);
    }

    #[test]
    fn test_color_defaults() {
        let mut mesh = unit_triangle();
        assert_eq!(mesh.explicit_color(), None);
        assert_eq!(mesh.color(), Color::from(DEFAULT_COLOR));
        assert_eq!(mesh.alpha(), DEFAULT_ALPHA);

        mesh.set_color(Color::new(1.0, 0.0, 0.0));
        mesh.set_alpha(1.5);
        assert_eq!(mesh.color().to_string(), "red");
        assert_eq!(mesh.alpha(), 1.0);
    }

    #[test]
    fn test_line_width_must_be_positive() {
        let mut mesh = Mesh::new();
        assert!(mesh.set_line_width(0.0).is_err());
        assert!(mesh.set_line_width(f64::NAN).is_err());
        mesh.set_line_width(2.5).unwrap();
        assert_eq!(mesh.line_width(), Some(2.5));
    }

    #[test]
    fn test_bounds_and_center() {
        let mesh = Mesh::from_points(vec![
            DVec3::new(-1.0, -2.0, -3.0),
            DVec3::new(3.0, 6.0, 9.0),
        ]);
        assert_eq!(mesh.bounds(), [-1.0, 3.0, -2.0, 6.0, -3.0, 9.0]);
        assert_eq!(mesh.center_of_mass(), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_empty_center_is_origin() {
        assert_eq!(Mesh::new().center_of_mass(), DVec3::ZERO);
        assert_eq!(Mesh::new().bounds(), [0.0; 6]);
    }

    #[test]
    fn test_mirror_reflects_and_flips_winding() {
        let mut mesh = unit_triangle();
        mesh.mirror(Axis::X, DVec3::new(2.0, 0.0, 0.0));
        assert_eq!(mesh.vertex(1), DVec3::new(3.0, 0.0, 0.0));
        assert_eq!(mesh.vertex(0), DVec3::new(4.0, 0.0, 0.0));
        assert_eq!(mesh.triangles()[0], [0, 2, 1]);
        assert!(mesh.validate());
    }

    #[test]
    fn test_mirror_flips_normals() {
        let mut mesh = unit_triangle();
        mesh.compute_normals();
        mesh.mirror(Axis::Z, DVec3::ZERO);
        let normals = mesh.normals().unwrap();
        assert_relative_eq!(normals[0].z, -1.0);
    }

    #[test]
    fn test_rotate_half_turns() {
        let mut mesh = Mesh::from_points(vec![DVec3::new(1.0, 2.0, 3.0)]);
        mesh.rotate(Axis::X, 180.0);
        mesh.rotate(Axis::Y, 180.0);
        let v = mesh.vertex(0);
        assert_relative_eq!(v.x, -1.0, epsilon = 1e-9);
        assert_relative_eq!(v.y, -2.0, epsilon = 1e-9);
        assert_relative_eq!(v.z, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_compute_normals() {
        let mut mesh = unit_triangle();
        mesh.compute_normals();
        assert_eq!(mesh.normals().unwrap()[0], DVec3::Z);
    }

    #[test]
    fn test_validate_invalid_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_triangle(0, 1, 2);
        assert!(!mesh.validate());
        assert!(!mesh.indices_in_bounds());
    }

    #[test]
    fn test_indices_in_bounds_allows_degenerate() {
        let collinear = Mesh::from_triangles(
            vec![DVec3::ZERO, DVec3::X, DVec3::X * 2.0],
            vec![[0, 1, 2]],
        );
        assert!(collinear.indices_in_bounds());
        assert!(!collinear.validate());

        let mut lines = Mesh::from_points(vec![DVec3::ZERO]);
        lines.add_line(0, 3);
        assert!(!lines.indices_in_bounds());
    }
}
