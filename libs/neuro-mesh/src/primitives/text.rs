//! # Flat Text Primitive
//!
//! Generates block geometry for a line of text: one thin box per visible
//! character, laid out left to right from the anchor position. Glyph outlines
//! are not rasterised; each box occupies the character's cell.

use config::constants::{GLYPH_ADVANCE_RATIO, GLYPH_WIDTH_RATIO};
use glam::DVec3;

use super::push_box;
use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;

/// Creates flat text geometry anchored at its bottom-left corner.
///
/// # Arguments
///
/// * `text` - Characters to lay out; whitespace advances without geometry
/// * `position` - Bottom-left corner of the first character cell
/// * `size` - Character height
/// * `depth` - Extrusion along +z, relative to `size`
///
/// # Example
///
/// ```rust
/// use neuro_mesh::primitives::create_text;
/// use glam::DVec3;
///
/// let mesh = create_text("CA1", DVec3::ZERO, 10.0, 0.1).unwrap();
/// assert_eq!(mesh.triangle_count(), 3 * 12);
/// ```
pub fn create_text(text: &str, position: DVec3, size: f64, depth: f64) -> MeshResult<Mesh> {
    if !(size > 0.0) {
        return Err(MeshError::degenerate(format!(
            "Text size must be positive: {}",
            size
        )));
    }
    if !(depth > 0.0) {
        return Err(MeshError::degenerate(format!(
            "Text depth must be positive: {}",
            depth
        )));
    }

    let width = GLYPH_WIDTH_RATIO * size;
    let advance = GLYPH_ADVANCE_RATIO * size;
    let cell = DVec3::new(width, size, depth * size);

    let mut mesh = Mesh::new();
    for (i, _) in text.chars().enumerate().filter(|(_, c)| !c.is_whitespace()) {
        let min = position + DVec3::new(i as f64 * advance, 0.0, 0.0);
        push_box(&mut mesh, min, min + cell);
    }

    Ok(mesh)
}
