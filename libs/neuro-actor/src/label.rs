//! # Label Synthesis
//!
//! Builds a text glyph anchored to each actor's topmost vertex, plus an
//! optional sphere marking the anchor on the mesh.
//!
//! ## Placement
//!
//! ```text
//! topmost vertex (min y) + offset → negate z → hemisphere correction
//!     → text at -point, rotated 180° about x then y
//!     → marker at closest mesh point, z negated
//! ```
//!
//! Label offsets are given in text-layout axes and remapped onto mesh axes as
//! `(-yoffset, -zoffset, xoffset)`, then biased by
//! [`LABEL_POSITION_BIAS`](config::constants::LABEL_POSITION_BIAS).

use config::constants::{
    label_offset, ANCHOR_SPHERE_RESOLUTION, LABEL_DEFAULT_COLOR, LABEL_DEFAULT_RADIUS,
    LABEL_DEFAULT_SIZE, LABEL_DEFAULT_XOFFSET, LABEL_DEFAULT_YOFFSET, LABEL_DEFAULT_ZOFFSET,
    LABEL_TEXT_DEPTH,
};
use glam::DVec3;
use neuro_mesh::primitives::{create_sphere, create_text};
use neuro_mesh::{Axis, Color, Mesh};
use neuro_space::{Atlas, Hemisphere};
use serde::Deserialize;
use tracing::{debug, trace};

use crate::error::{ActorError, ActorResult};
use crate::geometry::Geometry;

/// Label appearance and placement options.
///
/// Unknown keys are rejected when deserializing.
///
/// # Example
///
/// ```rust
/// use neuro_actor::LabelConfig;
///
/// let config = LabelConfig { radius: None, ..Default::default() };
/// assert_eq!(config.size, 300.0);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelConfig {
    /// Text height
    pub size: f64,
    /// Text and marker color; dark gray when unset
    pub color: Option<Color>,
    /// Anchor marker radius; `None` or non-positive hides the marker
    pub radius: Option<f64>,
    /// Horizontal shift in text-layout axes
    pub xoffset: f64,
    /// Vertical shift in text-layout axes
    pub yoffset: f64,
    /// Depth shift in text-layout axes
    pub zoffset: f64,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            size: LABEL_DEFAULT_SIZE,
            color: None,
            radius: Some(LABEL_DEFAULT_RADIUS),
            xoffset: LABEL_DEFAULT_XOFFSET,
            yoffset: LABEL_DEFAULT_YOFFSET,
            zoffset: LABEL_DEFAULT_ZOFFSET,
        }
    }
}

impl LabelConfig {
    /// Marker radius, if a marker should be drawn.
    pub fn marker_radius(&self) -> Option<f64> {
        self.radius.filter(|r| *r > 0.0)
    }
}

/// Role of a synthesized label geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelPart {
    /// Flat text glyph
    Text,
    /// Sphere marking the given anchor point on the source mesh
    Anchor(DVec3),
}

/// One geometry produced by label synthesis.
#[derive(Debug, Clone)]
pub struct LabelGeometry {
    pub part: LabelPart,
    pub mesh: Mesh,
}

/// Synthesizes label geometry for each `(actor, label)` pair.
///
/// Placement starts from [`Geometry::anchor_vertices`]; the marker snaps to
/// [`Geometry::closest_point`].
///
/// Returns a flat sequence in pair order: the text glyph of each pair,
/// followed by its anchor marker when [`LabelConfig::marker_radius`] is set.
///
/// # Errors
///
/// - [`ActorError::InvalidLabelInput`] when `actors` and `labels` differ in
///   length, an actor has no vertices, or an actor's triangles or lines index
///   past its vertices. Checked before any geometry is built.
/// - [`ActorError::Mesh`] when the text or marker primitive rejects the
///   configuration (e.g. a non-positive size).
pub fn make_actor_label(
    atlas: &dyn Atlas,
    actors: &[&dyn Geometry],
    labels: &[&str],
    config: &LabelConfig,
) -> ActorResult<Vec<LabelGeometry>> {
    if actors.len() != labels.len() {
        return Err(ActorError::invalid_label_input(format!(
            "{} actors but {} labels",
            actors.len(),
            labels.len()
        )));
    }
    if let Some(index) = actors.iter().position(|a| a.anchor_vertices().is_empty()) {
        return Err(ActorError::invalid_label_input(format!(
            "actor {} has no mesh geometry",
            index
        )));
    }
    if let Some(index) = actors.iter().position(|a| !a.indices_in_bounds()) {
        return Err(ActorError::invalid_label_input(format!(
            "actor {} has connectivity indices past its vertex count",
            index
        )));
    }

    let offset = DVec3::from_array(label_offset(config.xoffset, config.yoffset, config.zoffset));
    let mut geometries = Vec::with_capacity(actors.len() * 2);

    for (actor, label) in actors.iter().zip(labels) {
        let color = config
            .color
            .unwrap_or_else(|| Color::from(LABEL_DEFAULT_COLOR));

        let mut point = topmost_vertex(actor.anchor_vertices()) + offset;
        point.z = -point.z;

        match atlas.hemisphere_from_coords(point) {
            Ok(Hemisphere::Left) => {
                point = atlas.mirror_point_across_hemispheres(point);
                trace!(label, ?point, "label mirrored into right hemisphere");
            }
            Ok(Hemisphere::Right) => {}
            Err(err) => debug!(label, %err, "hemisphere lookup failed, keeping label position"),
        }

        let mut text = create_text(label, -point, config.size, LABEL_TEXT_DEPTH)?;
        text.set_color(color);
        text.rotate(Axis::X, 180.0);
        text.rotate(Axis::Y, 180.0);
        geometries.push(LabelGeometry {
            part: LabelPart::Text,
            mesh: text,
        });

        if let Some(radius) = config.marker_radius() {
            let mut anchor = actor.closest_point(point).ok_or_else(|| {
                ActorError::invalid_label_input(format!("no anchor on mesh for '{}'", label))
            })?;
            anchor.z = -anchor.z;

            let mut marker = create_sphere(anchor, radius, ANCHOR_SPHERE_RESOLUTION)?;
            marker.set_color(color);
            marker.compute_normals();
            geometries.push(LabelGeometry {
                part: LabelPart::Anchor(anchor),
                mesh: marker,
            });
        }
    }

    Ok(geometries)
}

/// Vertex with the smallest second coordinate, first on ties.
fn topmost_vertex(vertices: &[DVec3]) -> DVec3 {
    vertices
        .iter()
        .copied()
        .reduce(|best, v| if v.y < best.y { v } else { best })
        .unwrap_or(DVec3::ZERO)
}
