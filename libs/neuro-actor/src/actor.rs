//! # Actor
//!
//! The renderable entity of a scene: an owned mesh plus identity,
//! classification and the derived artifacts built from it (labels and a
//! silhouette).
//!
//! ## Derived artifacts
//!
//! Labels and silhouettes follow the same lifecycle:
//!
//! ```text
//! request_*()  →  Unbuilt  →  make_*()  →  Built
//!      ↑                                     │
//!      └──────────── request again ──────────┘
//! ```
//!
//! `make_*` on a `Built` artifact returns the stored children unchanged.

use config::constants::{DEFAULT_ACTOR_CLASS, DEFAULT_ACTOR_NAME, LABEL_CLASS, SILHOUETTE_CLASS};
use glam::DVec3;
use neuro_mesh::{Axis, Color, Mesh};
use neuro_space::{AnatomicalAxis, Atlas};
use tracing::debug;

use crate::error::{ActorError, ActorResult};
use crate::geometry::Geometry;
use crate::label::{make_actor_label, LabelConfig, LabelPart};
use crate::silhouette::{make_silhouette, SilhouetteConfig};

/// Build state of a derived artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildState {
    #[default]
    Unbuilt,
    Built,
}

impl BuildState {
    #[inline]
    pub fn is_built(self) -> bool {
        self == Self::Built
    }
}

/// Text and options of a pending label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelRequest {
    pub text: String,
    pub config: LabelConfig,
}

/// Optional construction parameters for [`Actor::with_params`].
///
/// # Example
///
/// ```rust
/// use neuro_actor::{Actor, ActorParams};
/// use neuro_mesh::Mesh;
///
/// let actor = Actor::with_params(
///     Mesh::new(),
///     ActorParams {
///         name: Some("hippocampus".into()),
///         color: Some("red".parse().unwrap()),
///         ..Default::default()
///     },
/// );
/// assert_eq!(actor.mesh().color().to_string(), "red");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ActorParams {
    pub name: Option<String>,
    pub br_class: Option<String>,
    pub is_text: bool,
    pub color: Option<Color>,
    pub alpha: Option<f32>,
}

/// Value returned by [`Actor::attribute`].
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Text(String),
    Flag(bool),
    Count(usize),
    Point(DVec3),
    Bounds([f64; 6]),
    Color(Color),
    Alpha(f32),
}

/// A mesh with identity, classification and derived artifacts.
#[derive(Debug, Clone)]
pub struct Actor {
    mesh: Mesh,
    /// Secondary representation preferred by mesh queries
    display_mesh: Option<Mesh>,
    name: String,
    br_class: String,
    is_text: bool,
    /// Set on label markers: the mesh point they mark
    anchor: Option<DVec3>,

    label_request: Option<LabelRequest>,
    label_state: BuildState,
    labels: Vec<Actor>,

    silhouette_config: Option<SilhouetteConfig>,
    silhouette_state: BuildState,
    silhouette: Option<Box<Actor>>,

    transformed: bool,
    added: bool,
}

impl Actor {
    /// Wraps a mesh with default name and class.
    pub fn new(mesh: Mesh) -> Self {
        Self::with_params(mesh, ActorParams::default())
    }

    /// Wraps a mesh, applying any color and opacity to it immediately.
    ///
    /// Empty names and classes fall back to the defaults.
    pub fn with_params(mut mesh: Mesh, params: ActorParams) -> Self {
        if let Some(color) = params.color {
            mesh.set_color(color);
        }
        if let Some(alpha) = params.alpha {
            mesh.set_alpha(alpha);
        }

        Self {
            mesh,
            display_mesh: None,
            name: non_empty_or(params.name, DEFAULT_ACTOR_NAME),
            br_class: non_empty_or(params.br_class, DEFAULT_ACTOR_CLASS),
            is_text: params.is_text,
            anchor: None,
            label_request: None,
            label_state: BuildState::Unbuilt,
            labels: Vec::new(),
            silhouette_config: None,
            silhouette_state: BuildState::Unbuilt,
            silhouette: None,
            transformed: false,
            added: false,
        }
    }

    /// Makes an actor from a mesh with the given name and class.
    pub fn make_actor(mesh: Mesh, name: impl Into<String>, br_class: impl Into<String>) -> Self {
        Self::with_params(
            mesh,
            ActorParams {
                name: Some(name.into()),
                br_class: Some(br_class.into()),
                ..Default::default()
            },
        )
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn br_class(&self) -> &str {
        &self.br_class
    }

    pub fn is_text(&self) -> bool {
        self.is_text
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn mesh_mut(&mut self) -> &mut Mesh {
        &mut self.mesh
    }

    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }

    pub fn display_mesh(&self) -> Option<&Mesh> {
        self.display_mesh.as_ref()
    }

    /// Attaches a secondary representation that mesh queries prefer.
    pub fn set_display_mesh(&mut self, mesh: Mesh) {
        self.display_mesh = Some(mesh);
    }

    /// Anchor point marked by this actor, for label markers.
    pub fn anchor(&self) -> Option<DVec3> {
        self.anchor
    }

    pub fn labels(&self) -> &[Actor] {
        &self.labels
    }

    pub fn silhouette(&self) -> Option<&Actor> {
        self.silhouette.as_deref()
    }

    pub fn is_transformed(&self) -> bool {
        self.transformed
    }

    /// Marks the actor as already in the scene's axis orientation.
    pub fn mark_transformed(&mut self) {
        self.transformed = true;
    }

    pub fn is_added(&self) -> bool {
        self.added
    }

    pub fn mark_added(&mut self) {
        self.added = true;
    }

    /// Center of mass of the current mesh, recomputed on every call.
    pub fn center(&self) -> DVec3 {
        self.mesh.center_of_mass()
    }

    /// Short identity string, `neuro.Actor: <name>-<class>`.
    pub fn summary(&self) -> String {
        format!("neuro.Actor: {}-{}", self.name, self.br_class)
    }

    fn geometry_mesh(&self) -> &Mesh {
        self.display_mesh.as_ref().unwrap_or(&self.mesh)
    }

    // =========================================================================
    // ATTRIBUTE LOOKUP
    // =========================================================================

    /// Looks up an attribute by name on the actor, then on its mesh.
    ///
    /// Mesh attributes read the display mesh when one is attached, except
    /// `center_of_mass`, which always reads the primary mesh.
    ///
    /// | Actor      | Mesh                                    |
    /// |------------|-----------------------------------------|
    /// | `name`     | `npoints`, `vertex_count`               |
    /// | `br_class` | `ntriangles`, `triangle_count`          |
    /// | `is_text`  | `center_of_mass`, `bounds`              |
    /// | `center`   | `color`, `alpha`                        |
    pub fn attribute(&self, name: &str) -> ActorResult<AttributeValue> {
        let value = match name {
            "name" => AttributeValue::Text(self.name.clone()),
            "br_class" => AttributeValue::Text(self.br_class.clone()),
            "is_text" => AttributeValue::Flag(self.is_text),
            "center" => AttributeValue::Point(self.center()),

            "center_of_mass" => AttributeValue::Point(self.mesh.center_of_mass()),
            "npoints" | "vertex_count" => AttributeValue::Count(self.geometry_mesh().vertex_count()),
            "ntriangles" | "triangle_count" => {
                AttributeValue::Count(self.geometry_mesh().triangle_count())
            }
            "bounds" => AttributeValue::Bounds(self.geometry_mesh().bounds()),
            "color" => AttributeValue::Color(self.geometry_mesh().color()),
            "alpha" => AttributeValue::Alpha(self.geometry_mesh().alpha()),

            _ => return Err(ActorError::attribute_not_found(name)),
        };
        Ok(value)
    }

    // =========================================================================
    // LABELS
    // =========================================================================

    /// Attaches label text and options, resetting any built labels.
    pub fn request_label(&mut self, text: impl Into<String>, config: LabelConfig) {
        self.label_request = Some(LabelRequest {
            text: text.into(),
            config,
        });
        self.label_state = BuildState::Unbuilt;
    }

    pub fn label_request(&self) -> Option<&LabelRequest> {
        self.label_request.as_ref()
    }

    pub fn label_state(&self) -> BuildState {
        self.label_state
    }

    /// True when a label was requested and has not been built.
    pub fn needs_label(&self) -> bool {
        self.label_request.is_some() && !self.label_state.is_built()
    }

    /// Builds the label actors for this actor.
    ///
    /// Produces a text actor (`is_text`) followed by an anchor marker when the
    /// requested radius allows one. Children are named after this actor and
    /// classed `"label"`. Returns the stored labels unchanged once built.
    ///
    /// # Errors
    ///
    /// [`ActorError::InvalidLabelInput`] when no label was requested.
    pub fn make_label(&mut self, atlas: &dyn Atlas) -> ActorResult<&[Actor]> {
        if !self.label_state.is_built() {
            let request = self.label_request.as_ref().ok_or_else(|| {
                ActorError::invalid_label_input(format!("no label text attached to '{}'", self.name))
            })?;

            let geometries = make_actor_label(
                atlas,
                &[&*self as &dyn Geometry],
                &[request.text.as_str()],
                &request.config,
            )?;

            let labels: Vec<Actor> = geometries
                .into_iter()
                .map(|geometry| {
                    let mut label = Actor::make_actor(geometry.mesh, self.name.clone(), LABEL_CLASS);
                    match geometry.part {
                        LabelPart::Text => label.is_text = true,
                        LabelPart::Anchor(point) => label.anchor = Some(point),
                    }
                    label
                })
                .collect();

            debug!(actor = %self.name, count = labels.len(), "built labels");
            self.labels = labels;
            self.label_state = BuildState::Built;
        }

        Ok(&self.labels)
    }

    // =========================================================================
    // SILHOUETTE
    // =========================================================================

    /// Attaches silhouette options, resetting any built silhouette.
    pub fn request_silhouette(&mut self, config: SilhouetteConfig) {
        self.silhouette_config = Some(config);
        self.silhouette_state = BuildState::Unbuilt;
    }

    pub fn silhouette_state(&self) -> BuildState {
        self.silhouette_state
    }

    /// True when a silhouette was requested and has not been built.
    pub fn needs_silhouette(&self) -> bool {
        self.silhouette_config.is_some() && !self.silhouette_state.is_built()
    }

    /// Builds the silhouette actor outlining this actor.
    ///
    /// The child is named `"<name> silhouette"`, classed `"silhouette"` and
    /// marked transformed. Returns the stored silhouette once built.
    ///
    /// # Errors
    ///
    /// [`ActorError::MissingSilhouetteConfig`] when no silhouette was
    /// requested; geometry errors from the line style.
    pub fn make_silhouette(&mut self) -> ActorResult<&Actor> {
        if !self.silhouette_state.is_built() || self.silhouette.is_none() {
            let config = self.silhouette_config.as_ref().ok_or_else(|| {
                ActorError::MissingSilhouetteConfig {
                    name: self.name.clone(),
                }
            })?;

            let outline = make_silhouette(self.geometry_mesh(), config)?;
            let mut silhouette =
                Actor::make_actor(outline, format!("{} silhouette", self.name), SILHOUETTE_CLASS);
            silhouette.mark_transformed();

            debug!(actor = %self.name, lines = silhouette.mesh.line_count(), "built silhouette");
            self.silhouette = Some(Box::new(silhouette));
            self.silhouette_state = BuildState::Built;
        }

        self.silhouette
            .as_deref()
            .ok_or_else(|| ActorError::MissingSilhouetteConfig {
                name: self.name.clone(),
            })
    }

    // =========================================================================
    // TRANSFORMS
    // =========================================================================

    /// Mirrors the mesh in place across the plane normal to `axis`.
    ///
    /// `axis` is `"x"`, `"y"`, `"z"` or one of `"sagittal"`, `"vertical"`,
    /// `"frontal"`; anatomical names resolve through the atlas's space, or the
    /// default `asr` space without an atlas. The plane passes through
    /// `origin`, the world origin by default.
    ///
    /// # Errors
    ///
    /// [`ActorError::UnsupportedAxis`] for any other name; the mesh is left
    /// untouched.
    pub fn mirror(
        &mut self,
        axis: &str,
        origin: Option<DVec3>,
        atlas: Option<&dyn Atlas>,
    ) -> ActorResult<()> {
        let resolved = resolve_axis(axis, atlas)?;
        debug!(actor = %self.name, axis, %resolved, "mirroring");
        self.mesh.mirror(resolved, origin.unwrap_or(DVec3::ZERO));
        Ok(())
    }
}

/// Resolves a spatial or anatomical axis name to a spatial axis.
///
/// # Example
///
/// ```rust
/// use neuro_actor::resolve_axis;
/// use neuro_mesh::Axis;
///
/// assert_eq!(resolve_axis("sagittal", None).unwrap(), Axis::X);
/// assert_eq!(resolve_axis("z", None).unwrap(), Axis::Z);
/// assert!(resolve_axis("oblique", None).is_err());
/// ```
pub fn resolve_axis(name: &str, atlas: Option<&dyn Atlas>) -> ActorResult<Axis> {
    if let Ok(anatomical) = name.parse::<AnatomicalAxis>() {
        let space = atlas.map(|a| *a.space()).unwrap_or_default();
        return Axis::from_index(space.axis_index(anatomical))
            .ok_or_else(|| ActorError::unsupported_axis(name));
    }
    name.parse::<Axis>()
        .map_err(|_| ActorError::unsupported_axis(name))
}

fn non_empty_or(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl Geometry for Actor {
    fn vertices(&self) -> &[DVec3] {
        self.geometry_mesh().vertices()
    }

    fn anchor_vertices(&self) -> &[DVec3] {
        self.mesh.vertices()
    }

    fn indices_in_bounds(&self) -> bool {
        self.mesh.indices_in_bounds()
            && self.display_mesh.as_ref().map_or(true, Mesh::indices_in_bounds)
    }

    fn center_of_mass(&self) -> DVec3 {
        self.mesh.center_of_mass()
    }

    fn bounds(&self) -> [f64; 6] {
        self.geometry_mesh().bounds()
    }

    fn closest_point(&self, query: DVec3) -> Option<DVec3> {
        self.geometry_mesh().closest_point(query)
    }

    fn color(&self) -> Color {
        self.geometry_mesh().color()
    }

    fn alpha(&self) -> f32 {
        self.geometry_mesh().alpha()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use neuro_mesh::primitives::create_sphere;
    use neuro_space::{AnatomicalSpace, SymmetricAtlas};

    fn cube_points() -> Mesh {
        let mut mesh = Mesh::new();
        neuro_mesh::primitives::push_box(&mut mesh, DVec3::new(1.0, 2.0, 3.0), DVec3::new(3.0, 4.0, 5.0));
        mesh
    }

    fn atlas() -> SymmetricAtlas {
        SymmetricAtlas::new(AnatomicalSpace::default(), [100, 100, 100], [100.0; 3]).unwrap()
    }

    #[test]
    fn test_defaults() {
        let actor = Actor::new(cube_points());
        assert_eq!(actor.name(), "Actor");
        assert_eq!(actor.br_class(), "none");
        assert!(!actor.is_text());
        assert!(actor.labels().is_empty());
        assert!(actor.silhouette().is_none());
        assert!(!actor.needs_label());
        assert!(!actor.needs_silhouette());
        assert!(!actor.is_transformed());
        assert!(!actor.is_added());
        assert_eq!(actor.mesh().explicit_color(), None);
    }

    #[test]
    fn test_empty_name_falls_back() {
        let actor = Actor::make_actor(Mesh::new(), "", "");
        assert_eq!(actor.name(), "Actor");
        assert_eq!(actor.br_class(), "none");
    }

    #[test]
    fn test_color_and_alpha_applied() {
        let actor = Actor::with_params(
            cube_points(),
            ActorParams {
                color: Some(Color::new(0.0, 0.0, 1.0)),
                alpha: Some(0.5),
                ..Default::default()
            },
        );
        assert_eq!(actor.mesh().color().to_string(), "blue");
        assert_eq!(actor.mesh().alpha(), 0.5);
    }

    #[test]
    fn test_center_is_not_cached() {
        let mut actor = Actor::new(cube_points());
        assert_eq!(actor.center(), DVec3::new(2.0, 3.0, 4.0));
        actor.mesh_mut().translate(DVec3::new(10.0, 0.0, 0.0));
        assert_eq!(actor.center(), DVec3::new(12.0, 3.0, 4.0));
    }

    #[test]
    fn test_attribute_delegation() {
        let actor = Actor::make_actor(cube_points(), "thalamus", "region");
        assert_eq!(
            actor.attribute("npoints").unwrap(),
            AttributeValue::Count(actor.mesh().vertex_count())
        );
        assert_eq!(
            actor.attribute("bounds").unwrap(),
            AttributeValue::Bounds(actor.mesh().bounds())
        );
        assert_eq!(
            actor.attribute("name").unwrap(),
            AttributeValue::Text("thalamus".into())
        );
        assert_eq!(
            actor.attribute("volume").unwrap_err(),
            ActorError::attribute_not_found("volume")
        );
    }

    #[test]
    fn test_display_mesh_preferred_except_center_of_mass() {
        let mut actor = Actor::new(cube_points());
        let display = create_sphere(DVec3::new(100.0, 0.0, 0.0), 1.0, 4).unwrap();
        let display_count = display.vertex_count();
        actor.set_display_mesh(display);

        assert_eq!(actor.attribute("npoints").unwrap(), AttributeValue::Count(display_count));
        assert_eq!(Geometry::vertex_count(&actor), display_count);
        assert_eq!(
            actor.attribute("center_of_mass").unwrap(),
            AttributeValue::Point(DVec3::new(2.0, 3.0, 4.0))
        );
    }

    #[test]
    fn test_label_placed_from_primary_mesh() {
        let primary = || create_sphere(DVec3::new(5000.0, 4000.0, 3000.0), 300.0, 10).unwrap();
        let config = LabelConfig { radius: None, ..Default::default() };

        let mut plain = Actor::new(primary());
        plain.request_label("CA1", config.clone());
        let mut displayed = Actor::new(primary());
        displayed.set_display_mesh(create_sphere(DVec3::splat(-9000.0), 300.0, 10).unwrap());
        displayed.request_label("CA1", config);

        let expected = plain.make_label(&atlas()).unwrap()[0].mesh().bounds();
        let actual = displayed.make_label(&atlas()).unwrap()[0].mesh().bounds();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_make_label_requires_request() {
        let mut actor = Actor::new(cube_points());
        assert!(matches!(
            actor.make_label(&atlas()),
            Err(ActorError::InvalidLabelInput { .. })
        ));
    }

    #[test]
    fn test_make_label_builds_children() {
        let mut actor = Actor::make_actor(cube_points(), "CA1", "region");
        actor.request_label("CA1", LabelConfig::default());
        assert!(actor.needs_label());

        let labels = actor.make_label(&atlas()).unwrap();
        assert_eq!(labels.len(), 2);
        assert!(labels[0].is_text());
        assert_eq!(labels[0].anchor(), None);
        assert!(!labels[1].is_text());
        assert!(labels[1].anchor().is_some());
        for label in labels {
            assert_eq!(label.name(), "CA1");
            assert_eq!(label.br_class(), "label");
        }

        assert!(!actor.needs_label());
        assert_eq!(actor.label_state(), BuildState::Built);
        assert_eq!(actor.labels().len(), 2);
    }

    #[test]
    fn test_make_label_is_idempotent_until_requested() {
        let mut actor = Actor::new(cube_points());
        actor.request_label("a", LabelConfig::default());
        let first = actor.make_label(&atlas()).unwrap().len();

        // A built label is not rebuilt even if the request is stale
        let second = actor.make_label(&atlas()).unwrap().len();
        assert_eq!(first, second);

        actor.request_label("a", LabelConfig { radius: None, ..Default::default() });
        assert!(actor.needs_label());
        assert_eq!(actor.make_label(&atlas()).unwrap().len(), 1);
    }

    #[test]
    fn test_make_silhouette() {
        let mut actor = Actor::make_actor(cube_points(), "striatum", "region");
        assert!(matches!(
            actor.make_silhouette(),
            Err(ActorError::MissingSilhouetteConfig { .. })
        ));

        actor.request_silhouette(SilhouetteConfig {
            lw: 1.0,
            color: Color::new(0.0, 0.0, 0.0),
        });
        assert!(actor.needs_silhouette());

        let silhouette = actor.make_silhouette().unwrap();
        assert_eq!(silhouette.name(), "striatum silhouette");
        assert_eq!(silhouette.br_class(), "silhouette");
        assert!(silhouette.is_transformed());
        assert!(!actor.needs_silhouette());
        assert!(actor.silhouette().is_some());
    }

    #[test]
    fn test_mirror_axes() {
        let mut actor = Actor::new(cube_points());
        actor.mirror("x", None, None).unwrap();
        assert_eq!(actor.center(), DVec3::new(-2.0, 3.0, 4.0));

        actor.mirror("vertical", Some(DVec3::new(0.0, 1.0, 0.0)), None).unwrap();
        assert_relative_eq!(actor.center().y, -1.0);

        actor.mirror("frontal", None, None).unwrap();
        assert_relative_eq!(actor.center().z, -4.0);
    }

    #[test]
    fn test_mirror_uses_atlas_space() {
        let ras = SymmetricAtlas::new(AnatomicalSpace::new("ras").unwrap(), [10; 3], [1.0; 3]).unwrap();
        let mut actor = Actor::new(cube_points());
        actor.mirror("sagittal", None, Some(&ras)).unwrap();
        assert_eq!(actor.center(), DVec3::new(2.0, -3.0, 4.0));
    }

    #[test]
    fn test_mirror_unsupported_axis_leaves_mesh() {
        let mut actor = Actor::new(cube_points());
        let before = actor.mesh().vertices().to_vec();
        assert_eq!(
            actor.mirror("oblique", None, None).unwrap_err(),
            ActorError::unsupported_axis("oblique")
        );
        assert_eq!(actor.mesh().vertices(), &before[..]);
    }

    #[test]
    fn test_flags() {
        let mut actor = Actor::new(Mesh::new());
        actor.mark_added();
        actor.mark_transformed();
        assert!(actor.is_added());
        assert!(actor.is_transformed());
        assert_eq!(actor.summary(), "neuro.Actor: Actor-none");
    }
}
