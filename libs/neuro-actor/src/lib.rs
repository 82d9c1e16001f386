//! # Neuro Actor
//!
//! Renderable actors for anatomical scenes: a mesh plus identity,
//! classification and the derived artifacts a scene draws alongside it.
//!
//! ## Architecture
//!
//! ```text
//! neuro-space (Atlas) ─┐
//!                      ├→ neuro-actor (Actor → labels, silhouette)
//! neuro-mesh (Mesh) ───┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use neuro_actor::{Actor, LabelConfig};
//! use neuro_mesh::primitives::create_sphere;
//! use neuro_space::{AnatomicalSpace, SymmetricAtlas};
//!
//! let atlas = SymmetricAtlas::new(AnatomicalSpace::default(), [100; 3], [100.0; 3]).unwrap();
//! let mesh = create_sphere(DVec3::new(5000.0, 5000.0, 3000.0), 200.0, 12).unwrap();
//!
//! let mut actor = Actor::make_actor(mesh, "CA1", "region");
//! actor.request_label("CA1", LabelConfig::default());
//! let labels = actor.make_label(&atlas).unwrap();
//! assert_eq!(labels.len(), 2);
//!
//! actor.mirror("frontal", None, Some(&atlas)).unwrap();
//! assert!(actor.center().z < 0.0);
//! ```
//!
//! Logging goes through `tracing`; installing a subscriber is left to the
//! application.

pub mod actor;
pub mod error;
pub mod geometry;
pub mod label;
pub mod report;
pub mod silhouette;

pub use actor::{resolve_axis, Actor, ActorParams, AttributeValue, BuildState, LabelRequest};
pub use error::{ActorError, ActorResult};
pub use geometry::Geometry;
pub use label::{make_actor_label, LabelConfig, LabelGeometry, LabelPart};
pub use silhouette::{make_silhouette, SilhouetteConfig};
