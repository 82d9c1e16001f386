//! # Neuro Mesh
//!
//! In-memory geometry facade for anatomical scene actors.
//!
//! ## Architecture
//!
//! ```text
//! neuro-mesh (Mesh, primitives) → neuro-actor (Actor, labels, silhouettes)
//! ```
//!
//! ## Capabilities
//!
//! - **Queries**: vertices, bounds, center of mass, closest point
//! - **Appearance**: color, opacity, line width, normals
//! - **Transforms**: axis mirror, rotation about the origin
//! - **Derived geometry**: silhouettes, anchor spheres, flat text
//!
//! ## Usage
//!
//! ```rust
//! use neuro_mesh::{primitives::create_sphere, Axis};
//! use glam::DVec3;
//!
//! let mut mesh = create_sphere(DVec3::new(5.0, 0.0, 0.0), 1.0, 8).unwrap();
//! mesh.mirror(Axis::X, DVec3::ZERO);
//! assert!(mesh.center_of_mass().x < 0.0);
//! ```

pub mod axis;
pub mod color;
pub mod error;
pub mod mesh;
pub mod ops;
pub mod primitives;

pub use axis::Axis;
pub use color::Color;
pub use error::{MeshError, MeshResult};
pub use mesh::Mesh;
