//! # Neuro Space
//!
//! Anatomical coordinate conventions and atlas queries.
//!
//! ## Architecture
//!
//! ```text
//! neuro-space (AnatomicalSpace, Atlas) → neuro-actor (mirror, label placement)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use neuro_space::{AnatomicalAxis, AnatomicalSpace};
//!
//! let axis: AnatomicalAxis = "vertical".parse().unwrap();
//! assert_eq!(AnatomicalSpace::default().axis_index(axis), 1);
//! ```

pub mod atlas;
pub mod error;
pub mod space;

pub use atlas::{Atlas, SymmetricAtlas};
pub use error::{SpaceError, SpaceResult};
pub use space::{AnatomicalAxis, AnatomicalSpace, Hemisphere};
