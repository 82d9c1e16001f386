//! # Config Crate
//!
//! Centralized configuration constants for the actor pipeline.
//! Default identities, label layout values and tessellation parameters live
//! here so the mesh, space and actor crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_ACTOR_NAME, LABEL_DEFAULT_SIZE, EPSILON};
//!
//! let name: Option<&str> = None;
//! assert_eq!(name.unwrap_or(DEFAULT_ACTOR_NAME), "Actor");
//!
//! let size: Option<f64> = None;
//! assert!((size.unwrap_or(LABEL_DEFAULT_SIZE) - 300.0).abs() < EPSILON);
//! ```

pub mod constants;
