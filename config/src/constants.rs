//! # Configuration Constants
//!
//! Centralized constants for the actor pipeline. Default actor identity,
//! label layout, primitive resolutions and precision values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Actor**: Default identity for actors built without a name or class
//! - **Label**: Text size, anchor radius and placement offsets
//! - **Primitives**: Tessellation of anchor spheres and text glyphs
//! - **Color**: Engine and label default colors

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Tolerance below which a triangle is treated as having zero area.
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-12;

// =============================================================================
// ACTOR CONSTANTS
// =============================================================================

/// Name given to actors constructed without one.
pub const DEFAULT_ACTOR_NAME: &str = "Actor";

/// Class tag given to actors constructed without one.
pub const DEFAULT_ACTOR_CLASS: &str = "none";

/// Class tag of actors produced by label synthesis.
pub const LABEL_CLASS: &str = "label";

/// Class tag of actors produced by silhouette synthesis.
pub const SILHOUETTE_CLASS: &str = "silhouette";

// =============================================================================
// LABEL CONSTANTS
// =============================================================================

/// Default label text size.
pub const LABEL_DEFAULT_SIZE: f64 = 300.0;

/// Default radius of the sphere marking a label's anchor on the mesh.
///
/// A radius of `None` or `0.0` disables the marker.
pub const LABEL_DEFAULT_RADIUS: f64 = 100.0;

/// Default label offset along the horizontal text axis.
pub const LABEL_DEFAULT_XOFFSET: f64 = 0.0;

/// Default label offset along the vertical text axis.
///
/// # Example
///
/// ```rust
/// use config::constants::{LABEL_DEFAULT_YOFFSET, LABEL_POSITION_BIAS};
///
/// // y offset lands on the first mesh axis, negated
/// let first = -LABEL_DEFAULT_YOFFSET + LABEL_POSITION_BIAS[0];
/// assert_eq!(first, 500.0);
/// ```
pub const LABEL_DEFAULT_YOFFSET: f64 = -500.0;

/// Default label offset along the depth axis.
pub const LABEL_DEFAULT_ZOFFSET: f64 = 0.0;

/// Fixed bias added to every label position, in mesh coordinates.
pub const LABEL_POSITION_BIAS: [f64; 3] = [0.0, -200.0, 100.0];

/// Extrusion depth of label glyphs, relative to the text size.
pub const LABEL_TEXT_DEPTH: f64 = 0.1;

// =============================================================================
// PRIMITIVE CONSTANTS
// =============================================================================

/// Tessellation resolution of label anchor spheres.
pub const ANCHOR_SPHERE_RESOLUTION: u32 = 8;

/// Minimum resolution accepted by the sphere primitive.
pub const MIN_SPHERE_RESOLUTION: u32 = 3;

/// Glyph cell width as a fraction of text size.
pub const GLYPH_WIDTH_RATIO: f64 = 0.6;

/// Horizontal advance between glyphs as a fraction of text size.
pub const GLYPH_ADVANCE_RATIO: f64 = 0.75;

/// Direction silhouettes are extracted against when no view is given.
pub const DEFAULT_VIEW_DIRECTION: [f64; 3] = [0.0, 0.0, 1.0];

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Engine default mesh color when none is specified (light gray).
///
/// RGB values in range [0.0, 1.0].
pub const DEFAULT_COLOR: [f32; 3] = [0.8, 0.8, 0.8];

/// Default label and anchor color (dark gray).
pub const LABEL_DEFAULT_COLOR: [f32; 3] = [0.2, 0.2, 0.2];

/// Default mesh opacity.
pub const DEFAULT_ALPHA: f32 = 1.0;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Combined label offset in mesh coordinates.
///
/// Label offsets are given in text-layout axes and remapped onto mesh axes as
/// `(-yoffset, -zoffset, xoffset)` before the fixed bias is added.
///
/// # Example
///
/// ```rust
/// use config::constants::label_offset;
///
/// assert_eq!(label_offset(0.0, -500.0, 0.0), [500.0, -200.0, 100.0]);
/// ```
#[inline]
pub fn label_offset(xoffset: f64, yoffset: f64, zoffset: f64) -> [f64; 3] {
    [
        -yoffset + LABEL_POSITION_BIAS[0],
        -zoffset + LABEL_POSITION_BIAS[1],
        xoffset + LABEL_POSITION_BIAS[2],
    ]
}
