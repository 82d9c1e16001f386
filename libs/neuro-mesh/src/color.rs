//! # Colors
//!
//! RGB colors parsed from names, `#rrggbb` hex strings or component arrays.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::MeshError;

/// Named colors understood by [`Color::from_str`].
///
/// When two names share a value the first one wins for display.
const NAMED_COLORS: &[(&str, [f32; 3])] = &[
    ("black", [0.0, 0.0, 0.0]),
    ("white", [1.0, 1.0, 1.0]),
    ("gray", [0.5, 0.5, 0.5]),
    ("grey", [0.5, 0.5, 0.5]),
    ("red", [1.0, 0.0, 0.0]),
    ("green", [0.0, 0.5, 0.0]),
    ("blue", [0.0, 0.0, 1.0]),
    ("yellow", [1.0, 1.0, 0.0]),
    ("cyan", [0.0, 1.0, 1.0]),
    ("magenta", [1.0, 0.0, 1.0]),
    ("orange", [1.0, 0.647, 0.0]),
    ("gold", [1.0, 0.843, 0.0]),
    ("salmon", [0.98, 0.502, 0.447]),
    ("amber", [1.0, 0.757, 0.027]),
    ("darkgray", [0.2, 0.2, 0.2]),
    ("lightgray", [0.8, 0.8, 0.8]),
];

/// An RGB color with components in `[0.0, 1.0]`.
///
/// # Example
///
/// ```rust
/// use neuro_mesh::Color;
///
/// let red: Color = "red".parse().unwrap();
/// assert_eq!(red, Color::new(1.0, 0.0, 0.0));
/// assert_eq!(red.to_string(), "red");
/// assert_eq!("#ff0000".parse::<Color>().unwrap(), red);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "ColorSpec")]
pub struct Color {
    r: f32,
    g: f32,
    b: f32,
}

impl Color {
    /// Creates a color, clamping each component into `[0.0, 1.0]`.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Returns the components as an array.
    #[inline]
    pub fn rgb(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Returns the name of this color if it matches a named color exactly.
    pub fn name(&self) -> Option<&'static str> {
        NAMED_COLORS
            .iter()
            .find(|(_, rgb)| *rgb == self.rgb())
            .map(|(name, _)| *name)
    }

    fn from_hex(hex: &str) -> Option<Self> {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
        Some(Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
        ))
    }
}

impl From<[f32; 3]> for Color {
    fn from(rgb: [f32; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

impl FromStr for Color {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_ascii_lowercase();

        if let Some(hex) = value.strip_prefix('#') {
            return Self::from_hex(hex).ok_or_else(|| MeshError::invalid_color(s));
        }

        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == value)
            .map(|(_, rgb)| Self::from(*rgb))
            .ok_or_else(|| MeshError::invalid_color(s))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name() {
            return f.write_str(name);
        }
        let [r, g, b] = self.rgb().map(|c| (c * 255.0).round() as u8);
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// Serialized forms accepted for a color.
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorSpec {
    Name(String),
    Rgb([f32; 3]),
}

impl TryFrom<ColorSpec> for Color {
    type Error = MeshError;

    fn try_from(spec: ColorSpec) -> Result<Self, Self::Error> {
        match spec {
            ColorSpec::Name(name) => name.parse(),
            ColorSpec::Rgb(rgb) => Ok(Self::from(rgb)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named() {
        let color: Color = "Salmon".parse().unwrap();
        assert_eq!(color.name(), Some("salmon"));
    }

    #[test]
    fn test_parse_hex() {
        let color: Color = "#0000ff".parse().unwrap();
        assert_eq!(color, Color::new(0.0, 0.0, 1.0));
        assert_eq!(color.to_string(), "blue");
    }

    #[test]
    fn test_parse_invalid() {
        assert!("not-a-color".parse::<Color>().is_err());
        assert!("#12345".parse::<Color>().is_err());
        assert!("#gg0000".parse::<Color>().is_err());
    }

    #[test]
    fn test_display_unnamed_as_hex() {
        let color = Color::new(0.1, 0.2, 0.3);
        assert_eq!(color.to_string(), "#1a334d");
    }

    #[test]
    fn test_gray_displays_first_alias() {
        let grey: Color = "grey".parse().unwrap();
        assert_eq!(grey.to_string(), "gray");
    }

    #[test]
    fn test_new_clamps() {
        assert_eq!(Color::new(2.0, -1.0, 0.5).rgb(), [1.0, 0.0, 0.5]);
    }

    #[test]
    fn test_deserialize_name_and_array() {
        let named: Color = serde_json::from_str("\"red\"").unwrap();
        assert_eq!(named, Color::new(1.0, 0.0, 0.0));

        let rgb: Color = serde_json::from_str("[0.2, 0.2, 0.2]").unwrap();
        assert_eq!(rgb.name(), Some("darkgray"));

        assert!(serde_json::from_str::<Color>("\"chartreuse-ish\"").is_err());
    }
}
