//! # Silhouette Synthesis

use neuro_mesh::{Color, Mesh};
use serde::Deserialize;

use crate::error::ActorResult;

/// Silhouette line options. Both keys are required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SilhouetteConfig {
    /// Line width
    pub lw: f64,
    /// Line color
    pub color: Color,
}

/// Extracts the outline of `mesh` and applies the line style.
///
/// Fails only when the geometry engine rejects the line width.
pub fn make_silhouette(mesh: &Mesh, config: &SilhouetteConfig) -> ActorResult<Mesh> {
    let mut outline = mesh.silhouette();
    outline.set_line_width(config.lw)?;
    outline.set_color(config.color);
    Ok(outline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ActorError;
    use glam::DVec3;
    use neuro_mesh::primitives::create_sphere;

    fn config() -> SilhouetteConfig {
        SilhouetteConfig {
            lw: 2.0,
            color: Color::new(0.0, 0.0, 0.0),
        }
    }

    #[test]
    fn test_outline_styled() {
        let sphere = create_sphere(DVec3::ZERO, 50.0, 10).unwrap();
        let outline = make_silhouette(&sphere, &config()).unwrap();
        assert!(outline.line_count() > 0);
        assert_eq!(outline.triangle_count(), 0);
        assert_eq!(outline.line_width(), Some(2.0));
        assert_eq!(outline.color().to_string(), "black");
    }

    #[test]
    fn test_bad_line_width_propagates() {
        let sphere = create_sphere(DVec3::ZERO, 50.0, 10).unwrap();
        let config = SilhouetteConfig {
            lw: -1.0,
            ..config()
        };
        assert!(matches!(
            make_silhouette(&sphere, &config),
            Err(ActorError::Mesh(_))
        ));
    }

    #[test]
    fn test_config_keys_are_mandatory() {
        let config: SilhouetteConfig =
            serde_json::from_str(r#"{"lw": 1.5, "color": "white"}"#).unwrap();
        assert_eq!(config.lw, 1.5);

        assert!(serde_json::from_str::<SilhouetteConfig>(r#"{"lw": 1.5}"#).is_err());
        assert!(serde_json::from_str::<SilhouetteConfig>(r#"{"color": "white"}"#).is_err());
        assert!(
            serde_json::from_str::<SilhouetteConfig>(r#"{"lw": 1, "color": "white", "alpha": 1}"#)
                .is_err()
        );
    }
}
