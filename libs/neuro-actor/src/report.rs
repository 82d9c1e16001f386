//! Console report for actors.

use std::fmt;

use crate::actor::Actor;

impl fmt::Display for Actor {
    /// Multi-line summary of identity and mesh characteristics.
    ///
    /// ```text
    /// neuro.Actor:
    ///   name: CA1
    ///   type: region
    ///
    ///   center of mass: [2 3 4]
    ///   number of vertices: 8
    ///   dimensions: [1 3 2 4 3 5]
    ///   color: lightgray
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mesh = self.mesh();

        writeln!(f, "neuro.Actor:")?;
        writeln!(f, "  name: {}", self.name())?;
        writeln!(f, "  type: {}", self.br_class())?;
        writeln!(f)?;
        writeln!(f, "  center of mass: {}", truncated(&mesh.center_of_mass().to_array()))?;
        writeln!(f, "  number of vertices: {}", mesh.vertex_count())?;
        writeln!(f, "  dimensions: {}", truncated(&mesh.bounds()))?;
        write!(f, "  color: {}", mesh.color())
    }
}

/// Formats values truncated toward zero, as `[a b c]`.
fn truncated(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| format!("{}", v.trunc() as i64)).collect();
    format!("[{}]", parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use neuro_mesh::primitives::push_box;
    use neuro_mesh::Mesh;

    #[test]
    fn test_report() {
        let mut mesh = Mesh::new();
        push_box(&mut mesh, DVec3::new(1.0, 2.0, 3.0), DVec3::new(3.5, 4.0, 5.0));
        let actor = Actor::make_actor(mesh, "CA1", "region");

        let report = actor.to_string();
        assert!(report.starts_with("neuro.Actor:\n"));
        assert!(report.contains("  name: CA1\n"));
        assert!(report.contains("  type: region\n"));
        assert!(report.contains("  center of mass: [2 3 4]\n"));
        assert!(report.contains("  number of vertices: 8\n"));
        assert!(report.contains("  dimensions: [1 3 2 4 3 5]\n"));
        assert!(report.ends_with("  color: lightgray"));
    }

    #[test]
    fn test_truncation_toward_zero() {
        assert_eq!(truncated(&[-1.7, 0.2, 2.9]), "[-1 0 2]");
    }
}
