//! SVG path string builders

use std::fmt::Write;

/// SVG path builder with fluent API
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    commands: String,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            commands: String::with_capacity(256),
        }
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        write!(self.commands, "M{:.2},{:.2}", x, y).unwrap();
        self
    }

    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        write!(self.commands, "L{:.2},{:.2}", x, y).unwrap();
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push('Z');
        self
    }

    pub fn build(self) -> String {
        self.commands
    }
}

/// Polyline path through the given points (non-closed)
pub fn line_path(points: &[(f64, f64)]) -> String {
    if points.is_empty() {
        return String::new();
    }

    let mut path = String::with_capacity(points.len() * 20);
    let (x, y) = points[0];
    write!(path, "M{:.2},{:.2}", x, y).unwrap();

    for &(x, y) in &points[1..] {
        write!(path, "L{:.2},{:.2}", x, y).unwrap();
    }

    path
}

/// Closed area path dropping to a horizontal baseline
pub fn area_path(points: &[(f64, f64)], baseline_y: f64) -> String {
    if points.is_empty() {
        return String::new();
    }

    let mut builder = PathBuilder::new()
        .move_to(points[0].0, baseline_y)
        .line_to(points[0].0, points[0].1);

    for &(x, y) in &points[1..] {
        builder = builder.line_to(x, y);
    }

    if let Some(&(last_x, _)) = points.last() {
        builder = builder.line_to(last_x, baseline_y);
    }

    builder.close().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_path() {
        let path = line_path(&[(0.0, 0.0), (50.0, 50.0), (100.0, 0.0)]);
        assert!(path.starts_with("M0.00,0.00"));
        assert!(path.contains("L50.00,50.00"));
        assert!(!path.ends_with('Z'));
    }

    #[test]
    fn test_area_path_closes_on_baseline() {
        let path = area_path(&[(10.0, 20.0), (30.0, 5.0)], 100.0);
        assert!(path.starts_with("M10.00,100.00"));
        assert!(path.contains("L30.00,100.00"));
        assert!(path.ends_with('Z'));
    }

    #[test]
    fn test_empty_points() {
        assert_eq!(line_path(&[]), "");
        assert_eq!(area_path(&[], 10.0), "");
    }
}
