//! Data space <-> pixel space mapping
//!
//! The plot is a fixed-height, horizontally scrollable SVG. A minimum
//! per-point pixel step keeps long series legible by growing the canvas
//! instead of compressing points. The inverse map takes a pointer position
//! in element-local CSS pixels (plus the element's rendered width, which can
//! differ from the SVG user-unit width) back to the nearest day index.

use studio_core::SeriesPoint;

/// Plot rectangle and sizing rules for the trend chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotGeometry {
    pub padding_left: f64,
    pub padding_right: f64,
    pub padding_top: f64,
    pub plot_height: f64,
    /// Minimum horizontal pixels per point; grows the canvas on long series
    pub min_step: f64,
    /// Minimum total SVG width in user units
    pub min_width: f64,
}

impl Default for PlotGeometry {
    fn default() -> Self {
        Self {
            padding_left: 46.0,
            padding_right: 18.0,
            padding_top: 16.0,
            plot_height: 220.0,
            min_step: 14.0,
            min_width: 640.0,
        }
    }
}

impl PlotGeometry {
    /// Total SVG width in user units for a series of `length` points
    pub fn svg_width(&self, length: usize) -> f64 {
        let span = length.saturating_sub(1) as f64 * self.min_step;
        (self.padding_left + self.padding_right + span).max(self.min_width)
    }

    /// Horizontal extent available to data points
    pub fn plot_width(&self, length: usize) -> f64 {
        self.svg_width(length) - self.padding_left - self.padding_right
    }

    /// Horizontal distance between adjacent points
    pub fn step(&self, length: usize) -> f64 {
        let plot_width = self.plot_width(length);
        if length > 1 {
            plot_width / (length - 1) as f64
        } else {
            plot_width
        }
    }

    /// Pixel x for a day index
    pub fn x_at(&self, index: usize, length: usize) -> f64 {
        self.padding_left + index as f64 * self.step(length)
    }

    /// Pixel y for a value under a planned axis ceiling
    pub fn y_at(&self, value: f64, scale_max: f64) -> f64 {
        let fraction = if scale_max > 0.0 {
            value.max(0.0) / scale_max
        } else {
            0.0
        };
        self.padding_top + (1.0 - fraction) * self.plot_height
    }

    /// Project a series into render-ready pixel points
    pub fn project(&self, points: &[SeriesPoint], scale_max: f64) -> Vec<ProjectedPoint> {
        let length = points.len();
        points
            .iter()
            .enumerate()
            .map(|(i, point)| ProjectedPoint {
                point: point.clone(),
                x: self.x_at(i, length),
                y: self.y_at(point.value, scale_max),
            })
            .collect()
    }

    /// Inverse map: element-local pointer x -> nearest day index.
    ///
    /// `rendered_width` is the on-screen width of the SVG element; pointer
    /// coordinates are rescaled into user units before the lookup. The
    /// result is clamped into range, so feeding back a projected `x` always
    /// recovers its index.
    pub fn index_at(&self, local_x: f64, rendered_width: f64, length: usize) -> Option<usize> {
        if length == 0 {
            return None;
        }

        let svg_width = self.svg_width(length);
        let scale_x = if rendered_width > 0.0 {
            svg_width / rendered_width
        } else {
            1.0
        };

        let x = (local_x * scale_x).clamp(self.padding_left, svg_width - self.padding_right);
        let step = self.step(length);

        let index = if step > 0.0 {
            ((x - self.padding_left) / step).round() as usize
        } else {
            0
        };

        Some(index.min(length - 1))
    }
}

/// A series point with its pixel position
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedPoint {
    pub point: SeriesPoint,
    pub x: f64,
    pub y: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_core::{ShapeConfig, synthesize};

    fn geometry() -> PlotGeometry {
        PlotGeometry::default()
    }

    #[test]
    fn test_min_width_floor_on_short_series() {
        let geo = geometry();
        assert_eq!(geo.svg_width(5), geo.min_width);
    }

    #[test]
    fn test_canvas_grows_on_long_series() {
        let geo = geometry();
        let length = 120;
        let expected = geo.padding_left + geo.padding_right + 119.0 * geo.min_step;
        assert_eq!(geo.svg_width(length), expected);
        assert!(geo.step(length) >= geo.min_step);
    }

    #[test]
    fn test_projection_spans_plot() {
        let geo = geometry();
        let points = synthesize(10, 900.0, &ShapeConfig::default());
        let projected = geo.project(&points, 1_000.0);

        assert_eq!(projected.len(), 10);
        assert_eq!(projected[0].x, geo.padding_left);
        assert_eq!(projected[9].x, geo.svg_width(10) - geo.padding_right);

        // value 0 sits on the baseline, the ceiling on the top edge
        assert_eq!(projected[0].y, geo.padding_top + geo.plot_height);
        assert_eq!(geo.y_at(1_000.0, 1_000.0), geo.padding_top);
    }

    #[test]
    fn test_grid_point_round_trip() {
        let geo = geometry();
        for length in [2, 5, 68, 200] {
            let rendered = geo.svg_width(length);
            for i in 0..length {
                let x = geo.x_at(i, length);
                assert_eq!(geo.index_at(x, rendered, length), Some(i), "length {}", length);
            }
        }
    }

    #[test]
    fn test_inverse_rescales_css_pixels() {
        let geo = geometry();
        let length = 68;
        // Element rendered at half the SVG user-unit width
        let rendered = geo.svg_width(length) / 2.0;
        for i in [0, 10, 33, 67] {
            let x = geo.x_at(i, length) / 2.0;
            assert_eq!(geo.index_at(x, rendered, length), Some(i));
        }
    }

    #[test]
    fn test_pointer_outside_plot_is_clamped() {
        let geo = geometry();
        let length = 30;
        let rendered = geo.svg_width(length);

        assert_eq!(geo.index_at(-500.0, rendered, length), Some(0));
        assert_eq!(geo.index_at(rendered + 500.0, rendered, length), Some(length - 1));
    }

    #[test]
    fn test_empty_series_yields_nothing() {
        assert_eq!(geometry().index_at(100.0, 640.0, 0), None);
    }

    #[test]
    fn test_single_point_series() {
        let geo = geometry();
        assert_eq!(geo.index_at(320.0, geo.svg_width(1), 1), Some(0));
    }

    #[test]
    fn test_zero_ceiling_pins_baseline() {
        let geo = geometry();
        assert_eq!(geo.y_at(0.0, 0.0), geo.padding_top + geo.plot_height);
    }
}
