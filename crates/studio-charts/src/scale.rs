//! Vertical axis planning
//!
//! Derives a human-friendly axis ceiling and evenly spaced tick values from
//! a data maximum, with an optional fixed ceiling so a caller can pin a
//! stable axis across selections without ever clipping real data.

/// Planned vertical axis: ceiling plus tick values from 0 up to the ceiling
#[derive(Debug, Clone, PartialEq)]
pub struct AxisPlan {
    pub scale_max: f64,
    pub tick_values: Vec<f64>,
}

/// Round a rough step to a 1/2/5 x 10^n "nice" step
fn nice_step(rough_step: f64) -> f64 {
    let magnitude = 10.0_f64.powf(rough_step.log10().floor());
    let residual = rough_step / magnitude;

    if residual <= 1.0 {
        magnitude
    } else if residual <= 2.0 {
        2.0 * magnitude
    } else if residual <= 5.0 {
        5.0 * magnitude
    } else {
        10.0 * magnitude
    }
}

/// Plan the vertical axis for a data maximum.
///
/// Without a ceiling override the ceiling is the data maximum rounded up to
/// the next multiple of a nice step. With an override the ceiling is the
/// override, widened to the data maximum if the data exceeds it.
pub fn plan(max_value: f64, tick_count: usize, ceiling_override: Option<f64>) -> AxisPlan {
    let tick_count = tick_count.max(2);

    let step = if max_value <= 0.0 {
        1.0
    } else {
        nice_step(max_value / (tick_count - 1) as f64)
    };

    let nice_max = (max_value / step).ceil() * step;

    let scale_max = match ceiling_override {
        Some(ceiling) => ceiling.max(max_value),
        None => nice_max,
    };

    let tick_values = (0..tick_count)
        .map(|k| (k as f64 * scale_max / (tick_count - 1) as f64).round())
        .collect();

    AxisPlan {
        scale_max,
        tick_values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_plan() {
        let axis = plan(23_450.0, 5, None);
        assert_eq!(axis.scale_max, 30_000.0);
        assert_eq!(
            axis.tick_values,
            vec![0.0, 7_500.0, 15_000.0, 22_500.0, 30_000.0]
        );
    }

    #[test]
    fn test_ceiling_never_clips_data() {
        for max in [1.0, 17.0, 950.0, 23_450.0, 1_234_567.0] {
            let axis = plan(max, 5, None);
            assert!(axis.scale_max >= max, "scale_max {} < max {}", axis.scale_max, max);
        }
    }

    #[test]
    fn test_ceiling_override() {
        let pinned = plan(23_450.0, 5, Some(50_000.0));
        assert_eq!(pinned.scale_max, 50_000.0);

        // An override below the data maximum is widened, never clipped
        let widened = plan(23_450.0, 5, Some(10_000.0));
        assert_eq!(widened.scale_max, 23_450.0);
    }

    #[test]
    fn test_zero_maximum_degrades() {
        let axis = plan(0.0, 5, None);
        assert_eq!(axis.scale_max, 0.0);
        assert_eq!(axis.tick_values, vec![0.0; 5]);
    }

    #[test]
    fn test_tick_count_floor() {
        let axis = plan(100.0, 0, None);
        assert_eq!(axis.tick_values.len(), 2);
        assert_eq!(axis.tick_values[0], 0.0);
        assert_eq!(axis.tick_values[1], axis.scale_max);
    }

    #[test]
    fn test_nice_step_boundaries() {
        assert_eq!(nice_step(1.0), 1.0);
        assert_eq!(nice_step(1.5), 2.0);
        assert_eq!(nice_step(3.0), 5.0);
        assert_eq!(nice_step(7.0), 10.0);
        assert_eq!(nice_step(5_862.5), 10_000.0);
    }
}
