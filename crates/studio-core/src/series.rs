//! Synthetic daily trend series
//!
//! Generates a day-indexed cumulative series that lands on an exact target
//! while showing believable daily and weekly variation. Generation is fully
//! deterministic: the "jitter" is a function of the day index, never a random
//! draw, so the same selection always renders the same curve.

use crate::Metric;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of days covered by every dashboard series
pub const SERIES_DAYS: usize = 68;

/// First calendar day of the tracked period
pub fn series_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 1).unwrap_or_default()
}

// ============================================================================
// CORE TYPES
// ============================================================================

/// Single day on the cumulative curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Calendar day number, starting at 1
    pub day: u32,
    /// Cumulative value up to and including this day
    pub value: f64,
    /// True on every 7th day; rendered as a marker on the curve
    pub is_week_boundary: bool,
}

/// Shape of the raw daily increments before target normalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeConfig {
    /// Flat amount added every day
    pub daily_base: f64,
    /// Amplitude of the slow sine swell across days
    pub daily_wave: f64,
    /// Extra amount on days that close a week
    pub weekly_bonus: f64,
    /// Linear growth of the daily amount over the period
    pub daily_drift: f64,
    /// Piecewise trend-phase multipliers, applied per contiguous block of days
    pub segment_multipliers: Vec<f64>,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            daily_base: 10.0,
            daily_wave: 0.0,
            weekly_bonus: 0.0,
            daily_drift: 0.0,
            segment_multipliers: vec![1.0],
        }
    }
}

// ============================================================================
// SYNTHESIS
// ============================================================================

/// Generate a cumulative series of exactly `length` points whose final value
/// equals `target`.
///
/// Raw increments are shaped by `shape`, then rescaled so their sum matches
/// the target. Intermediate days carry independently rounded cumulative sums;
/// the final day is forced to the exact target so rounding drift never shows
/// up in the headline number.
pub fn synthesize(length: usize, target: f64, shape: &ShapeConfig) -> Vec<SeriesPoint> {
    if length <= 1 {
        return vec![SeriesPoint {
            day: 1,
            value: 0.0,
            is_week_boundary: true,
        }];
    }

    let increments = raw_increments(length, shape);
    let total: f64 = increments.iter().sum();
    let scale = if total > 0.0 { target / total } else { 0.0 };

    let mut points = Vec::with_capacity(length);
    points.push(SeriesPoint {
        day: 1,
        value: 0.0,
        is_week_boundary: false,
    });

    let mut running = 0.0;
    for day in 2..=length {
        running += increments[day - 2] * scale;
        let value = if day == length {
            target
        } else {
            running.round().max(0.0)
        };
        points.push(SeriesPoint {
            day: day as u32,
            value,
            is_week_boundary: day % 7 == 0,
        });
    }

    points
}

/// One raw increment per day transition, before target normalization.
/// Index `i` covers the step onto calendar day `i + 2`.
fn raw_increments(length: usize, shape: &ShapeConfig) -> Vec<f64> {
    let n = length - 1;
    let segment_count = shape.segment_multipliers.len().max(1);
    let segment_size = n.div_ceil(segment_count);

    (0..n)
        .map(|i| {
            let wave = ((i as f64 / 4.5).sin().abs() * shape.daily_wave).round();
            let drift = shape.daily_drift * i as f64;
            let daily_step = shape.daily_base + wave + drift;

            let weekly_boost = if (i + 2) % 7 == 0 {
                shape.weekly_bonus
            } else {
                0.0
            };

            let segment = (i / segment_size).min(segment_count - 1);
            let multiplier = shape
                .segment_multipliers
                .get(segment)
                .copied()
                .unwrap_or(1.0);

            // ±8% ripple with period 5, keyed off the index
            let jitter = 1.0 + ((i % 5) as f64 - 2.0) * 0.04;

            ((daily_step + weekly_boost) * multiplier * jitter).max(1.0)
        })
        .collect()
}

// ============================================================================
// SERIES CONTAINER
// ============================================================================

/// A synthesized series plus the metric it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    pub metric: Metric,
    pub points: Vec<SeriesPoint>,
}

impl TrendSeries {
    /// Synthesize a fresh series for a metric and resolved target
    pub fn synthesize(metric: Metric, length: usize, target: f64) -> Self {
        Self {
            metric,
            points: synthesize(length, target, &metric.shape()),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn latest(&self) -> Option<&SeriesPoint> {
        self.points.last()
    }

    /// Final cumulative value (the headline total)
    pub fn total(&self) -> f64 {
        self.latest().map_or(0.0, |p| p.value)
    }

    /// Largest value in the series (feeds the axis planner)
    pub fn max_value(&self) -> f64 {
        self.points.iter().map(|p| p.value).fold(0.0, f64::max)
    }

    /// Mean per-day gain across the period
    pub fn daily_average(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }
        self.total() / (self.points.len() - 1) as f64
    }

    /// Day with the largest single-day gain, with the gain amount
    pub fn best_day(&self) -> Option<(u32, f64)> {
        self.points
            .windows(2)
            .map(|w| (w[1].day, w[1].value - w[0].value))
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_shape() -> ShapeConfig {
        ShapeConfig::default()
    }

    #[test]
    fn test_flat_shape_reference_values() {
        let points = synthesize(5, 100.0, &flat_shape());

        let days: Vec<u32> = points.iter().map(|p| p.day).collect();
        let values: Vec<f64> = points.iter().map(|p| p.value).collect();

        assert_eq!(days, vec![1, 2, 3, 4, 5]);
        assert_eq!(values, vec![0.0, 23.0, 48.0, 73.0, 100.0]);
    }

    #[test]
    fn test_starts_at_zero_and_hits_target_exactly() {
        for target in [0.0, 1.0, 99.5, 48_500.0, 1_250_000.0] {
            for length in [2, 7, 30, 68] {
                let points = synthesize(length, target, &Metric::Revenue.shape());
                assert_eq!(points.len(), length);
                assert_eq!(points[0].value, 0.0);
                assert_eq!(points[length - 1].value, target);
            }
        }
    }

    #[test]
    fn test_monotonic_non_decreasing() {
        let points = synthesize(68, 48_500.0, &Metric::Revenue.shape());
        for pair in points.windows(2) {
            assert!(
                pair[1].value >= pair[0].value,
                "day {} dipped: {} -> {}",
                pair[1].day,
                pair[0].value,
                pair[1].value
            );
        }
    }

    #[test]
    fn test_week_boundary_flags() {
        let points = synthesize(30, 5_000.0, &flat_shape());
        for p in &points {
            assert_eq!(p.is_week_boundary, p.day % 7 == 0, "day {}", p.day);
        }
    }

    #[test]
    fn test_degenerate_single_point() {
        for length in [0, 1] {
            let points = synthesize(length, 500.0, &flat_shape());
            assert_eq!(
                points,
                vec![SeriesPoint {
                    day: 1,
                    value: 0.0,
                    is_week_boundary: true,
                }]
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let shape = Metric::Views.shape();
        let a = synthesize(68, 1_250_000.0, &shape);
        let b = synthesize(68, 1_250_000.0, &shape);
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_target_collapses_to_flat_zero() {
        let points = synthesize(10, 0.0, &flat_shape());
        assert!(points.iter().all(|p| p.value == 0.0));
    }

    #[test]
    fn test_weekly_bonus_lands_on_week_close() {
        // With a large bonus the biggest step onto day 7 must beat its
        // neighbors (increment index 5 covers the step onto day 7).
        let shape = ShapeConfig {
            weekly_bonus: 1_000.0,
            ..ShapeConfig::default()
        };
        let increments = raw_increments(10, &shape);
        let boosted = increments[5];
        assert!(increments
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 5)
            .all(|(_, inc)| *inc < boosted));
    }

    #[test]
    fn test_segment_multipliers_shape_trend_phases() {
        let shape = ShapeConfig {
            segment_multipliers: vec![1.0, 3.0],
            ..ShapeConfig::default()
        };
        let increments = raw_increments(9, &shape);
        // 8 increments, segment size 4: back half runs hotter than the front
        let front: f64 = increments[..4].iter().sum();
        let back: f64 = increments[4..].iter().sum();
        assert!(back > front * 2.0);
    }

    #[test]
    fn test_container_stats() {
        let series = TrendSeries::synthesize(Metric::Revenue, SERIES_DAYS, 48_500.0);
        assert_eq!(series.len(), SERIES_DAYS);
        assert_eq!(series.total(), 48_500.0);
        assert_eq!(series.max_value(), 48_500.0);
        assert!(series.daily_average() > 0.0);

        let (best_day, best_gain) = series.best_day().unwrap();
        assert!(best_day >= 2);
        assert!(best_gain >= series.daily_average());
    }

    #[test]
    fn test_series_epoch() {
        assert_eq!(series_epoch().to_string(), "2025-11-01");
    }
}
