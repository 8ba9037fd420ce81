//! Calendar date labels for the horizontal axis
//!
//! Day indices are anchored at a fixed epoch; a sparse subset becomes axis
//! tick labels, with the final day always included.

use chrono::{Duration, NaiveDate};

/// One labeled position on the horizontal axis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTick {
    pub index: usize,
    pub iso_date: String,
}

/// ISO `YYYY-MM-DD` date for a day index relative to the epoch
pub fn iso_date(epoch: NaiveDate, index: usize) -> String {
    (epoch + Duration::days(index as i64))
        .format("%Y-%m-%d")
        .to_string()
}

/// Select tick indices `0, interval, 2*interval, ...` and label them with
/// calendar dates. The last day is appended when the stride misses it.
pub fn label(length: usize, epoch: NaiveDate, tick_interval_days: usize) -> Vec<DateTick> {
    if length == 0 {
        return Vec::new();
    }

    let interval = tick_interval_days.max(1);
    let mut ticks: Vec<DateTick> = (0..length)
        .step_by(interval)
        .map(|index| DateTick {
            index,
            iso_date: iso_date(epoch, index),
        })
        .collect();

    if ticks.last().map(|t| t.index) != Some(length - 1) {
        ticks.push(DateTick {
            index: length - 1,
            iso_date: iso_date(epoch, length - 1),
        });
    }

    ticks
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_core::series_epoch;

    #[test]
    fn test_reference_labels() {
        let ticks = label(68, series_epoch(), 7);

        assert_eq!(ticks.first().map(|t| t.index), Some(0));
        assert_eq!(ticks.first().map(|t| t.iso_date.as_str()), Some("2025-11-01"));
        assert_eq!(ticks.last().map(|t| t.index), Some(67));
        assert_eq!(ticks.last().map(|t| t.iso_date.as_str()), Some("2026-01-07"));
    }

    #[test]
    fn test_final_day_appended_when_stride_misses() {
        let ticks = label(10, series_epoch(), 7);
        let indices: Vec<usize> = ticks.iter().map(|t| t.index).collect();
        assert_eq!(indices, vec![0, 7, 9]);
    }

    #[test]
    fn test_final_day_not_duplicated_on_exact_stride() {
        let ticks = label(8, series_epoch(), 7);
        let indices: Vec<usize> = ticks.iter().map(|t| t.index).collect();
        assert_eq!(indices, vec![0, 7]);
    }

    #[test]
    fn test_month_rollover() {
        assert_eq!(iso_date(series_epoch(), 29), "2025-11-30");
        assert_eq!(iso_date(series_epoch(), 30), "2025-12-01");
    }

    #[test]
    fn test_single_day() {
        let ticks = label(1, series_epoch(), 7);
        assert_eq!(ticks.len(), 1);
        assert_eq!(ticks[0].index, 0);
    }

    #[test]
    fn test_empty_series() {
        assert!(label(0, series_epoch(), 7).is_empty());
    }
}
