//! Metric and category selection model
//!
//! The dashboard tracks one metric at a time, filtered by a revenue stream
//! and a project category. Each selector resolves to a multiplier applied to
//! the metric's base target before series synthesis.

use crate::{CompactFormatter, GroupedFormatter, ShapeConfig, ValueFormatter};
use serde::{Deserialize, Serialize};

// ============================================================================
// UNITS
// ============================================================================

/// Unit rendering for a metric value: either a prefix symbol (e.g. a
/// currency sign) or a suffix label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricUnit {
    Prefix(&'static str),
    Suffix(&'static str),
}

impl MetricUnit {
    /// Wrap an already-formatted value in the unit
    pub fn apply(&self, formatted: &str) -> String {
        match self {
            Self::Prefix(p) => format!("{}{}", p, formatted),
            Self::Suffix(s) => format!("{}{}", formatted, s),
        }
    }
}

// ============================================================================
// METRICS
// ============================================================================

/// Dashboard metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    Revenue,
    Views,
    WatchHours,
}

impl Metric {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Revenue => "Revenue",
            Self::Views => "Views",
            Self::WatchHours => "Watch Hours",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Revenue => "metric-revenue",
            Self::Views => "metric-views",
            Self::WatchHours => "metric-watch-hours",
        }
    }

    pub fn unit(&self) -> MetricUnit {
        match self {
            Self::Revenue => MetricUnit::Prefix("$"),
            Self::Views => MetricUnit::Suffix(""),
            Self::WatchHours => MetricUnit::Suffix("h"),
        }
    }

    /// Cumulative target for the full period before category multipliers
    pub fn base_target(&self) -> f64 {
        match self {
            Self::Revenue => 48_500.0,
            Self::Views => 1_250_000.0,
            Self::WatchHours => 8_400.0,
        }
    }

    /// Shape of the daily increment curve for this metric
    pub fn shape(&self) -> ShapeConfig {
        match self {
            Self::Revenue => ShapeConfig {
                daily_base: 40.0,
                daily_wave: 14.0,
                weekly_bonus: 60.0,
                daily_drift: 0.8,
                segment_multipliers: vec![0.6, 1.0, 1.5],
            },
            Self::Views => ShapeConfig {
                daily_base: 900.0,
                daily_wave: 320.0,
                weekly_bonus: 1_400.0,
                daily_drift: 12.0,
                segment_multipliers: vec![0.7, 1.0, 1.3, 1.6],
            },
            Self::WatchHours => ShapeConfig {
                daily_base: 7.0,
                daily_wave: 2.5,
                weekly_bonus: 9.0,
                daily_drift: 0.1,
                segment_multipliers: vec![0.8, 1.0, 1.4],
            },
        }
    }

    /// Full-precision value with unit, for tooltips and stat cards
    pub fn format_value(&self, value: f64) -> String {
        self.unit().apply(&GroupedFormatter.format(value))
    }

    /// Compact value with unit, for axis labels
    pub fn format_axis(&self, value: f64) -> String {
        self.unit().apply(&CompactFormatter.format(value))
    }

    pub fn all() -> &'static [Self] {
        &[Self::Revenue, Self::Views, Self::WatchHours]
    }
}

impl Default for Metric {
    fn default() -> Self {
        Self::Revenue
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// CATEGORY SELECTORS
// ============================================================================

/// Revenue stream filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevenueStream {
    All,
    Memberships,
    Tips,
    Shop,
}

impl RevenueStream {
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All streams",
            Self::Memberships => "Memberships",
            Self::Tips => "Tips",
            Self::Shop => "Shop",
        }
    }

    /// Share of the base target attributed to this stream
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::All => 1.0,
            Self::Memberships => 0.55,
            Self::Tips => 0.15,
            Self::Shop => 0.30,
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::All, Self::Memberships, Self::Tips, Self::Shop]
    }
}

impl Default for RevenueStream {
    fn default() -> Self {
        Self::All
    }
}

/// Project category filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectCategory {
    All,
    Comics,
    Novels,
    Podcasts,
}

impl ProjectCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All projects",
            Self::Comics => "Comics",
            Self::Novels => "Novels",
            Self::Podcasts => "Podcasts",
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            Self::All => 1.0,
            Self::Comics => 0.45,
            Self::Novels => 0.35,
            Self::Podcasts => 0.20,
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::All, Self::Comics, Self::Novels, Self::Podcasts]
    }
}

impl Default for ProjectCategory {
    fn default() -> Self {
        Self::All
    }
}

/// Resolve the cumulative target for a selection
pub fn resolve_target(metric: Metric, stream: RevenueStream, category: ProjectCategory) -> f64 {
    (metric.base_target() * stream.multiplier() * category.multiplier()).round()
}
