//! Reactive analytics selection and recomputation pipeline
//!
//! Selection signals feed a chain of memoized pure derivations:
//! selection -> resolved target -> synthesized series. Hover is transient
//! and resets whenever any part of the selection changes, so a stale index
//! can never point into a different series.

use leptos::prelude::*;
use studio_core::{
    Metric, ProjectCategory, RevenueStream, SERIES_DAYS, TrendSeries, resolve_target,
};

/// Reactive selection state for the analytics dashboard
#[derive(Clone)]
pub struct AnalyticsState {
    pub metric: RwSignal<Metric>,
    pub stream: RwSignal<RevenueStream>,
    pub category: RwSignal<ProjectCategory>,
    /// Hovered day index, or None when the pointer is outside the plot
    pub hover: RwSignal<Option<usize>>,
}

impl AnalyticsState {
    pub fn new() -> Self {
        Self {
            metric: RwSignal::new(Metric::default()),
            stream: RwSignal::new(RevenueStream::default()),
            category: RwSignal::new(ProjectCategory::default()),
            hover: RwSignal::new(None),
        }
    }

    /// Switch the active metric; clears hover
    pub fn set_metric(&self, metric: Metric) {
        self.metric.set(metric);
        self.hover.set(None);
    }

    /// Switch the revenue stream filter; clears hover
    pub fn set_stream(&self, stream: RevenueStream) {
        self.stream.set(stream);
        self.hover.set(None);
    }

    /// Switch the project category filter; clears hover
    pub fn set_category(&self, category: ProjectCategory) {
        self.category.set(category);
        self.hover.set(None);
    }
}

impl Default for AnalyticsState {
    fn default() -> Self {
        Self::new()
    }
}

/// Memoized derivations of the current selection
#[derive(Clone)]
pub struct AnalyticsComputed {
    /// Cumulative target resolved from metric and category multipliers
    pub target: Memo<f64>,
    /// Synthesized series for the current selection
    pub series: Memo<TrendSeries>,
}

impl AnalyticsComputed {
    pub fn new(state: &AnalyticsState) -> Self {
        let metric = state.metric;
        let stream = state.stream;
        let category = state.category;

        let target = Memo::new(move |_| {
            resolve_target(metric.get(), stream.get(), category.get())
        });

        let series = Memo::new(move |_| {
            TrendSeries::synthesize(metric.get(), SERIES_DAYS, target.get())
        });

        Self { target, series }
    }
}
