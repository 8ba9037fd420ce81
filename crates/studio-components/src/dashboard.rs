//! Analytics dashboard layout

use leptos::prelude::*;
use studio_charts::TrendChart;
use studio_state::use_app_state;

use crate::{CategorySelector, MetricTabs, StreamSelector};

#[component]
pub fn AnalyticsDashboard() -> impl IntoView {
    let state = use_app_state();
    let series = state.computed.series;
    let hover = state.analytics.hover;

    view! {
        <div class="analytics-dashboard">
            <header class="dash-header">
                <h1 class="dash-title">"Analytics"</h1>
                <MetricTabs />
            </header>

            <div class="dash-filters">
                <StreamSelector />
                <CategorySelector />
            </div>

            <section class="dash-summary">
                <SummaryCards />
            </section>

            <section class="dash-chart">
                <div class="panel">
                    <div class="panel-header">
                        <span class="panel-title">
                            {move || series.with(|s| format!("{} over time", s.metric.label()))}
                        </span>
                    </div>
                    <div class="panel-content">
                        <TrendChart series=Signal::from(series) hover=hover />
                    </div>
                </div>
            </section>
        </div>
    }
}

#[component]
fn SummaryCards() -> impl IntoView {
    let state = use_app_state();
    let series = state.computed.series;

    view! {
        <div class="summary-cards">
            <div class="summary-card">
                <span class="card-label">"Total"</span>
                <span class="card-value">
                    {move || series.with(|s| s.metric.format_value(s.total()))}
                </span>
            </div>

            <div class="summary-card">
                <span class="card-label">"Daily average"</span>
                <span class="card-value">
                    {move || series.with(|s| s.metric.format_value(s.daily_average()))}
                </span>
            </div>

            <div class="summary-card">
                <span class="card-label">"Best day"</span>
                <span class="card-value">
                    {move || series.with(|s| {
                        s.best_day()
                            .map(|(day, gain)| {
                                format!("Day {} (+{})", day, s.metric.format_value(gain))
                            })
                            .unwrap_or_else(|| "—".to_string())
                    })}
                </span>
            </div>
        </div>
    }
}
