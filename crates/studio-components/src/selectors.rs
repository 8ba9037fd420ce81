//! Metric tabs and category filter rows

use leptos::prelude::*;
use studio_core::{Metric, ProjectCategory, RevenueStream};
use studio_state::use_app_state;

#[component]
pub fn MetricTabs() -> impl IntoView {
    let state = use_app_state();
    let active = state.analytics.metric;

    view! {
        <div class="metric-tabs">
            {Metric::all().iter().map(|&metric| {
                let analytics = state.analytics.clone();
                view! {
                    <button
                        class="metric-tab"
                        class:active=move || active.get() == metric
                        on:click=move |_| analytics.set_metric(metric)
                    >
                        {metric.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn StreamSelector() -> impl IntoView {
    let state = use_app_state();
    let active = state.analytics.stream;

    view! {
        <div class="filter-row">
            <span class="filter-label">"Revenue stream"</span>
            {RevenueStream::all().iter().map(|&stream| {
                let analytics = state.analytics.clone();
                view! {
                    <button
                        class="filter-chip"
                        class:active=move || active.get() == stream
                        on:click=move |_| analytics.set_stream(stream)
                    >
                        {stream.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn CategorySelector() -> impl IntoView {
    let state = use_app_state();
    let active = state.analytics.category;

    view! {
        <div class="filter-row">
            <span class="filter-label">"Projects"</span>
            {ProjectCategory::all().iter().map(|&category| {
                let analytics = state.analytics.clone();
                view! {
                    <button
                        class="filter-chip"
                        class:active=move || active.get() == category
                        on:click=move |_| analytics.set_category(category)
                    >
                        {category.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
