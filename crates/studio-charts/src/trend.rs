//! Cumulative trend chart component
//!
//! Renders a synthesized series as a scrollable SVG area chart with grid
//! lines, calendar tick labels, week-boundary markers and a pointer-driven
//! tooltip. Hover state lives in the caller so switching the active series
//! can reset it.

use crate::{
    calendar::{self, DateTick},
    pathkit::{area_path, line_path},
    project::{PlotGeometry, ProjectedPoint},
    scale::{self, AxisPlan},
    tooltip::{self, TooltipSize},
};
use leptos::prelude::*;
use studio_core::{TrendSeries, colors, series_epoch};
use wasm_bindgen::JsCast;

/// Vertical space under the plot reserved for date labels
const DATE_BAND: f64 = 34.0;

const TOOLTIP_SIZE: TooltipSize = TooltipSize {
    width: 124.0,
    height: 52.0,
};

/// Trend chart configuration
#[derive(Debug, Clone)]
pub struct TrendChartConfig {
    pub geometry: PlotGeometry,
    pub tick_count: usize,
    pub tick_interval_days: usize,
    /// Optional pinned axis ceiling; never clips data
    pub ceiling: Option<f64>,
}

impl Default for TrendChartConfig {
    fn default() -> Self {
        Self {
            geometry: PlotGeometry::default(),
            tick_count: 5,
            tick_interval_days: 7,
            ceiling: None,
        }
    }
}

/// Internal chart state computed from the active series
#[derive(Clone)]
struct TrendState {
    points: Vec<ProjectedPoint>,
    axis: AxisPlan,
    date_ticks: Vec<DateTick>,
    line: String,
    area: String,
    svg_width: f64,
}

/// Cumulative trend chart component
#[component]
pub fn TrendChart(
    #[prop(into)] series: Signal<TrendSeries>,
    #[prop(into)] hover: RwSignal<Option<usize>>,
    #[prop(optional)] config: Option<TrendChartConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let geometry = config.geometry;
    let tick_count = config.tick_count;
    let tick_interval = config.tick_interval_days;
    let ceiling = config.ceiling;

    let svg_height = geometry.padding_top + geometry.plot_height + DATE_BAND;
    let baseline = geometry.padding_top + geometry.plot_height;

    // Recomputed from scratch whenever the series changes
    let chart_state = move || {
        let s = series.get();
        if s.is_empty() {
            return None;
        }

        let axis = scale::plan(s.max_value(), tick_count, ceiling);
        let points = geometry.project(&s.points, axis.scale_max);
        let date_ticks = calendar::label(s.len(), series_epoch(), tick_interval);

        let pixels: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
        let line = line_path(&pixels);
        let area = area_path(&pixels, baseline);

        Some(TrendState {
            svg_width: geometry.svg_width(s.len()),
            points,
            axis,
            date_ticks,
            line,
            area,
        })
    };

    // Pointer x -> nearest day index, in element-local CSS pixels
    let on_move = move |ev: leptos::ev::MouseEvent| {
        let Some(target) = ev.current_target() else {
            return;
        };
        let Ok(element) = target.dyn_into::<web_sys::Element>() else {
            return;
        };
        let rect = element.get_bounding_client_rect();
        let local_x = ev.client_x() as f64 - rect.left();

        let length = series.with(|s| s.len());
        if let Some(index) = geometry.index_at(local_x, rect.width(), length) {
            hover.set(Some(index));
        }
    };

    view! {
        <div class="trend-chart-scroll" style="overflow-x: auto;">
            {move || {
                chart_state().map(|state| {
                    let svg_width = state.svg_width;

                    view! {
                        <svg
                            class="trend-chart"
                            width=svg_width
                            height=svg_height
                            viewBox=format!("0 0 {} {}", svg_width, svg_height)
                            on:mousemove=on_move
                            on:mouseleave=move |_| hover.set(None)
                        >
                            // Background
                            <rect
                                width=svg_width
                                height=svg_height
                                fill=colors::BG_PANEL
                                rx="4"
                            />

                            // Grid lines + y-axis labels
                            {state.axis.tick_values.iter().map(|&tick| {
                                let y = geometry.y_at(tick, state.axis.scale_max);
                                let label = series.with(|s| s.metric.format_axis(tick));

                                view! {
                                    <g class="trend-grid-row">
                                        <line
                                            x1=geometry.padding_left
                                            y1=y
                                            x2=svg_width - geometry.padding_right
                                            y2=y
                                            stroke=colors::GRID
                                            stroke-width="1"
                                            stroke-dasharray="2,2"
                                        />
                                        <text
                                            x=geometry.padding_left - 8.0
                                            y=y
                                            dy="0.32em"
                                            text-anchor="end"
                                            fill=colors::TEXT_MUTED
                                            font-size="10"
                                            font-family="JetBrains Mono, monospace"
                                        >
                                            {label}
                                        </text>
                                    </g>
                                }
                            }).collect_view()}

                            // Area fill + cumulative line
                            <path d=state.area.clone() fill=colors::accent_alpha(0.18) />
                            <path
                                d=state.line.clone()
                                fill="none"
                                stroke=colors::ACCENT
                                stroke-width="2"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                            />

                            // Week-boundary markers
                            {state.points.iter().filter(|p| p.point.is_week_boundary).map(|p| {
                                view! {
                                    <circle cx=p.x cy=p.y r="2.5" fill=colors::ACCENT_SOFT />
                                }
                            }).collect_view()}

                            // Date tick labels
                            {state.date_ticks.iter().map(|tick| {
                                let x = geometry.x_at(tick.index, state.points.len());
                                view! {
                                    <g transform=format!("translate({}, {})", x, baseline)>
                                        <line y1="0" y2="5" stroke=colors::BORDER />
                                        <text
                                            y="18"
                                            text-anchor="middle"
                                            fill=colors::TEXT_MUTED
                                            font-size="9"
                                            font-family="JetBrains Mono, monospace"
                                        >
                                            {tick.iso_date.clone()}
                                        </text>
                                    </g>
                                }
                            }).collect_view()}

                            // Hover guide + tooltip
                            {move || {
                                let index = hover.get()?;
                                let state = chart_state()?;
                                let p = state.points.get(index)?.clone();

                                let value = series.with(|s| s.metric.format_value(p.point.value));
                                let date = calendar::iso_date(series_epoch(), index);
                                let pos = tooltip::position(p.x, p.y, TOOLTIP_SIZE, state.svg_width);

                                Some(view! {
                                    <g class="trend-hover">
                                        <line
                                            x1=p.x
                                            y1=geometry.padding_top
                                            x2=p.x
                                            y2=baseline
                                            stroke=colors::BORDER
                                            stroke-width="1"
                                            stroke-dasharray="3,3"
                                        />
                                        <circle cx=p.x cy=p.y r="4" fill=colors::ACCENT />

                                        <g transform=format!("translate({}, {})", pos.left, pos.top)>
                                            <rect
                                                width=TOOLTIP_SIZE.width
                                                height=TOOLTIP_SIZE.height
                                                fill=colors::BG_ELEVATED
                                                stroke=colors::BORDER
                                                rx="4"
                                            />
                                            <text
                                                x="10"
                                                y="21"
                                                fill=colors::TEXT_PRIMARY
                                                font-size="12"
                                                font-family="JetBrains Mono, monospace"
                                            >
                                                {value}
                                            </text>
                                            <text
                                                x="10"
                                                y="40"
                                                fill=colors::TEXT_MUTED
                                                font-size="10"
                                                font-family="JetBrains Mono, monospace"
                                            >
                                                {date}
                                            </text>
                                        </g>
                                    </g>
                                })
                            }}
                        </svg>
                    }
                })
            }}
        </div>
    }
}
