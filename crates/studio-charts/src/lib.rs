//! # studio-charts
//!
//! SVG analytics charting for the Creator Studio dashboard, built with
//! Leptos. The chart pipeline is a chain of pure stages: a synthesized
//! series feeds the axis planner, both feed the coordinate projector, and
//! pointer events run the projector's inverse map to drive the tooltip.
//!
//! ## Modules
//!
//! - `scale` - vertical axis planning (nice ceiling + tick values)
//! - `project` - data space <-> pixel space mapping
//! - `calendar` - day index -> calendar date tick labels
//! - `tooltip` - clamped tooltip placement
//! - `pathkit` - SVG path string builders
//! - `trend` - the reactive `TrendChart` component

pub mod calendar;
pub mod pathkit;
pub mod project;
pub mod scale;
pub mod tooltip;
pub mod trend;

pub use calendar::*;
pub use pathkit::*;
pub use project::*;
pub use scale::*;
pub use tooltip::*;
pub use trend::*;

// Re-export colors from studio-core for convenience
pub use studio_core::colors;
