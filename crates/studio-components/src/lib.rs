//! # studio-components
//!
//! Leptos UI components for the Creator Studio analytics dashboard.

pub mod dashboard;
pub mod selectors;

pub use dashboard::*;
pub use selectors::*;
