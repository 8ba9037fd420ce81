//! # studio-state
//!
//! Reactive state management for the Creator Studio dashboard.
//! Uses Leptos signals so selection changes re-run only the derived
//! computations that depend on them.

pub mod analytics;

pub use analytics::*;

use leptos::prelude::*;

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Global application state with reactive signals
#[derive(Clone)]
pub struct AppState {
    /// Analytics selection + hover
    pub analytics: AnalyticsState,
    /// Derived target/series pipeline
    pub computed: AnalyticsComputed,
}

impl AppState {
    pub fn new() -> Self {
        let analytics = AnalyticsState::new();
        let computed = AnalyticsComputed::new(&analytics);
        Self {
            analytics,
            computed,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// CONTEXT HELPERS
// ============================================================================

/// Provide app state context to the component tree
pub fn provide_app_state() -> AppState {
    let state = AppState::new();
    provide_context(state.clone());
    state
}

/// Use app state from context
pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}

/// Try to get app state from context (returns None if not provided)
pub fn try_use_app_state() -> Option<AppState> {
    use_context::<AppState>()
}
