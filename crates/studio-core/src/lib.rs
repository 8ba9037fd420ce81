//! # studio-core
//!
//! Core domain types for the Creator Studio analytics dashboard.
//! Implements Strategy pattern for value formatting.

pub mod metric;
pub mod series;

pub use metric::*;
pub use series::*;

// ============================================================================
// STRATEGY PATTERN: Formatters
// ============================================================================

/// Strategy trait for formatting metric values
pub trait ValueFormatter: Send + Sync {
    fn format(&self, value: f64) -> String;
}

/// Compact formatter for axis labels (K, M, B suffixes)
#[derive(Debug, Clone, Default)]
pub struct CompactFormatter;

impl ValueFormatter for CompactFormatter {
    fn format(&self, value: f64) -> String {
        let abs = value.abs();
        let sign = if value < 0.0 { "-" } else { "" };

        if abs >= 1_000_000_000.0 {
            format!("{}{:.1}B", sign, abs / 1_000_000_000.0)
        } else if abs >= 1_000_000.0 {
            format!("{}{:.1}M", sign, abs / 1_000_000.0)
        } else if abs >= 10_000.0 {
            format!("{}{}K", sign, (abs / 1_000.0).round())
        } else if abs >= 1_000.0 {
            format!("{}{:.1}K", sign, abs / 1_000.0)
        } else {
            format!("{}{:.0}", sign, abs)
        }
    }
}

/// Full-precision formatter with thousands grouping (tooltips, stat cards)
#[derive(Debug, Clone, Default)]
pub struct GroupedFormatter;

impl ValueFormatter for GroupedFormatter {
    fn format(&self, value: f64) -> String {
        let rounded = value.round().max(0.0) as u64;
        let digits = rounded.to_string();

        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }
}

// ============================================================================
// COLOR CONSTANTS
// ============================================================================

pub mod colors {
    pub const ACCENT: &str = "#8b5cf6";
    pub const ACCENT_SOFT: &str = "#a78bfa";
    pub const POSITIVE: &str = "#22c55e";
    pub const WARN: &str = "#fbbf24";
    pub const BG_VOID: &str = "#0a0a0a";
    pub const BG_PANEL: &str = "#141414";
    pub const BG_ELEVATED: &str = "#1a1a1a";
    pub const BORDER: &str = "#2a2a2a";
    pub const TEXT_PRIMARY: &str = "#fafafa";
    pub const TEXT_MUTED: &str = "#888888";
    pub const GRID: &str = "#1f1f1f";

    pub fn accent_alpha(alpha: f64) -> String {
        format!("rgba(139, 92, 246, {:.2})", alpha)
    }
}
