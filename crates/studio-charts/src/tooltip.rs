//! Tooltip placement
//!
//! Computes a clamped on-screen rectangle for the value tooltip anchored to
//! a hovered point, keeping it inside the scrollable plot even at the edges.

/// Inset from the plot's left/right edges
pub const EDGE_INSET: f64 = 12.0;

/// Vertical lift above the anchored point
pub const POINTER_RISE: f64 = 80.0;

/// Tooltip box size in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipSize {
    pub width: f64,
    pub height: f64,
}

/// Resolved top-left corner for the tooltip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipPosition {
    pub left: f64,
    pub top: f64,
}

/// Center the tooltip over the anchor point, clamped into the plot bounds.
/// The left inset wins when the bounds are narrower than the tooltip.
pub fn position(x: f64, y: f64, size: TooltipSize, bounds_width: f64) -> TooltipPosition {
    let left = (x - size.width / 2.0)
        .min(bounds_width - size.width - EDGE_INSET)
        .max(EDGE_INSET);
    let top = (y - POINTER_RISE).max(EDGE_INSET);

    TooltipPosition { left, top }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: TooltipSize = TooltipSize {
        width: 120.0,
        height: 52.0,
    };

    #[test]
    fn test_centered_over_anchor() {
        let pos = position(400.0, 200.0, SIZE, 800.0);
        assert_eq!(pos.left, 340.0);
        assert_eq!(pos.top, 120.0);
    }

    #[test]
    fn test_clamped_at_left_edge() {
        let pos = position(10.0, 200.0, SIZE, 800.0);
        assert_eq!(pos.left, EDGE_INSET);
    }

    #[test]
    fn test_clamped_at_right_edge() {
        let pos = position(790.0, 200.0, SIZE, 800.0);
        assert_eq!(pos.left, 800.0 - SIZE.width - EDGE_INSET);
    }

    #[test]
    fn test_contained_for_any_anchor() {
        for x in (0..=800).step_by(25) {
            let pos = position(x as f64, 150.0, SIZE, 800.0);
            assert!(pos.left >= EDGE_INSET);
            assert!(pos.left + SIZE.width <= 800.0 - EDGE_INSET);
        }
    }

    #[test]
    fn test_top_floor_near_plot_top() {
        let pos = position(400.0, 30.0, SIZE, 800.0);
        assert_eq!(pos.top, EDGE_INSET);
    }
}
