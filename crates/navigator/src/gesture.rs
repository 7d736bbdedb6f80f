//! Swipe gesture math.
//!
//! Offsets are expressed in percent of the viewport, the same unit the
//! stage track is translated by. Stage `i` rests at `-(i * 100)` percent.

use festival_core::config::NavigatorConfig;
use serde::Serialize;

/// Pointer position in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Dominant direction of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DragAxis {
    /// Navigation intent; the host should suppress vertical scrolling
    Horizontal,
    /// Page scroll; navigation is not engaged
    Vertical,
}

impl DragAxis {
    /// Horizontal only when horizontal travel strictly dominates.
    pub fn classify(delta_x: f64, delta_y: f64) -> Self {
        if delta_x.abs() > delta_y.abs() {
            DragAxis::Horizontal
        } else {
            DragAxis::Vertical
        }
    }
}

/// Direction a committed swipe moves the stage index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Dragged left
    Next,
    /// Dragged right
    Previous,
}

/// Commit thresholds and boundary resistance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    pub distance_threshold_px: f64,
    pub velocity_threshold: f64,
    pub boundary_damping: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self::from(&NavigatorConfig::default())
    }
}

impl From<&NavigatorConfig> for GestureConfig {
    fn from(config: &NavigatorConfig) -> Self {
        Self {
            distance_threshold_px: config.distance_threshold_px,
            velocity_threshold: config.velocity_threshold,
            boundary_damping: config.boundary_damping,
        }
    }
}

impl GestureConfig {
    /// Decide whether a released horizontal drag changes stage.
    ///
    /// Distance and velocity qualify independently: a short fast flick and
    /// a slow long drag both commit.
    pub fn commit_direction(&self, delta_x: f64, elapsed_ms: f64) -> Option<SwipeDirection> {
        let velocity = release_velocity(delta_x, elapsed_ms);
        let far_enough = delta_x.abs() > self.distance_threshold_px;
        let fast_enough = velocity > self.velocity_threshold;

        if !(far_enough || fast_enough) {
            return None;
        }

        if delta_x < 0.0 {
            Some(SwipeDirection::Next)
        } else if delta_x > 0.0 {
            Some(SwipeDirection::Previous)
        } else {
            None
        }
    }

    /// Damping factor for a drag at `index` of `stage_count` stages.
    pub fn damping(&self, index: usize, stage_count: usize, delta_x: f64) -> f64 {
        if is_past_boundary(index, stage_count, delta_x) {
            self.boundary_damping
        } else {
            1.0
        }
    }
}

/// Resting offset of a stage, in percent.
#[inline]
pub fn resting_offset(index: usize) -> f64 {
    -(index as f64) * 100.0
}

/// Absolute speed in px/ms. Elapsed time is floored at 1 ms.
#[inline]
pub fn release_velocity(delta_x: f64, elapsed_ms: f64) -> f64 {
    delta_x.abs() / elapsed_ms.max(1.0)
}

/// True when dragging right on the first stage or left on the last.
#[inline]
pub fn is_past_boundary(index: usize, stage_count: usize, delta_x: f64) -> bool {
    (index == 0 && delta_x > 0.0) || (index + 1 >= stage_count && delta_x < 0.0)
}

/// Visual offset while dragging, in percent.
///
/// A non-positive viewport width leaves the track at rest.
pub fn drag_offset(index: usize, delta_x: f64, viewport_width: f64, damping: f64) -> f64 {
    let base = resting_offset(index);
    if !(viewport_width > 0.0) {
        return base;
    }
    base + delta_x / viewport_width * 100.0 * damping
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(DragAxis::classify(-30.0, 10.0), DragAxis::Horizontal);
        assert_eq!(DragAxis::classify(5.0, -40.0), DragAxis::Vertical);
        // Ties are not horizontal
        assert_eq!(DragAxis::classify(10.0, 10.0), DragAxis::Vertical);
        assert_eq!(DragAxis::classify(0.0, 0.0), DragAxis::Vertical);
    }

    #[test]
    fn test_distance_alone_commits() {
        let config = GestureConfig::default();
        // 60px over a full second: 0.06 px/ms
        assert_eq!(config.commit_direction(-60.0, 1000.0), Some(SwipeDirection::Next));
        assert_eq!(config.commit_direction(60.0, 1000.0), Some(SwipeDirection::Previous));
    }

    #[test]
    fn test_velocity_alone_commits() {
        let config = GestureConfig::default();
        // 10px in 20ms: 0.5 px/ms
        assert_eq!(config.commit_direction(-10.0, 20.0), Some(SwipeDirection::Next));
    }

    #[test]
    fn test_neither_threshold() {
        let config = GestureConfig::default();
        // 20px in 200ms: 0.1 px/ms
        assert_eq!(config.commit_direction(20.0, 200.0), None);
        // Exactly on the thresholds does not commit
        assert_eq!(config.commit_direction(50.0, 1000.0), None);
    }

    #[test]
    fn test_zero_elapsed_is_floored() {
        assert_eq!(release_velocity(-3.0, 0.0), 3.0);
        assert_eq!(release_velocity(-3.0, -5.0), 3.0);
    }

    #[test]
    fn test_resting_offsets() {
        assert_eq!(resting_offset(0), 0.0);
        assert_eq!(resting_offset(3), -300.0);
    }

    #[test]
    fn test_boundary_damping() {
        let config = GestureConfig::default();
        assert_eq!(config.damping(0, 5, 40.0), 0.3);
        assert_eq!(config.damping(0, 5, -40.0), 1.0);
        assert_eq!(config.damping(4, 5, -40.0), 0.3);
        assert_eq!(config.damping(4, 5, 40.0), 1.0);
        assert_eq!(config.damping(2, 5, 40.0), 1.0);
        // A single stage resists both ways
        assert_eq!(config.damping(0, 1, -40.0), 0.3);
    }

    #[test]
    fn test_drag_offset() {
        assert_eq!(drag_offset(1, -100.0, 400.0, 1.0), -125.0);
        assert!((drag_offset(0, 100.0, 400.0, 0.3) - 7.5).abs() < 1e-9);
        assert_eq!(drag_offset(2, 100.0, 0.0, 1.0), -200.0);
    }
}
