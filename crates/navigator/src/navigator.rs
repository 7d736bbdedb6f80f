//! Stage navigator state machine.
//!
//! ```text
//!            drag_start              drag_end (commit)
//!   Idle ─────────────────▶ Dragging ──────────────────▶ Transitioning
//!    ▲  ◀──────────────────    │                              │
//!    │   drag_end (snap back)  │ cancel_drag                  │ tick / finish
//!    │◀────────────────────────┘                              │
//!    └────────────────────────────────────────────────────────┘
//!   Idle ── go_to / next / previous ──▶ Transitioning
//! ```
//!
//! Time is supplied by the host as milliseconds on any monotonic clock.
//! Calls that are not valid in the current state are ignored.

use crate::error::{NavigatorError, Result};
use crate::event::NavigationEvent;
use crate::gesture::{self, DragAxis, GestureConfig, Point, SwipeDirection};
use crate::stage::StageSet;
use festival_core::config::NavigatorConfig;
use serde::Serialize;

/// Where the navigator is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum NavigatorState {
    Idle {
        index: usize,
    },
    Dragging {
        index: usize,
        origin: Point,
        current: Point,
        started_at: f64,
    },
    Transitioning {
        from: usize,
        to: usize,
        started_at: f64,
    },
}

/// One frame of drag feedback for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DragFrame {
    /// Track offset in percent of the viewport
    pub offset_percent: f64,
    pub axis: DragAxis,
    /// Rubber-band resistance applied
    pub damped: bool,
    pub delta_x: f64,
    pub delta_y: f64,
}

impl DragFrame {
    /// The host should cancel native scrolling for this move.
    pub fn prevents_scroll(&self) -> bool {
        self.axis == DragAxis::Horizontal
    }
}

/// Result of releasing a drag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DragOutcome {
    /// Stage changed; a transition is now running
    Committed(NavigationEvent),
    /// Thresholds not met, gesture was vertical, or the swipe pointed past a
    /// boundary: the track settles back on the current stage
    SnapBack,
    /// No drag was in progress
    Ignored,
}

/// Timing and gesture settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigatorOptions {
    pub transition_ms: f64,
    pub gesture: GestureConfig,
}

impl Default for NavigatorOptions {
    fn default() -> Self {
        Self::from(&NavigatorConfig::default())
    }
}

impl From<&NavigatorConfig> for NavigatorOptions {
    fn from(config: &NavigatorConfig) -> Self {
        Self {
            transition_ms: config.transition_ms,
            gesture: GestureConfig::from(config),
        }
    }
}

/// Controller over an ordered list of stages.
#[derive(Debug, Clone)]
pub struct Navigator {
    stages: StageSet,
    options: NavigatorOptions,
    state: NavigatorState,
    viewport_width: f64,
}

impl Navigator {
    /// Start idle on the first stage.
    pub fn new(stages: StageSet, options: NavigatorOptions) -> Self {
        Self {
            stages,
            options,
            state: NavigatorState::Idle { index: 0 },
            viewport_width: 0.0,
        }
    }

    pub fn from_config(config: &NavigatorConfig) -> Result<Self> {
        let stages = StageSet::new(config.stages.iter().cloned())?;
        let options = NavigatorOptions::from(config);
        if !(options.gesture.boundary_damping > 0.0 && options.gesture.boundary_damping <= 1.0) {
            return Err(NavigatorError::InvalidSetting(format!(
                "boundary_damping {} not in (0, 1]",
                options.gesture.boundary_damping
            )));
        }
        Ok(Self::new(stages, options))
    }

    pub fn stages(&self) -> &StageSet {
        &self.stages
    }

    pub fn options(&self) -> &NavigatorOptions {
        &self.options
    }

    pub fn state(&self) -> NavigatorState {
        self.state
    }

    /// Index the renderer should highlight. During a transition this is the
    /// destination.
    pub fn current_index(&self) -> usize {
        match self.state {
            NavigatorState::Idle { index } | NavigatorState::Dragging { index, .. } => index,
            NavigatorState::Transitioning { to, .. } => to,
        }
    }

    pub fn current_stage(&self) -> &str {
        self.stages.name(self.current_index()).unwrap_or_default()
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, NavigatorState::Transitioning { .. })
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, NavigatorState::Dragging { .. })
    }

    /// Resting offset of the current stage, in percent.
    pub fn resting_offset(&self) -> f64 {
        gesture::resting_offset(self.current_index())
    }

    /// Viewport width in CSS pixels; drag offsets stay at rest until set.
    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = if width.is_finite() { width.max(0.0) } else { 0.0 };
    }

    /// Start a transition to `index`.
    ///
    /// Ignored unless idle, in range and different from the current stage.
    pub fn go_to(&mut self, index: usize, now: f64) -> Option<NavigationEvent> {
        let NavigatorState::Idle { index: current } = self.state else {
            tracing::debug!(state = ?self.state, index, "go_to ignored: navigator busy");
            return None;
        };

        if !self.stages.contains_index(index) {
            tracing::debug!(index, stages = self.stages.len(), "go_to ignored: out of range");
            return None;
        }
        if index == current {
            return None;
        }

        let event = NavigationEvent {
            from_stage: self.stage_name(current),
            to_stage: self.stage_name(index),
            from_index: current,
            index,
        };

        self.state = if self.options.transition_ms > 0.0 {
            NavigatorState::Transitioning {
                from: current,
                to: index,
                started_at: now,
            }
        } else {
            NavigatorState::Idle { index }
        };

        tracing::debug!(from = %event.from_stage, to = %event.to_stage, "Stage transition started");
        Some(event)
    }

    /// Jump to a stage by name, as a deep link would.
    pub fn go_to_stage(&mut self, name: &str, now: f64) -> Option<NavigationEvent> {
        let index = self.stages.index_of(name)?;
        self.go_to(index, now)
    }

    /// Advance one stage; a no-op on the last stage.
    pub fn next(&mut self, now: f64) -> Option<NavigationEvent> {
        let NavigatorState::Idle { index } = self.state else {
            return None;
        };
        let target = (index + 1).min(self.stages.last_index());
        self.go_to(target, now)
    }

    /// Go back one stage; a no-op on the first stage.
    pub fn previous(&mut self, now: f64) -> Option<NavigationEvent> {
        let NavigatorState::Idle { index } = self.state else {
            return None;
        };
        self.go_to(index.saturating_sub(1), now)
    }

    /// Complete the running transition once its duration has elapsed.
    ///
    /// Returns true when the navigator became idle on this call.
    pub fn tick(&mut self, now: f64) -> bool {
        match self.state {
            NavigatorState::Transitioning { started_at, .. }
                if now - started_at >= self.options.transition_ms =>
            {
                self.finish_transition()
            }
            _ => false,
        }
    }

    /// Complete the running transition immediately.
    pub fn finish_transition(&mut self) -> bool {
        match self.state {
            NavigatorState::Transitioning { to, .. } => {
                self.state = NavigatorState::Idle { index: to };
                true
            }
            _ => false,
        }
    }

    /// Begin a drag. Only accepted while idle.
    pub fn drag_start(&mut self, point: Point, now: f64) -> bool {
        let NavigatorState::Idle { index } = self.state else {
            tracing::debug!(state = ?self.state, "drag_start ignored");
            return false;
        };

        self.state = NavigatorState::Dragging {
            index,
            origin: point,
            current: point,
            started_at: now,
        };
        true
    }

    /// Track pointer movement and report where the stage track should sit.
    pub fn drag_move(&mut self, point: Point) -> Option<DragFrame> {
        let NavigatorState::Dragging {
            index,
            origin,
            ref mut current,
            ..
        } = self.state
        else {
            return None;
        };
        *current = point;

        let delta_x = point.x - origin.x;
        let delta_y = point.y - origin.y;
        let axis = DragAxis::classify(delta_x, delta_y);

        let frame = match axis {
            DragAxis::Horizontal => {
                let damping = self.options.gesture.damping(index, self.stages.len(), delta_x);
                DragFrame {
                    offset_percent: gesture::drag_offset(index, delta_x, self.viewport_width, damping),
                    axis,
                    damped: damping < 1.0,
                    delta_x,
                    delta_y,
                }
            }
            DragAxis::Vertical => DragFrame {
                offset_percent: gesture::resting_offset(index),
                axis,
                damped: false,
                delta_x,
                delta_y,
            },
        };

        Some(frame)
    }

    /// Release a drag and either commit a stage change or snap back.
    pub fn drag_end(&mut self, point: Point, now: f64) -> DragOutcome {
        let NavigatorState::Dragging {
            index,
            origin,
            started_at,
            ..
        } = self.state
        else {
            tracing::debug!(state = ?self.state, "drag_end ignored");
            return DragOutcome::Ignored;
        };

        // Drag state is cleared whatever the outcome
        self.state = NavigatorState::Idle { index };

        let delta_x = point.x - origin.x;
        let delta_y = point.y - origin.y;
        if DragAxis::classify(delta_x, delta_y) == DragAxis::Vertical {
            return DragOutcome::SnapBack;
        }

        let elapsed = now - started_at;
        let committed = match self.options.gesture.commit_direction(delta_x, elapsed) {
            Some(SwipeDirection::Next) => self.next(now),
            Some(SwipeDirection::Previous) => self.previous(now),
            None => None,
        };

        match committed {
            Some(event) => DragOutcome::Committed(event),
            None => DragOutcome::SnapBack,
        }
    }

    /// Abandon a drag without committing (touchcancel).
    pub fn cancel_drag(&mut self) -> bool {
        match self.state {
            NavigatorState::Dragging { index, .. } => {
                self.state = NavigatorState::Idle { index };
                true
            }
            _ => false,
        }
    }

    fn stage_name(&self, index: usize) -> String {
        self.stages.name(index).unwrap_or_default().to_string()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(StageSet::default(), NavigatorOptions::default())
    }
}
