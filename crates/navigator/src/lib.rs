//! Swipeable stage navigation for the festival site.
//!
//! This crate provides:
//! - An ordered [`StageSet`] of named views
//! - A [`Navigator`] state machine driven by discrete commands and drags
//! - Distance-or-velocity swipe commits with rubber-band boundaries
//! - [`NavigationEvent`]s for analytics and address-bar sync
//! - WASM bindings for browser usage
//!
//! # Example
//!
//! ```
//! use festival_navigator::{DragOutcome, Navigator, Point};
//!
//! let mut nav = Navigator::default();
//! nav.set_viewport_width(390.0);
//!
//! nav.drag_start(Point::new(300.0, 200.0), 0.0);
//! nav.drag_move(Point::new(220.0, 205.0));
//! let outcome = nav.drag_end(Point::new(220.0, 205.0), 400.0);
//!
//! assert!(matches!(outcome, DragOutcome::Committed(ref e) if e.to_stage == "projects"));
//! assert!(nav.is_animating());
//! nav.tick(1_000.0);
//! assert_eq!(nav.current_index(), 1);
//! ```

mod error;
mod event;
pub mod gesture;
mod navigator;
mod stage;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{NavigatorError, Result};
pub use event::NavigationEvent;
pub use gesture::{DragAxis, GestureConfig, Point, SwipeDirection};
pub use navigator::{DragFrame, DragOutcome, Navigator, NavigatorOptions, NavigatorState};
pub use stage::StageSet;
