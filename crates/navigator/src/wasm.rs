//! WASM bindings for the stage navigator.
//!
//! Results that carry structure are returned as JSON strings, matching the
//! other catalog bindings.

use crate::{Navigator, NavigatorOptions, Point, StageSet};
use wasm_bindgen::prelude::*;

/// Browser-facing wrapper around [`Navigator`].
#[wasm_bindgen]
pub struct StageNavigator {
    inner: Navigator,
}

#[wasm_bindgen]
impl StageNavigator {
    /// Create a navigator from a JSON array of stage names.
    ///
    /// An empty string uses the default five stages.
    #[wasm_bindgen(constructor)]
    pub fn new(stages_json: &str, viewport_width: f64) -> Result<StageNavigator, JsValue> {
        let stages = if stages_json.trim().is_empty() {
            StageSet::default()
        } else {
            let names: Vec<String> = serde_json::from_str(stages_json)
                .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;
            StageSet::new(names).map_err(|e| JsValue::from_str(&e.to_string()))?
        };

        let mut inner = Navigator::new(stages, NavigatorOptions::default());
        inner.set_viewport_width(viewport_width);
        Ok(Self { inner })
    }

    #[wasm_bindgen(getter, js_name = currentIndex)]
    pub fn current_index(&self) -> usize {
        self.inner.current_index()
    }

    #[wasm_bindgen(getter, js_name = isAnimating)]
    pub fn is_animating(&self) -> bool {
        self.inner.is_animating()
    }

    #[wasm_bindgen(getter, js_name = restingOffset)]
    pub fn resting_offset(&self) -> f64 {
        self.inner.resting_offset()
    }

    #[wasm_bindgen(js_name = setViewportWidth)]
    pub fn set_viewport_width(&mut self, width: f64) {
        self.inner.set_viewport_width(width);
    }

    /// Navigation event JSON, or undefined when the command was ignored.
    #[wasm_bindgen(js_name = goTo)]
    pub fn go_to(&mut self, index: usize, now: f64) -> Option<String> {
        self.inner.go_to(index, now).map(event_json)
    }

    pub fn next(&mut self, now: f64) -> Option<String> {
        self.inner.next(now).map(event_json)
    }

    pub fn previous(&mut self, now: f64) -> Option<String> {
        self.inner.previous(now).map(event_json)
    }

    pub fn tick(&mut self, now: f64) -> bool {
        self.inner.tick(now)
    }

    #[wasm_bindgen(js_name = dragStart)]
    pub fn drag_start(&mut self, x: f64, y: f64, now: f64) -> bool {
        self.inner.drag_start(Point::new(x, y), now)
    }

    /// Drag frame JSON, or undefined when no drag is in progress.
    #[wasm_bindgen(js_name = dragMove)]
    pub fn drag_move(&mut self, x: f64, y: f64) -> Option<String> {
        self.inner
            .drag_move(Point::new(x, y))
            .and_then(|frame| serde_json::to_string(&frame).ok())
    }

    /// Outcome JSON tagged by `outcome`: committed, snap_back or ignored.
    #[wasm_bindgen(js_name = dragEnd)]
    pub fn drag_end(&mut self, x: f64, y: f64, now: f64) -> String {
        let outcome = self.inner.drag_end(Point::new(x, y), now);
        serde_json::to_string(&outcome).unwrap_or_else(|_| r#"{"outcome":"ignored"}"#.to_string())
    }

    #[wasm_bindgen(js_name = cancelDrag)]
    pub fn cancel_drag(&mut self) -> bool {
        self.inner.cancel_drag()
    }
}

fn event_json(event: crate::NavigationEvent) -> String {
    serde_json::to_string(&event).unwrap_or_default()
}
