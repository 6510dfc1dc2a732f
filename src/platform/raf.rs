//! requestAnimationFrame scheduling
//!
//! Wraps the raw callback id so the pending frame can be cancelled when a
//! session ends. Cancelling is idempotent and safe with nothing scheduled.

use std::cell::Cell;
use std::rc::Rc;

/// Shared handle to the pending animation-frame callback
#[derive(Clone, Default)]
pub struct RafHandle {
    id: Rc<Cell<Option<i32>>>,
}

impl RafHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a callback for the next frame, replacing any pending id
    pub fn schedule(&self, callback: &js_sys::Function) {
        let window = web_sys::window().expect("no window");
        let id = window
            .request_animation_frame(callback)
            .expect("requestAnimationFrame failed");
        self.id.set(Some(id));
    }

    /// Cancel the pending frame, if any. Safe to call repeatedly.
    pub fn cancel(&self) {
        if let Some(id) = self.id.take()
            && let Some(window) = web_sys::window()
        {
            let _ = window.cancel_animation_frame(id);
        }
    }
}
