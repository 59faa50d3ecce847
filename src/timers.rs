use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// A cancellable one-shot browser timeout.
///
/// `schedule` is the debounce entry point (cancel-and-reschedule: only the
/// trailing call in a burst runs) and `coalesce` the throttle entry point
/// (a pending timer swallows later requests). Dropping the timer cancels
/// any pending callback, so nothing fires after teardown.
pub struct OneShot {
    delay_ms: i32,
    handle: Rc<Cell<Option<i32>>>,
    // Keeps the scheduled callback alive until it fires or is cancelled.
    closure: Option<Closure<dyn FnMut()>>,
}

impl OneShot {
    pub fn new(delay_ms: i32) -> Self {
        OneShot {
            delay_ms,
            handle: Rc::new(Cell::new(None)),
            closure: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.handle.get().is_some()
    }

    /// Cancel any pending callback and schedule `f` after the delay.
    pub fn schedule(&mut self, f: impl FnOnce() + 'static) {
        self.cancel();

        let slot = Rc::clone(&self.handle);
        let mut f = Some(f);
        let closure = Closure::<dyn FnMut()>::new(move || {
            slot.set(None);
            if let Some(f) = f.take() {
                f();
            }
        });

        if let Some(window) = web_sys::window() {
            if let Ok(id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                self.delay_ms,
            ) {
                self.handle.set(Some(id));
            }
        }
        self.closure = Some(closure);
    }

    /// Schedule `f` only if nothing is already pending; otherwise the
    /// request is absorbed by the in-flight timer.
    pub fn coalesce(&mut self, f: impl FnOnce() + 'static) {
        if !self.is_pending() {
            self.schedule(f);
        }
    }

    pub fn cancel(&mut self) {
        if let Some(id) = self.handle.take() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(id);
            }
        }
        self.closure = None;
    }
}

impl Drop for OneShot {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Fire-and-forget delayed callback, for one-off delays that outlive any
/// owner (the mobile-nav close delay). The closure leaks if the page is
/// torn down first, which is bounded by the delay.
pub fn after(delay_ms: i32, f: impl FnOnce() + 'static) {
    if let Some(window) = web_sys::window() {
        let closure = Closure::once_into_js(f);
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(closure.unchecked_ref(), delay_ms);
    }
}
