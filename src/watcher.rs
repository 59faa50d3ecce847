use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::app::ShellState;
use crate::content::SectionId;
use crate::timers::{self, OneShot};
use crate::tracker::{HeaderState, ScrollTracker, SectionBounds, TrackerConfig};

/// Measure the current vertical range of every section anchor present in
/// the DOM, header offset already subtracted. Anchors that are missing
/// are skipped; the tracker degrades to fewer sections.
pub fn measure_bounds(config: &TrackerConfig) -> Vec<SectionBounds> {
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    let Some(doc) = window.document() else {
        return Vec::new();
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);

    SectionId::ALL
        .iter()
        .filter_map(|&section| {
            let el = doc.get_element_by_id(section.anchor())?;
            let rect = el.get_bounding_client_rect();
            let top = rect.top() + scroll_y - config.header_offset;
            Some(SectionBounds {
                section,
                top,
                bottom: top + rect.height(),
            })
        })
        .collect()
}

fn viewport_height(window: &web_sys::Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

fn document_height(window: &web_sys::Window) -> f64 {
    window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0)
}

/// One scroll tick: read the offset once, feed it through the tracker,
/// publish whatever changed.
fn run_tick(tracker: &Rc<RefCell<ScrollTracker>>, state: ShellState) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let offset = window.scroll_y().unwrap_or(0.0);
    let update = tracker.borrow_mut().on_scroll(
        offset,
        viewport_height(&window),
        document_height(&window),
    );

    if let Some(section) = update.active {
        if state.active_section.get_untracked() != section {
            state.active_section.set(section);
        }
    }
    let visible = update.header == HeaderState::Visible;
    if state.header_visible.get_untracked() != visible {
        state.header_visible.set(visible);
    }
    state.scroll_progress.set(update.progress);
}

/// Listener guard for the scroll/section tracker. Holds the registered
/// callbacks and their coalescing timers; dropping it removes both
/// listeners and cancels anything pending, so no callback runs against a
/// torn-down view.
pub struct ScrollWatcher {
    scroll_cb: Closure<dyn FnMut()>,
    resize_cb: Closure<dyn FnMut()>,
    _throttle: Rc<RefCell<OneShot>>,
    _debounce: Rc<RefCell<OneShot>>,
}

impl ScrollWatcher {
    /// Attach scroll and resize listeners, take the initial bounds
    /// measurement, and run one tick so the highlight is correct before
    /// the user ever scrolls.
    pub fn attach(state: ShellState) -> Option<ScrollWatcher> {
        let window = web_sys::window()?;
        let config = state.config;

        let tracker = Rc::new(RefCell::new(ScrollTracker::new(config)));
        tracker.borrow_mut().set_bounds(measure_bounds(&config));
        run_tick(&tracker, state);

        let throttle = Rc::new(RefCell::new(OneShot::new(config.scroll_throttle_ms)));
        let debounce = Rc::new(RefCell::new(OneShot::new(config.resize_debounce_ms)));

        // Scroll events are coalesced: while a tick is pending, further
        // events are absorbed.
        let scroll_cb = {
            let tracker = Rc::clone(&tracker);
            let throttle = Rc::clone(&throttle);
            Closure::<dyn FnMut()>::new(move || {
                let tracker = Rc::clone(&tracker);
                throttle
                    .borrow_mut()
                    .coalesce(move || run_tick(&tracker, state));
            })
        };

        // Resize bursts collapse into one trailing-edge recompute of the
        // whole bounds cache, followed by a tick to refresh the highlight.
        let resize_cb = {
            let tracker = Rc::clone(&tracker);
            let debounce = Rc::clone(&debounce);
            Closure::<dyn FnMut()>::new(move || {
                let tracker = Rc::clone(&tracker);
                debounce.borrow_mut().schedule(move || {
                    let bounds = measure_bounds(&config);
                    tracker.borrow_mut().set_bounds(bounds);
                    run_tick(&tracker, state);
                });
            })
        };

        window
            .add_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref())
            .ok()?;
        window
            .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
            .ok()?;

        Some(ScrollWatcher {
            scroll_cb,
            resize_cb,
            _throttle: throttle,
            _debounce: debounce,
        })
    }
}

impl Drop for ScrollWatcher {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "scroll",
                self.scroll_cb.as_ref().unchecked_ref(),
            );
            let _ = window.remove_event_listener_with_callback(
                "resize",
                self.resize_cb.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Smooth-scroll to a section, updating the highlight immediately so the
/// nav feels responsive instead of waiting for the next scroll tick.
/// When the mobile overlay is open it is closed first and the scroll
/// waits out the closing animation.
pub fn navigate_to(section: SectionId, state: ShellState) {
    state.active_section.set(section);

    let header_offset = state.config.header_offset;
    if state.nav_open.get_untracked() {
        state.nav_open.set(false);
        timers::after(state.config.nav_close_delay_ms, move || {
            scroll_to_anchor(section, header_offset)
        });
    } else {
        scroll_to_anchor(section, header_offset);
    }
}

fn scroll_to_anchor(section: SectionId, header_offset: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(doc) = window.document() else {
        return;
    };
    let Some(el) = doc.get_element_by_id(section.anchor()) else {
        return;
    };

    let top = el.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0)
        - header_offset;

    let options = web_sys::ScrollToOptions::new();
    options.set_top(top.max(0.0));
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
