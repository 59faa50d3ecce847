use leptos::prelude::*;

use crate::app::ShellState;

/// Sticky top bar shown on narrow viewports. Slides out of view while
/// scrolling down and back in on any upward scroll or near the top of
/// the page; the visibility flag itself comes from the scroll tracker.
#[component]
pub fn MobileHeader(name: String) -> impl IntoView {
    let state = expect_context::<ShellState>();

    view! {
        <header class="mobile-header" class:hidden=move || !state.header_visible.get()>
            <span class="mobile-header-name">{name}</span>
            <button
                class="nav-burger"
                aria-label="Toggle navigation"
                on:click=move |_| state.nav_open.update(|open| *open = !*open)
            >
                "\u{2630}"
            </button>
        </header>
    }
}
