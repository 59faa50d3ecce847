use leptos::prelude::*;

use crate::app::ShellState;

/// Thin reading-progress bar pinned to the top edge of the viewport.
#[component]
pub fn ProgressBar() -> impl IntoView {
    let state = expect_context::<ShellState>();

    view! {
        <div class="progress-track" aria-hidden="true">
            <div
                class="progress-fill"
                style:width=move || format!("{:.2}%", state.scroll_progress.get() * 100.0)
            ></div>
        </div>
    }
}
