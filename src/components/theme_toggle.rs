use leptos::prelude::*;

use crate::theme::ThemeContext;

/// Cycles the color-scheme preference: light, dark, follow-system.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = expect_context::<ThemeContext>();

    let on_click = move |_| {
        let next = ctx.theme.get_untracked().next();
        ctx.set_theme.set(next);
    };

    view! {
        <button
            class="theme-toggle"
            on:click=on_click
            aria-label=move || ctx.theme.get().toggle_label()
            title=move || ctx.theme.get().toggle_label()
        >
            <span class="theme-glyph">{move || ctx.theme.get().glyph()}</span>
            <span class="theme-name">{move || ctx.theme.get().as_str()}</span>
        </button>
    }
}
