use leptos::prelude::*;

struct Sparkle {
    top: f64,
    left: f64,
    size: f64,
    delay: f64,
}

fn generate(count: usize) -> Vec<Sparkle> {
    (0..count)
        .map(|_| Sparkle {
            top: js_sys::Math::random() * 100.0,
            left: js_sys::Math::random() * 100.0,
            size: js_sys::Math::random() * 10.0 + 5.0,
            delay: js_sys::Math::random() * 0.5,
        })
        .collect()
}

/// Decorative sparkles layered over the parent element, revealed on
/// hover of the surrounding `.sparkle-host`. Positions are rolled once
/// per mount; the looping animation itself is pure CSS.
#[component]
pub fn Sparkles(#[prop(default = 5)] count: usize) -> impl IntoView {
    let spans = generate(count)
        .into_iter()
        .map(|s| {
            let style = format!(
                "top: {:.1}%; left: {:.1}%; font-size: {:.0}px; animation-delay: {:.2}s",
                s.top, s.left, s.size, s.delay
            );
            view! { <span class="sparkle" style=style>"\u{2728}"</span> }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="sparkles" aria-hidden="true">
            <style>{include_str!("sparkles.css")}</style>
            {spans}
        </div>
    }
}
