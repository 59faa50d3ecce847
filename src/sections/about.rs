use leptos::prelude::*;

#[component]
pub fn About(text: String) -> impl IntoView {
    view! {
        <section id="about" class="section about-section">
            <h2 class="section-title">"About"</h2>
            <p class="about-text">{text}</p>
        </section>
    }
}
