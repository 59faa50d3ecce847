use leptos::prelude::*;

#[component]
pub fn Skills(skills: Vec<String>) -> impl IntoView {
    let badges = skills
        .into_iter()
        .map(|skill| view! { <span class="skill-badge">{skill}</span> })
        .collect::<Vec<_>>();

    view! {
        <section id="skills" class="section skills-section">
            <h2 class="section-title">"Skills"</h2>
            <div class="badge-row">{badges}</div>
        </section>
    }
}
