use leptos::prelude::*;

use crate::components::experience_card::ExperienceCard;
use crate::content::ExperienceRecord;

/// Employment history in authored order, newest first. Only the first
/// card starts expanded.
#[component]
pub fn ExperienceSection(experiences: Vec<ExperienceRecord>) -> impl IntoView {
    let cards = experiences
        .into_iter()
        .enumerate()
        .map(|(i, experience)| {
            view! { <ExperienceCard experience=experience start_open={i == 0} /> }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="experience" class="section experience-section">
            <h2 class="section-title">"Experience"</h2>
            <div class="experience-list">{cards}</div>
        </section>
    }
}
