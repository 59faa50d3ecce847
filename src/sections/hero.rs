use leptos::prelude::*;

use crate::app::ShellState;
use crate::components::sparkles::Sparkles;
use crate::content::SectionId;
use crate::watcher::navigate_to;

#[component]
pub fn Hero(name: String, headline: String) -> impl IntoView {
    let state = expect_context::<ShellState>();

    view! {
        <section id="home" class="section hero-section">
            <p class="hero-greeting">"Hi, my name is"</p>
            <h1 class="hero-name sparkle-host">
                {name}
                <Sparkles />
            </h1>
            <h2 class="hero-headline">{headline}</h2>
            <div class="hero-actions">
                <button
                    class="btn btn-primary"
                    on:click=move |_| navigate_to(SectionId::Experience, state)
                >
                    "See my work"
                </button>
                <button class="btn" on:click=move |_| navigate_to(SectionId::Contact, state)>
                    "Get in touch"
                </button>
            </div>
        </section>
    }
}
