use leptos::prelude::*;

use crate::content::ExperienceRecord;

/// Collapsible card for one employment entry. The body stays in the DOM
/// so collapse can animate with CSS alone. An empty `company_url` or
/// project `link` renders as plain text instead of an anchor.
#[component]
pub fn ExperienceCard(
    experience: ExperienceRecord,
    #[prop(default = false)] start_open: bool,
) -> impl IntoView {
    let (open, set_open) = signal(start_open);

    let company = if experience.company_url.is_empty() {
        view! { <span class="company-name">{experience.company_name.clone()}</span> }.into_any()
    } else {
        view! {
            <a
                class="company-link"
                href=experience.company_url.clone()
                target="_blank"
                rel="noopener noreferrer"
                on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
            >
                {experience.company_name.clone()}
                <span class="ext-glyph" aria-hidden="true">"\u{2197}"</span>
            </a>
        }
        .into_any()
    };

    let position = experience
        .position
        .clone()
        .map(|p| view! { <p class="card-position">{p}</p> });

    let projects = (!experience.projects.is_empty()).then(|| {
        let items = experience
            .projects
            .iter()
            .map(|project| {
                let name = project.name.clone();
                let entry = if project.link.is_empty() {
                    view! { <span class="project-name">{name}</span> }.into_any()
                } else {
                    view! {
                        <a
                            class="project-name"
                            href=project.link.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {name}
                            <span class="ext-glyph" aria-hidden="true">"\u{2197}"</span>
                        </a>
                    }
                    .into_any()
                };
                view! {
                    <li class="project-item">
                        <span class="project-bullet" aria-hidden="true">"\u{25B9}"</span>
                        {entry}
                    </li>
                }
            })
            .collect::<Vec<_>>();

        view! {
            <div class="card-block">
                <h4>"Projects"</h4>
                <ul class="project-list">{items}</ul>
            </div>
        }
    });

    let tech = (!experience.tech_stack.is_empty()).then(|| {
        let badges = experience
            .tech_stack
            .iter()
            .map(|t| view! { <span class="tech-badge">{t.clone()}</span> })
            .collect::<Vec<_>>();

        view! {
            <div class="card-block">
                <h4>"Technologies"</h4>
                <div class="badge-row">{badges}</div>
            </div>
        }
    });

    view! {
        <article class="experience-card" class:open=move || open.get()>
            <div class="card-header" on:click=move |_| set_open.update(|o| *o = !*o)>
                <div class="card-heading">
                    <time class="card-time">{experience.time_frame.clone()}</time>
                    <h3 class="card-title">
                        <span>{experience.title.clone()}</span>
                        <span class="card-at">"@"</span>
                        {company}
                    </h3>
                    {position}
                </div>
                <span class="card-chevron" aria-hidden="true">"\u{25BE}"</span>
            </div>
            <div class="card-body">
                <div class="card-block">
                    <h4>"Roles and Responsibility"</h4>
                    <p class="card-responsibility">{experience.responsibility.clone()}</p>
                </div>
                {projects}
                {tech}
            </div>
        </article>
    }
}
