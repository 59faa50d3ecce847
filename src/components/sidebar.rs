use leptos::prelude::*;

use crate::app::ShellState;
use crate::components::theme_toggle::ThemeToggle;
use crate::content::{Profile, SectionId};
use crate::watcher::navigate_to;

/// Persistent identity/navigation column. On narrow viewports it becomes
/// an overlay opened from the mobile header; clicking the backdrop or
/// any nav entry closes it.
#[component]
pub fn Sidebar(profile: Profile) -> impl IntoView {
    let state = expect_context::<ShellState>();

    let nav_items = SectionId::ALL
        .into_iter()
        .map(|section| {
            view! {
                <li class="nav-item">
                    <button
                        class="nav-link"
                        class:active=move || state.active_section.get() == section
                        on:click=move |_| navigate_to(section, state)
                    >
                        <span class="nav-icon" aria-hidden="true">{section.icon()}</span>
                        <span class="nav-label">{section.label()}</span>
                    </button>
                </li>
            }
        })
        .collect::<Vec<_>>();

    let photo = (!profile.photo_url.is_empty()).then(|| {
        view! {
            <img class="sidebar-photo" src=profile.photo_url.clone() alt="Portrait" />
        }
    });

    let github = (!profile.github_url.is_empty()).then(|| {
        view! {
            <a class="social-link" href=profile.github_url.clone() target="_blank" rel="noopener noreferrer">
                "GitHub"
            </a>
        }
    });

    let linkedin = (!profile.linkedin_url.is_empty()).then(|| {
        view! {
            <a class="social-link" href=profile.linkedin_url.clone() target="_blank" rel="noopener noreferrer">
                "LinkedIn"
            </a>
        }
    });

    let resume = (!profile.resume_url.is_empty()).then(|| {
        view! {
            <a class="btn resume-link" href=profile.resume_url.clone() download="resume.pdf">
                "Download R\u{e9}sum\u{e9}"
            </a>
        }
    });

    view! {
        <div
            class="nav-backdrop"
            class:open=move || state.nav_open.get()
            on:click=move |_| state.nav_open.set(false)
        ></div>
        <aside class="sidebar" class:open=move || state.nav_open.get()>
            <div class="sidebar-header">
                {photo}
                <h1 class="sidebar-name">{profile.name.clone()}</h1>
                <p class="sidebar-headline">{profile.headline.clone()}</p>
            </div>
            <nav class="sidebar-nav">
                <ul class="nav-list">{nav_items}</ul>
            </nav>
            <div class="sidebar-footer">
                <div class="social-links">
                    <a class="social-link" href=format!("mailto:{}", profile.email)>"Email"</a>
                    {github}
                    {linkedin}
                </div>
                {resume}
                <ThemeToggle />
            </div>
        </aside>
    }
}
