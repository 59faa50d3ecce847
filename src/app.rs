use leptos::prelude::*;

use crate::components::header::MobileHeader;
use crate::components::progress_bar::ProgressBar;
use crate::components::sidebar::Sidebar;
use crate::content::{self, SectionId};
use crate::sections::about::About;
use crate::sections::contact::Contact;
use crate::sections::experience::ExperienceSection;
use crate::sections::hero::Hero;
use crate::sections::skills::Skills;
use crate::theme::{apply_theme, load_theme, store_theme, ThemeContext};
use crate::tracker::TrackerConfig;
use crate::watcher::ScrollWatcher;

/// All mutable shell state, owned here and passed down via context.
/// Components read the signals; only the watcher and `navigate_to`
/// write them.
#[derive(Clone, Copy)]
pub struct ShellState {
    pub active_section: RwSignal<SectionId>,
    pub header_visible: RwSignal<bool>,
    pub scroll_progress: RwSignal<f64>,
    pub nav_open: RwSignal<bool>,
    pub config: TrackerConfig,
}

impl ShellState {
    pub fn new(config: TrackerConfig) -> Self {
        ShellState {
            active_section: RwSignal::new(SectionId::Home),
            header_visible: RwSignal::new(true),
            scroll_progress: RwSignal::new(0.0),
            nav_open: RwSignal::new(false),
            config,
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let profile = content::load_profile();

    let (theme, set_theme) = signal(load_theme());
    provide_context(ThemeContext { theme, set_theme });

    // Apply to the DOM and persist whenever the preference changes.
    Effect::new(move |_| {
        let t = theme.get();
        apply_theme(t);
        store_theme(t);
    });

    let state = ShellState::new(TrackerConfig::default());
    provide_context(state);

    // Attach scroll/resize listeners once the sections are in the DOM.
    // The guard lives in a local stored value, so disposing the app
    // removes the listeners and cancels pending timers.
    let watcher = StoredValue::new_local(None::<ScrollWatcher>);
    Effect::new(move |_| {
        watcher.set_value(ScrollWatcher::attach(state));
    });

    view! {
        <ProgressBar />
        <MobileHeader name=profile.name.clone() />
        <div class="app-layout">
            <Sidebar profile=profile.clone() />
            <main class="content">
                <Hero name=profile.name.clone() headline=profile.headline.clone() />
                <About text=profile.about.clone() />
                <ExperienceSection experiences=profile.experiences.clone() />
                <Skills skills=profile.skills.clone() />
                <Contact email=profile.email.clone() resume_url=profile.resume_url.clone() />
            </main>
        </div>
    }
}
