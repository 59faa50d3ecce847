mod app;
mod components;
mod content;
mod sections;
mod theme;
mod timers;
mod tracker;
mod watcher;

use app::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
