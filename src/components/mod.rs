pub mod experience_card;
pub mod header;
pub mod progress_bar;
pub mod sidebar;
pub mod sparkles;
pub mod theme_toggle;
