mod app_events;
mod app_render;
mod app_state;
mod help_line;
mod mouse_click;

pub use app_state::{App, Focus};

#[cfg(test)]
#[path = "app/app_state_tests.rs"]
mod app_state_tests;
