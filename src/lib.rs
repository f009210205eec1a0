//! Terminal search-and-select picker
//!
//! Typing queries a remote endpoint for suggestions, picking a suggestion
//! adds it to a removable list of selected entities.

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod lookup;
pub mod search;
pub mod suggestion;
pub mod widgets;

#[cfg(test)]
mod test_utils;
