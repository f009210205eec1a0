//! Search-and-select component
//!
//! Holds the query, the suggestion dropdown and the selected options, and
//! renders the dropdown and the selection row.

pub mod search_render;
mod search_state;

pub use search_state::SearchState;
