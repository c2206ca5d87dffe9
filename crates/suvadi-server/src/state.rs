//! Application state.
//!
//! Shared state for all request handlers.

use suvadi_content::{Language, Library};

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Content library (navigation tree + page resolution).
    pub(crate) library: Library,
    /// Language served when a request carries no preference.
    pub(crate) default_language: Language,
    /// Enable verbose output (log each served request).
    pub(crate) verbose: bool,
}
