//! HTTP request handlers.

pub(crate) mod content;
pub(crate) mod tree;

use axum::http::{HeaderMap, header};
use suvadi_content::Language;

/// Cookie name carrying the persisted language preference.
const LANGUAGE_COOKIE: &str = "language";

/// Determine the language for a request.
///
/// The `lang` query parameter wins, then the `language` cookie, then the
/// configured default. Unknown values are ignored rather than rejected.
pub(crate) fn language_preference(
    query: Option<&str>,
    headers: &HeaderMap,
    default: Language,
) -> Language {
    if let Some(value) = query
        && let Ok(language) = value.parse()
    {
        return language;
    }
    if let Some(language) = cookie_language(headers) {
        return language;
    }
    default
}

/// Extract the language from the `Cookie` header, if present and valid.
fn cookie_language(headers: &HeaderMap) -> Option<Language> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let value = pair.trim().strip_prefix(LANGUAGE_COOKIE)?.strip_prefix('=')?;
        value.parse().ok()
    })
}
