//! Content API endpoint.
//!
//! Resolves and renders a single document.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};
use suvadi_content::{Language, RenderedContent};

use crate::error::ServerError;
use crate::handlers::language_preference;
use crate::state::AppState;

/// Query parameters for GET /api/content/{path}.
#[derive(Deserialize)]
pub(crate) struct ContentQuery {
    /// Explicit language override.
    lang: Option<String>,
}

/// Response for GET /api/content/{path}.
#[derive(Debug, Serialize)]
pub(crate) struct ContentResponse {
    /// Language the document was resolved for.
    language: Language,
    /// Rendered document, tagged by source format.
    #[serde(flatten)]
    content: RenderedContent,
}

/// Handle GET /api/content/{path}.
pub(crate) async fn get_content(
    Path(path): Path<String>,
    Query(query): Query<ContentQuery>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<ContentResponse>, ServerError> {
    let language = language_preference(query.lang.as_deref(), &headers, state.default_language);

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let content = state
        .library
        .page(&segments, language)
        .map_err(|e| ServerError::from_content_error(e, &path))?;

    if state.verbose {
        tracing::info!(path = %path, language = %language, "Served content");
    }

    Ok(Json(ContentResponse { language, content }))
}
