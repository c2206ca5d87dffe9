//! Tree API endpoint.
//!
//! Returns the navigation tree of categories and items.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;
use suvadi_tree::Category;

use crate::error::ServerError;
use crate::state::AppState;

/// Response for GET /api/tree.
#[derive(Serialize)]
pub(crate) struct TreeResponse {
    /// Categories in display order.
    categories: Vec<Category>,
}

/// Handle GET /api/tree.
pub(crate) async fn get_tree(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TreeResponse>, ServerError> {
    let categories = state.library.categories()?;
    Ok(Json(TreeResponse { categories }))
}
