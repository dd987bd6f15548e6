//! Handler for catalog search.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::query::SearchParams;
use crate::state::AppState;

/// GET /api/search?q=
///
/// Case-insensitive substring match over title, keywords and description.
/// Results keep catalog order; an empty or missing `q` returns everything.
pub async fn search_dramas(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let results = state.repo.search(&params.q).await;

    tracing::debug!(query = %params.q, matches = results.len(), "Search executed");

    Json(results)
}
