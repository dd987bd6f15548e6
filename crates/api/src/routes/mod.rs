pub mod dramas;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /dramas                                          list, create
/// /dramas/{id}                                     get, update, delete
/// /search?q=                                       substring search
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/dramas", dramas::router())
        .route("/search", get(handlers::search::search_dramas))
}
