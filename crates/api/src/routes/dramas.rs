//! Route definitions for the drama catalog, mounted at `/dramas`.

use axum::routing::get;
use axum::Router;

use crate::handlers::drama;
use crate::state::AppState;

/// ```text
/// GET    /                  -> list_dramas
/// POST   /                  -> create_drama
/// GET    /{id}              -> get_drama
/// PUT    /{id}              -> update_drama
/// DELETE /{id}              -> delete_drama
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(drama::list_dramas).post(drama::create_drama))
        .route(
            "/{id}",
            get(drama::get_drama)
                .put(drama::update_drama)
                .delete(drama::delete_drama),
        )
}
