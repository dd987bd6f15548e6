//! Handlers for drama CRUD.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use drama_core::drama::{CreateDrama, UpdateDrama, ENTITY};
use drama_core::error::CoreError;
use drama_core::types::DramaId;

use crate::error::{AppError, AppResult};
use crate::response::DeletedResponse;
use crate::state::AppState;

/// Parse a path id. Anything that is not an integer cannot name a record, so
/// it is reported the same way as an unknown id.
fn parse_id(raw: &str) -> AppResult<DramaId> {
    raw.trim().parse().map_err(|_| {
        tracing::debug!(raw_id = %raw, "Non-numeric drama id");
        AppError::Core(not_found(0))
    })
}

fn not_found(id: DramaId) -> CoreError {
    CoreError::NotFound { entity: ENTITY, id }
}

/// GET /api/dramas
pub async fn list_dramas(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.repo.list().await)
}

/// GET /api/dramas/{id}
pub async fn get_drama(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&raw_id)?;

    let drama = state
        .repo
        .get(id)
        .await
        .ok_or(AppError::Core(not_found(id)))?;

    Ok(Json(drama))
}

/// POST /api/dramas
///
/// Assigns the next id and fills the default icon and cover image. When
/// strict validation is enabled, missing required fields are rejected with 400.
pub async fn create_drama(
    State(state): State<AppState>,
    Json(input): Json<CreateDrama>,
) -> AppResult<impl IntoResponse> {
    if state.config.strict_validation {
        let errors = input.validate();
        if !errors.is_empty() {
            return Err(AppError::Core(CoreError::Validation(errors.join("; "))));
        }
    }

    let drama = state
        .repo
        .create(input)
        .await
        .map_err(AppError::persistence("添加短剧失败"))?;

    Ok((StatusCode::CREATED, Json(drama)))
}

/// PUT /api/dramas/{id}
///
/// Shallow merge: supplied fields overwrite, omitted fields are kept and the
/// id never changes.
pub async fn update_drama(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(input): Json<UpdateDrama>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&raw_id)?;

    let drama = state
        .repo
        .update(id, input)
        .await
        .map_err(AppError::persistence("更新短剧失败"))?
        .ok_or(AppError::Core(not_found(id)))?;

    Ok(Json(drama))
}

/// DELETE /api/dramas/{id}
///
/// Returns the removed record alongside a confirmation message.
pub async fn delete_drama(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&raw_id)?;

    let drama = state
        .repo
        .delete(id)
        .await
        .map_err(AppError::persistence("删除短剧失败"))?
        .ok_or(AppError::Core(not_found(id)))?;

    Ok(Json(DeletedResponse {
        message: "删除成功",
        drama,
    }))
}
