//! Handlers for the `/users` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use fleet_core::types::DbId;
use fleet_db::models::user::{CreateUser, UpdateUser, User};
use fleet_db::rules;

use crate::error::AppResult;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<User>>> {
    let user = rules::get_user(&state.pool, id).await?;
    Ok(Json(DataResponse { data: user }))
}

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<DataResponse<User>>)> {
    let user = rules::create_user(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: user })))
}

/// PUT /api/v1/users/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<DataResponse<User>>> {
    let user = rules::update_user(&state.pool, id, &input).await?;
    Ok(Json(DataResponse { data: user }))
}

/// GET /api/v1/users?skip=&limit=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<User>>>> {
    let page = rules::list_users(&state.pool, params.skip(), params.limit()).await?;
    Ok(Json(DataResponse { data: page }))
}

/// DELETE /api/v1/users/{id}
///
/// On success, responds with the refreshed user list.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<User>>>> {
    let remaining = rules::delete_user(&state.pool, id).await?;
    Ok(Json(DataResponse { data: remaining }))
}
