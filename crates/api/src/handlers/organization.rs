//! Handlers for the `/organizations` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use fleet_core::types::Inn;
use fleet_db::models::organization::{CreateOrganization, Organization, OrganizationWithDevices};
use fleet_db::rules;

use crate::error::AppResult;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/organizations/{inn}
pub async fn get_by_inn(
    State(state): State<AppState>,
    Path(inn): Path<Inn>,
) -> AppResult<Json<DataResponse<OrganizationWithDevices>>> {
    let org = rules::get_organization(&state.pool, inn).await?;
    Ok(Json(DataResponse { data: org }))
}

/// POST /api/v1/organizations
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateOrganization>,
) -> AppResult<(StatusCode, Json<DataResponse<Organization>>)> {
    let org = rules::create_organization(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: org })))
}

/// GET /api/v1/organizations?skip=&limit=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<OrganizationWithDevices>>>> {
    let page = rules::list_organizations(&state.pool, params.skip(), params.limit()).await?;
    Ok(Json(DataResponse { data: page }))
}

/// DELETE /api/v1/organizations/{inn}
///
/// On success, responds with the refreshed organization list.
pub async fn delete(
    State(state): State<AppState>,
    Path(inn): Path<Inn>,
) -> AppResult<Json<DataResponse<Vec<OrganizationWithDevices>>>> {
    let remaining = rules::delete_organization(&state.pool, inn).await?;
    Ok(Json(DataResponse { data: remaining }))
}
