//! Handlers for the `/devices` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use fleet_db::models::device::{
    CreateDevice, CreateDeviceWithOrganization, Device, DeviceWithUsers, UpdateDevice,
};
use fleet_db::rules;

use crate::error::AppResult;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/devices/{uuid}
pub async fn get_by_uuid(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> AppResult<Json<DataResponse<DeviceWithUsers>>> {
    let device = rules::get_device(&state.pool, &uuid).await?;
    Ok(Json(DataResponse { data: device }))
}

/// POST /api/v1/devices
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateDevice>,
) -> AppResult<(StatusCode, Json<DataResponse<Device>>)> {
    let device = rules::create_device(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: device })))
}

/// POST /api/v1/devices/with-organization
///
/// Creates the embedded organization first, then the device linked to it.
pub async fn create_with_organization(
    State(state): State<AppState>,
    Json(input): Json<CreateDeviceWithOrganization>,
) -> AppResult<(StatusCode, Json<DataResponse<Device>>)> {
    let device = rules::create_device_with_organization(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: device })))
}

/// PUT /api/v1/devices/{uuid}
pub async fn update(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
    Json(input): Json<UpdateDevice>,
) -> AppResult<Json<DataResponse<Device>>> {
    let device = rules::update_device(&state.pool, &uuid, &input).await?;
    Ok(Json(DataResponse { data: device }))
}

/// GET /api/v1/devices?skip=&limit=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<DeviceWithUsers>>>> {
    let page = rules::list_devices(&state.pool, params.skip(), params.limit()).await?;
    Ok(Json(DataResponse { data: page }))
}

/// DELETE /api/v1/devices/{uuid}
///
/// On success, responds with the refreshed device list.
pub async fn delete(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> AppResult<Json<DataResponse<Vec<DeviceWithUsers>>>> {
    let remaining = rules::delete_device(&state.pool, &uuid).await?;
    Ok(Json(DataResponse { data: remaining }))
}
