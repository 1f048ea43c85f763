//! Route definitions for the `/devices` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::device;
use crate::state::AppState;

/// Routes mounted at `/devices`.
///
/// ```text
/// GET    /                     -> list
/// POST   /                     -> create
/// POST   /with-organization    -> create_with_organization
/// GET    /{uuid}               -> get_by_uuid
/// PUT    /{uuid}               -> update
/// DELETE /{uuid}               -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(device::list).post(device::create))
        .route("/with-organization", post(device::create_with_organization))
        .route(
            "/{uuid}",
            get(device::get_by_uuid)
                .put(device::update)
                .delete(device::delete),
        )
}
