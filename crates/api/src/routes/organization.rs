//! Route definitions for the `/organizations` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::organization;
use crate::state::AppState;

/// Routes mounted at `/organizations`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create
/// GET    /{inn}       -> get_by_inn
/// DELETE /{inn}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(organization::list).post(organization::create))
        .route(
            "/{inn}",
            get(organization::get_by_inn).delete(organization::delete),
        )
}
