pub mod device;
pub mod health;
pub mod organization;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /organizations                    list, create
/// /organizations/{inn}              get, delete
///
/// /devices                          list, create
/// /devices/with-organization        create device + embedded organization
/// /devices/{uuid}                   get, update, delete
///
/// /users                            list, create
/// /users/{id}                       get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/organizations", organization::router())
        .nest("/devices", device::router())
        .nest("/users", user::router())
}
