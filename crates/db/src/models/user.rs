//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use fleet_core::types::DbId;

/// A row from the `users` table. `id` is store-assigned; `user_name` is
/// not unique.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub user_name: String,
    pub device_id: Option<String>,
}

/// DTO for creating a new user, optionally linked to an existing device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub user_name: String,
    pub device_id: Option<String>,
}

/// DTO for relinking a user. A `None` clears the link unconditionally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    pub device_id: Option<String>,
}
