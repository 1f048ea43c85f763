//! Rules for user operations.
//!
//! Note the asymmetry inherited from the operation contracts: create
//! checks the device link's format before its existence, update checks
//! existence before format. A null link is exempt from both.

use sqlx::PgPool;

use fleet_core::error::CoreError;
use fleet_core::ident;
use fleet_core::types::DbId;

use crate::models::user::{CreateUser, UpdateUser, User};
use crate::repositories::{DeviceRepo, UserRepo};
use crate::rules::{RuleResult, DEFAULT_PAGE_LIMIT};

/// Fetch a user by id.
pub async fn get_user(pool: &PgPool, id: DbId) -> RuleResult<User> {
    let user = UserRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "User",
            id: id.to_string(),
        })?;
    Ok(user)
}

/// Ensure a device with the given uuid exists.
async fn ensure_device_exists(pool: &PgPool, uuid: &str) -> RuleResult<()> {
    DeviceRepo::find_by_uuid(pool, uuid)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Device",
            id: uuid.to_string(),
        })?;
    Ok(())
}

/// Create a user, optionally linked to an existing device.
pub async fn create_user(pool: &PgPool, input: &CreateUser) -> RuleResult<User> {
    if let Some(device_id) = input.device_id.as_deref() {
        if !ident::is_valid_uuid(device_id) {
            return Err(CoreError::InvalidFormat {
                field: "device_id",
                value: device_id.to_string(),
            }
            .into());
        }
        ensure_device_exists(pool, device_id).await?;
    }

    let user = UserRepo::insert(pool, input).await?;
    tracing::info!(
        id = user.id,
        name = %user.user_name,
        device = ?user.device_id,
        "user created",
    );
    Ok(user)
}

/// Replace a user's device link.
///
/// A non-null target must exist (checked first) and be a syntactically
/// valid uuid; a null target clears the link unconditionally.
pub async fn update_user(pool: &PgPool, id: DbId, input: &UpdateUser) -> RuleResult<User> {
    let not_found = || CoreError::NotFound {
        entity: "User",
        id: id.to_string(),
    };
    UserRepo::find_by_id(pool, id).await?.ok_or_else(not_found)?;

    if let Some(device_id) = input.device_id.as_deref() {
        // Existence before format, per the operation contract.
        ensure_device_exists(pool, device_id).await?;
        if !ident::is_valid_uuid(device_id) {
            return Err(CoreError::InvalidFormat {
                field: "device_id",
                value: device_id.to_string(),
            }
            .into());
        }
    }

    let user = UserRepo::set_device(pool, id, input.device_id.as_deref())
        .await?
        .ok_or_else(not_found)?;
    tracing::info!(id = user.id, device = ?user.device_id, "user device link updated");
    Ok(user)
}

/// List a page of users. Empty pages fail with `EmptyCollection`.
pub async fn list_users(pool: &PgPool, skip: i64, limit: i64) -> RuleResult<Vec<User>> {
    let users = UserRepo::list(pool, skip, limit).await?;
    if users.is_empty() {
        return Err(CoreError::EmptyCollection { entity: "User" }.into());
    }
    Ok(users)
}

/// Delete a user and return the refreshed user list. Users own nothing,
/// so deletion is never blocked by dependents.
pub async fn delete_user(pool: &PgPool, id: DbId) -> RuleResult<Vec<User>> {
    let user = UserRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| CoreError::NotExists {
            entity: "User",
            id: id.to_string(),
        })?;

    UserRepo::delete(pool, user.id).await?;
    tracing::info!(id = user.id, "user deleted");

    list_users(pool, 0, DEFAULT_PAGE_LIMIT).await
}
