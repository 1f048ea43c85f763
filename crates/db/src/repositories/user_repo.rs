//! Repository for the `users` table.

use sqlx::PgPool;

use fleet_core::types::DbId;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_name, device_id";

/// Provides data access for users.
pub struct UserRepo;

impl UserRepo {
    /// Find a user by its store-assigned id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new user, returning the created row with its assigned id.
    pub async fn insert(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (user_name, device_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.user_name)
            .bind(&input.device_id)
            .fetch_one(pool)
            .await
    }

    /// List a page of users ordered by id.
    pub async fn list(pool: &PgPool, skip: i64, limit: i64) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY id OFFSET $1 LIMIT $2");
        sqlx::query_as::<_, User>(&query)
            .bind(skip)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// List every user owned by a device, ordered by id.
    pub async fn list_by_device(pool: &PgPool, device_uuid: &str) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE device_id = $1 ORDER BY id");
        sqlx::query_as::<_, User>(&query)
            .bind(device_uuid)
            .fetch_all(pool)
            .await
    }

    /// Count the users owned by a device.
    pub async fn count_by_device(pool: &PgPool, device_uuid: &str) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE device_id = $1")
            .bind(device_uuid)
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }

    /// Replace a user's device link (set or clear), returning the updated
    /// row. Returns `None` if no row with the given id exists.
    pub async fn set_device(
        pool: &PgPool,
        id: DbId,
        device_id: Option<&str>,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("UPDATE users SET device_id = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(device_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a user by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
