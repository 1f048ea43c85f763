//! Repository for the `devices` table.

use sqlx::PgPool;

use fleet_core::types::Inn;

use crate::models::device::{CreateDevice, Device};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "uuid, device_name, organization_id";

/// Provides data access for devices.
pub struct DeviceRepo;

impl DeviceRepo {
    /// Find a device by its uuid. Safe to call with an unvalidated value:
    /// the column is text, so a malformed uuid simply matches nothing.
    pub async fn find_by_uuid(pool: &PgPool, uuid: &str) -> Result<Option<Device>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM devices WHERE uuid = $1");
        sqlx::query_as::<_, Device>(&query)
            .bind(uuid)
            .fetch_optional(pool)
            .await
    }

    /// Find a device by its unique name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Device>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM devices WHERE device_name = $1");
        sqlx::query_as::<_, Device>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new device, returning the created row.
    pub async fn insert(pool: &PgPool, input: &CreateDevice) -> Result<Device, sqlx::Error> {
        let query = format!(
            "INSERT INTO devices (uuid, device_name, organization_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Device>(&query)
            .bind(&input.uuid)
            .bind(&input.device_name)
            .bind(input.organization_id)
            .fetch_one(pool)
            .await
    }

    /// List a page of devices ordered by uuid.
    pub async fn list(pool: &PgPool, skip: i64, limit: i64) -> Result<Vec<Device>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM devices ORDER BY uuid OFFSET $1 LIMIT $2");
        sqlx::query_as::<_, Device>(&query)
            .bind(skip)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// List every device owned by an organization, ordered by uuid.
    pub async fn list_by_organization(pool: &PgPool, inn: Inn) -> Result<Vec<Device>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM devices WHERE organization_id = $1 ORDER BY uuid");
        sqlx::query_as::<_, Device>(&query)
            .bind(inn)
            .fetch_all(pool)
            .await
    }

    /// Count the devices owned by an organization.
    pub async fn count_by_organization(pool: &PgPool, inn: Inn) -> Result<i64, sqlx::Error> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM devices WHERE organization_id = $1")
                .bind(inn)
                .fetch_one(pool)
                .await?;
        Ok(count.0)
    }

    /// Replace a device's organization link (set or clear), returning the
    /// updated row. Returns `None` if no row with the given uuid exists.
    pub async fn set_organization(
        pool: &PgPool,
        uuid: &str,
        organization_id: Option<Inn>,
    ) -> Result<Option<Device>, sqlx::Error> {
        let query = format!(
            "UPDATE devices SET organization_id = $2 WHERE uuid = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Device>(&query)
            .bind(uuid)
            .bind(organization_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a device by uuid. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, uuid: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM devices WHERE uuid = $1")
            .bind(uuid)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
