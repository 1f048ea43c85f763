//! Repository for the `organizations` table.

use sqlx::PgPool;

use fleet_core::types::Inn;

use crate::models::organization::{CreateOrganization, Organization};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "inn, organization_name";

/// Provides data access for organizations.
pub struct OrganizationRepo;

impl OrganizationRepo {
    /// Find an organization by its inn.
    pub async fn find_by_inn(pool: &PgPool, inn: Inn) -> Result<Option<Organization>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM organizations WHERE inn = $1");
        sqlx::query_as::<_, Organization>(&query)
            .bind(inn)
            .fetch_optional(pool)
            .await
    }

    /// Find an organization by its unique name.
    pub async fn find_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<Organization>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM organizations WHERE organization_name = $1");
        sqlx::query_as::<_, Organization>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new organization, returning the created row.
    pub async fn insert(
        pool: &PgPool,
        input: &CreateOrganization,
    ) -> Result<Organization, sqlx::Error> {
        let query = format!(
            "INSERT INTO organizations (inn, organization_name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Organization>(&query)
            .bind(input.inn)
            .bind(&input.organization_name)
            .fetch_one(pool)
            .await
    }

    /// List a page of organizations ordered by inn.
    pub async fn list(
        pool: &PgPool,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Organization>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM organizations ORDER BY inn OFFSET $1 LIMIT $2");
        sqlx::query_as::<_, Organization>(&query)
            .bind(skip)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Delete an organization by inn. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, inn: Inn) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM organizations WHERE inn = $1")
            .bind(inn)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
