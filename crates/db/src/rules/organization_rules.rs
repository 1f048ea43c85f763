//! Rules for organization operations.

use sqlx::PgPool;

use fleet_core::error::CoreError;
use fleet_core::ident;
use fleet_core::types::Inn;

use crate::models::organization::{CreateOrganization, Organization, OrganizationWithDevices};
use crate::repositories::{DeviceRepo, OrganizationRepo};
use crate::rules::{RuleResult, DEFAULT_PAGE_LIMIT};

/// Fetch an organization by inn, with the devices it owns.
pub async fn get_organization(pool: &PgPool, inn: Inn) -> RuleResult<OrganizationWithDevices> {
    let org = OrganizationRepo::find_by_inn(pool, inn)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Organization",
            id: inn.to_string(),
        })?;
    let devices = DeviceRepo::list_by_organization(pool, inn).await?;
    Ok(OrganizationWithDevices {
        inn: org.inn,
        organization_name: org.organization_name,
        devices,
    })
}

/// Create an organization.
///
/// The inn must render as exactly 10 decimal digits, and neither the inn
/// nor the name may collide with an existing row.
pub async fn create_organization(
    pool: &PgPool,
    input: &CreateOrganization,
) -> RuleResult<Organization> {
    if !ident::is_valid_inn(input.inn) {
        return Err(CoreError::InvalidFormat {
            field: "inn",
            value: input.inn.to_string(),
        }
        .into());
    }
    if OrganizationRepo::find_by_inn(pool, input.inn).await?.is_some() {
        return Err(CoreError::AlreadyExists {
            entity: "Organization",
            field: "inn",
            value: input.inn.to_string(),
        }
        .into());
    }
    if OrganizationRepo::find_by_name(pool, &input.organization_name)
        .await?
        .is_some()
    {
        return Err(CoreError::AlreadyExists {
            entity: "Organization",
            field: "organization_name",
            value: input.organization_name.clone(),
        }
        .into());
    }

    let org = OrganizationRepo::insert(pool, input).await?;
    tracing::info!(inn = org.inn, name = %org.organization_name, "organization created");
    Ok(org)
}

/// List a page of organizations, each with its devices.
///
/// An empty page is a failure, not a success: callers always receive
/// either a non-empty page or `EmptyCollection`.
pub async fn list_organizations(
    pool: &PgPool,
    skip: i64,
    limit: i64,
) -> RuleResult<Vec<OrganizationWithDevices>> {
    let orgs = OrganizationRepo::list(pool, skip, limit).await?;
    if orgs.is_empty() {
        return Err(CoreError::EmptyCollection {
            entity: "Organization",
        }
        .into());
    }

    let mut page = Vec::with_capacity(orgs.len());
    for org in orgs {
        let devices = DeviceRepo::list_by_organization(pool, org.inn).await?;
        page.push(OrganizationWithDevices {
            inn: org.inn,
            organization_name: org.organization_name,
            devices,
        });
    }
    Ok(page)
}

/// Delete an organization and return the refreshed organization list.
///
/// Blocked while the organization still owns devices; the refreshed list
/// follows the ordinary list rules, including their `EmptyCollection`
/// failure when the table is now empty.
pub async fn delete_organization(
    pool: &PgPool,
    inn: Inn,
) -> RuleResult<Vec<OrganizationWithDevices>> {
    let org = OrganizationRepo::find_by_inn(pool, inn)
        .await?
        .ok_or(CoreError::NotExists {
            entity: "Organization",
            id: inn.to_string(),
        })?;

    let device_count = DeviceRepo::count_by_organization(pool, inn).await?;
    if device_count > 0 {
        return Err(CoreError::HasDependents {
            entity: "Organization",
            id: inn.to_string(),
            dependents: "devices",
        }
        .into());
    }

    OrganizationRepo::delete(pool, inn).await?;
    tracing::info!(inn = org.inn, "organization deleted");

    list_organizations(pool, 0, DEFAULT_PAGE_LIMIT).await
}
