//! Rules for device operations.
//!
//! Check ordering here is contractual: create checks collisions before the
//! uuid format, and update checks the target organization's existence
//! before its format.

use sqlx::PgPool;

use fleet_core::error::CoreError;
use fleet_core::ident;
use fleet_core::types::Inn;

use crate::models::device::{
    CreateDevice, CreateDeviceWithOrganization, Device, DeviceWithUsers, UpdateDevice,
};
use crate::repositories::{DeviceRepo, OrganizationRepo, UserRepo};
use crate::rules::{organization_rules, RuleResult, DEFAULT_PAGE_LIMIT};

/// Fetch a device by uuid, with the users it owns.
pub async fn get_device(pool: &PgPool, uuid: &str) -> RuleResult<DeviceWithUsers> {
    let device = DeviceRepo::find_by_uuid(pool, uuid)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Device",
            id: uuid.to_string(),
        })?;
    let users = UserRepo::list_by_device(pool, &device.uuid).await?;
    Ok(DeviceWithUsers {
        uuid: device.uuid,
        device_name: device.device_name,
        organization_id: device.organization_id,
        users,
    })
}

/// Ensure `uuid` and `device_name` collide with nothing, then that `uuid`
/// is syntactically valid. Collision checks run first.
async fn check_new_device(pool: &PgPool, uuid: &str, device_name: &str) -> RuleResult<()> {
    if DeviceRepo::find_by_uuid(pool, uuid).await?.is_some() {
        return Err(CoreError::AlreadyExists {
            entity: "Device",
            field: "uuid",
            value: uuid.to_string(),
        }
        .into());
    }
    if DeviceRepo::find_by_name(pool, device_name).await?.is_some() {
        return Err(CoreError::AlreadyExists {
            entity: "Device",
            field: "device_name",
            value: device_name.to_string(),
        }
        .into());
    }
    if !ident::is_valid_uuid(uuid) {
        return Err(CoreError::InvalidFormat {
            field: "uuid",
            value: uuid.to_string(),
        }
        .into());
    }
    Ok(())
}

/// Ensure an organization with the given inn exists.
async fn ensure_organization_exists(pool: &PgPool, inn: Inn) -> RuleResult<()> {
    OrganizationRepo::find_by_inn(pool, inn)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Organization",
            id: inn.to_string(),
        })?;
    Ok(())
}

/// Create a device, optionally linked to an existing organization.
pub async fn create_device(pool: &PgPool, input: &CreateDevice) -> RuleResult<Device> {
    check_new_device(pool, &input.uuid, &input.device_name).await?;
    if let Some(inn) = input.organization_id {
        ensure_organization_exists(pool, inn).await?;
    }

    let device = DeviceRepo::insert(pool, input).await?;
    tracing::info!(
        uuid = %device.uuid,
        name = %device.device_name,
        organization = ?device.organization_id,
        "device created",
    );
    Ok(device)
}

/// Create a device together with a brand-new organization.
///
/// The embedded organization is created first, under the ordinary
/// organization create rules; the device is then linked to its inn.
pub async fn create_device_with_organization(
    pool: &PgPool,
    input: &CreateDeviceWithOrganization,
) -> RuleResult<Device> {
    check_new_device(pool, &input.uuid, &input.device_name).await?;
    let org = organization_rules::create_organization(pool, &input.organization).await?;

    let device = DeviceRepo::insert(
        pool,
        &CreateDevice {
            uuid: input.uuid.clone(),
            device_name: input.device_name.clone(),
            organization_id: Some(org.inn),
        },
    )
    .await?;
    tracing::info!(
        uuid = %device.uuid,
        name = %device.device_name,
        organization = org.inn,
        "device created with new organization",
    );
    Ok(device)
}

/// Replace a device's organization link.
///
/// A non-null target must exist (checked first) and render as exactly 10
/// digits; a null target clears the link unconditionally.
pub async fn update_device(
    pool: &PgPool,
    uuid: &str,
    input: &UpdateDevice,
) -> RuleResult<Device> {
    let not_found = || CoreError::NotFound {
        entity: "Device",
        id: uuid.to_string(),
    };
    DeviceRepo::find_by_uuid(pool, uuid)
        .await?
        .ok_or_else(not_found)?;

    if let Some(inn) = input.organization_id {
        // Existence before format, per the operation contract.
        ensure_organization_exists(pool, inn).await?;
        if !ident::is_valid_inn(inn) {
            return Err(CoreError::InvalidFormat {
                field: "organization_id",
                value: inn.to_string(),
            }
            .into());
        }
    }

    let device = DeviceRepo::set_organization(pool, uuid, input.organization_id)
        .await?
        .ok_or_else(not_found)?;
    tracing::info!(
        uuid = %device.uuid,
        organization = ?device.organization_id,
        "device organization link updated",
    );
    Ok(device)
}

/// List a page of devices, each with its users. Empty pages fail with
/// `EmptyCollection`.
pub async fn list_devices(pool: &PgPool, skip: i64, limit: i64) -> RuleResult<Vec<DeviceWithUsers>> {
    let devices = DeviceRepo::list(pool, skip, limit).await?;
    if devices.is_empty() {
        return Err(CoreError::EmptyCollection { entity: "Device" }.into());
    }

    let mut page = Vec::with_capacity(devices.len());
    for device in devices {
        let users = UserRepo::list_by_device(pool, &device.uuid).await?;
        page.push(DeviceWithUsers {
            uuid: device.uuid,
            device_name: device.device_name,
            organization_id: device.organization_id,
            users,
        });
    }
    Ok(page)
}

/// Delete a device and return the refreshed device list. Blocked while
/// the device still owns users.
pub async fn delete_device(pool: &PgPool, uuid: &str) -> RuleResult<Vec<DeviceWithUsers>> {
    let device = DeviceRepo::find_by_uuid(pool, uuid)
        .await?
        .ok_or_else(|| CoreError::NotExists {
            entity: "Device",
            id: uuid.to_string(),
        })?;

    let user_count = UserRepo::count_by_device(pool, &device.uuid).await?;
    if user_count > 0 {
        return Err(CoreError::HasDependents {
            entity: "Device",
            id: uuid.to_string(),
            dependents: "users",
        }
        .into());
    }

    DeviceRepo::delete(pool, uuid).await?;
    tracing::info!(uuid = %device.uuid, "device deleted");

    list_devices(pool, 0, DEFAULT_PAGE_LIMIT).await
}
