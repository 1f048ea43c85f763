//! Device entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use fleet_core::types::Inn;

use crate::models::organization::CreateOrganization;
use crate::models::user::User;

/// A row from the `devices` table.
///
/// `uuid` is the primary key, stored as text. `organization_id` is the
/// only mutable field; a `None` means the device is unattached.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Device {
    pub uuid: String,
    pub device_name: String,
    pub organization_id: Option<Inn>,
}

/// DTO for creating a new device, optionally linked to an existing
/// organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDevice {
    pub uuid: String,
    pub device_name: String,
    pub organization_id: Option<Inn>,
}

/// DTO for creating a device together with a brand-new organization it
/// will belong to. The embedded organization is subject to the ordinary
/// organization create rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDeviceWithOrganization {
    pub uuid: String,
    pub device_name: String,
    pub organization: CreateOrganization,
}

/// DTO for relinking a device. A `None` clears the link unconditionally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDevice {
    pub organization_id: Option<Inn>,
}

/// A device together with the users it owns.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceWithUsers {
    pub uuid: String,
    pub device_name: String,
    pub organization_id: Option<Inn>,
    pub users: Vec<User>,
}
