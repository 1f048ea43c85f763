//! Organization entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use fleet_core::types::Inn;

use crate::models::device::Device;

/// A row from the `organizations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Organization {
    pub inn: Inn,
    pub organization_name: String,
}

/// DTO for creating a new organization. `inn` must render as exactly 10
/// decimal digits and both fields must be unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrganization {
    pub inn: Inn,
    pub organization_name: String,
}

/// An organization together with the devices it owns, composed by the rule
/// layer via an explicit child query.
#[derive(Debug, Clone, Serialize)]
pub struct OrganizationWithDevices {
    pub inn: Inn,
    pub organization_name: String,
    pub devices: Vec<Device>,
}
