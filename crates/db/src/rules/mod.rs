//! Rule layer: validation and orchestration for every registry operation.
//!
//! One function per entity per verb (get, create, update, list, delete),
//! each taking the pool explicitly. The functions enforce identifier
//! formats, uniqueness, referential existence, and cascade-deletion guards
//! before touching a row, and compose read responses with explicit child
//! queries. Check ordering within each operation is part of the contract
//! and must not be rearranged.
//!
//! Every operation is a single all-or-nothing mutation; the database's
//! atomic commit is the unit of consistency. Concurrent writers follow
//! last-write-wins under the store's default isolation.

pub mod device_rules;
pub mod organization_rules;
pub mod user_rules;

use fleet_core::error::CoreError;

pub use device_rules::{
    create_device, create_device_with_organization, delete_device, get_device, list_devices,
    update_device,
};
pub use organization_rules::{
    create_organization, delete_organization, get_organization, list_organizations,
};
pub use user_rules::{create_user, delete_user, get_user, list_users, update_user};

/// Page size used when a delete operation refreshes its entity list.
pub const DEFAULT_PAGE_LIMIT: i64 = 100;

/// Failure of a rule-layer operation: either a domain outcome from the
/// taxonomy in `fleet-core`, or an underlying database error.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience alias for rule-layer return values.
pub type RuleResult<T> = Result<T, RuleError>;
