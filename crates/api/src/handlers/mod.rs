//! Request handlers for the registry entities.
//!
//! Each submodule provides async handler functions (get_by_id, create,
//! update, list, delete) for a single entity type. Handlers delegate to
//! the rule layer in `fleet_db::rules` and map errors via
//! [`crate::error::AppError`].

pub mod device;
pub mod organization;
pub mod user;
