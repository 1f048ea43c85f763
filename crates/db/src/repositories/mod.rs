//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async data-access
//! methods that accept `&PgPool` as the first argument. Repositories issue
//! raw queries only; all validation and orchestration lives in
//! [`crate::rules`].

pub mod device_repo;
pub mod organization_repo;
pub mod user_repo;

pub use device_repo::DeviceRepo;
pub use organization_repo::OrganizationRepo;
pub use user_repo::UserRepo;
