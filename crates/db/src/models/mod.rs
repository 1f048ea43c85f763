//! Row models, request DTOs, and response compositions.
//!
//! Each submodule covers one entity: the `FromRow` struct mirroring the
//! table, the create/update DTOs, and the `*With*` composition returned by
//! reads that include child records.

pub mod device;
pub mod organization;
pub mod user;
