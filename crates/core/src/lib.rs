//! Domain types, error taxonomy, and identifier validation for the fleet
//! registry. This crate has no database or HTTP dependencies; everything
//! store-related lives in `fleet-db`.

pub mod error;
pub mod ident;
pub mod types;
