//! Domain error taxonomy.
//!
//! Every rule-layer failure is one of these variants, carrying the entity
//! kind and the offending field or identifier so callers can map it to a
//! user-facing status. None of them are retried or recovered internally.

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A record (or the target of a foreign-key link) does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// The target of a delete does not exist. Kept distinct from
    /// [`CoreError::NotFound`]: a failed read and a failed delete surface
    /// differently to clients.
    #[error("{entity} does not exist: {id}")]
    NotExists { entity: &'static str, id: String },

    /// A uniqueness collision on create.
    #[error("{entity} already exists: {field} = {value}")]
    AlreadyExists {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// A malformed identifier (inn or uuid).
    #[error("invalid {field}: {value}")]
    InvalidFormat { field: &'static str, value: String },

    /// Delete blocked because child records still reference this one.
    #[error("{entity} {id} still owns {dependents}; delete or detach them first")]
    HasDependents {
        entity: &'static str,
        id: String,
        dependents: &'static str,
    },

    /// A list (or post-delete refresh) produced no records. Deliberate
    /// behavior, not an internal error: an empty page is reported as a
    /// failure, never as a successful empty collection.
    #[error("{entity} list is empty")]
    EmptyCollection { entity: &'static str },
}
