//! Error mapping from the rule layer to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use fleet_core::error::CoreError;
use fleet_db::rules::RuleError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`RuleError`] and implements [`IntoResponse`] to produce
/// consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A failure from the rule layer.
    #[error(transparent)]
    Rule(#[from] RuleError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Rule(rule) = self;
        let (status, code, message) = match &rule {
            RuleError::Core(core) => classify_core_error(core),
            RuleError::Database(err) => classify_sqlx_error(err),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Map a domain error to an HTTP status, error code, and message.
///
/// - Absent records and empty lists map to 404.
/// - Malformed identifiers map to 415.
/// - Uniqueness collisions, absent delete targets, and cascade-guard
///   rejections map to 400.
fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    let message = err.to_string();
    match err {
        CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND", message),
        CoreError::NotExists { .. } => (StatusCode::BAD_REQUEST, "NOT_EXISTS", message),
        CoreError::AlreadyExists { .. } => (StatusCode::BAD_REQUEST, "ALREADY_EXISTS", message),
        CoreError::InvalidFormat { .. } => (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "INVALID_FORMAT",
            message,
        ),
        CoreError::HasDependents { .. } => (StatusCode::BAD_REQUEST, "HAS_DEPENDENTS", message),
        CoreError::EmptyCollection { .. } => (StatusCode::NOT_FOUND, "EMPTY_COLLECTION", message),
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// This is a backstop: the rule layer checks uniqueness and existence
/// before mutating, so constraint violations only surface here when two
/// writers race.
///
/// - `RowNotFound` maps to 404.
/// - Unique and foreign-key violations (constraint names starting with
///   `uq_` or declared REFERENCES) map to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL: 23505 unique violation, 23503 foreign-key violation
            match db_err.code().as_deref() {
                Some("23505") => {
                    let constraint = db_err.constraint().unwrap_or("unknown");
                    (
                        StatusCode::BAD_REQUEST,
                        "ALREADY_EXISTS",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    )
                }
                Some("23503") => (
                    StatusCode::BAD_REQUEST,
                    "NOT_FOUND",
                    "Referenced record does not exist".to_string(),
                ),
                _ => {
                    tracing::error!(error = %db_err, "Database error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            }
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: CoreError) -> StatusCode {
        let (status, _, _) = classify_core_error(&err);
        status
    }

    #[test]
    fn maps_each_domain_outcome_to_its_status() {
        assert_eq!(
            status_of(CoreError::NotFound {
                entity: "Device",
                id: "x".into()
            }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(CoreError::NotExists {
                entity: "Device",
                id: "x".into()
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(CoreError::AlreadyExists {
                entity: "Organization",
                field: "inn",
                value: "1".into()
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(CoreError::InvalidFormat {
                field: "uuid",
                value: "nope".into()
            }),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            status_of(CoreError::HasDependents {
                entity: "Organization",
                id: "1".into(),
                dependents: "devices"
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(CoreError::EmptyCollection { entity: "User" }),
            StatusCode::NOT_FOUND
        );
    }
}
