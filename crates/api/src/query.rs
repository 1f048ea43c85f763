//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Pagination parameters (`?skip=&limit=`) for list endpoints.
///
/// `skip` defaults to 0 and `limit` to 100; a `skip` past the end of the
/// collection yields an empty page, which the rule layer reports as
/// `EmptyCollection`.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl PaginationParams {
    pub fn skip(&self) -> i64 {
        self.skip.unwrap_or(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(100)
    }
}
