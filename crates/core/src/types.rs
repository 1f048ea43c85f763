/// Store-assigned primary keys (users) are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Organization tax identifier. Valid values render as exactly 10 decimal
/// digits; see [`crate::ident::is_valid_inn`].
pub type Inn = i64;
