//! Identifier format validation.
//!
//! Standalone predicates, applied by the rule layer before any store
//! access. They are purely syntactic; existence checks are separate.

use uuid::Uuid;

use crate::types::Inn;

/// True iff `value` parses as a syntactically valid UUID, any version and
/// any variant.
pub fn is_valid_uuid(value: &str) -> bool {
    Uuid::parse_str(value).is_ok()
}

/// True iff `inn` renders as exactly 10 decimal digits.
pub fn is_valid_inn(inn: Inn) -> bool {
    (1_000_000_000..=9_999_999_999).contains(&inn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_canonical_v4_uuid() {
        assert!(is_valid_uuid("67e55044-10b1-426f-9247-bb680e5fe0c8"));
    }

    #[test]
    fn accepts_any_uuid_version_and_variant() {
        // v1
        assert!(is_valid_uuid("c232ab00-9414-11ec-b3c8-9f6bdeced846"));
        // nil
        assert!(is_valid_uuid("00000000-0000-0000-0000-000000000000"));
        // uppercase
        assert!(is_valid_uuid("67E55044-10B1-426F-9247-BB680E5FE0C8"));
    }

    #[test]
    fn rejects_malformed_uuids() {
        assert!(!is_valid_uuid("not-a-uuid"));
        assert!(!is_valid_uuid(""));
        assert!(!is_valid_uuid("67e55044-10b1-426f-9247"));
        assert!(!is_valid_uuid("67e55044-10b1-426f-9247-bb680e5fe0c8ff"));
    }

    #[test]
    fn accepts_ten_digit_inn() {
        assert!(is_valid_inn(1_000_000_000));
        assert!(is_valid_inn(1_234_567_890));
        assert!(is_valid_inn(9_999_999_999));
    }

    #[test]
    fn rejects_inn_outside_ten_digits() {
        assert!(!is_valid_inn(0));
        assert!(!is_valid_inn(999_999_999)); // 9 digits
        assert!(!is_valid_inn(10_000_000_000)); // 11 digits
        assert!(!is_valid_inn(-1_234_567_890));
    }
}
