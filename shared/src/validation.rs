//! Field constraints shared by the entity records
//!
//! Required/email rules are declared inline with `validator` derive;
//! this module holds the patterns that need a compiled regex.

use regex::Regex;
use std::sync::LazyLock;

/// Phone numbers accepted for a vacataire: Senegalese (+221, bare 7x
/// mobile) and French (+33, leading 0) forms, compact or in groups of two.
pub static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^((\+221|\+33|0)[1-9](\d{7,8}|( \d{2}){4})",
        r"|([7-9]\d{8})",
        r"|(\+2217\d{7})",
        r"|(\+33\d{9})",
        r"|(\+33 ?[1-9]( ?\d{2}){4})",
        r"|(\+221 ?7\d{7})",
        r"|(0[1-9](\d{8}|( \d{2}){4}))",
        r"|(0 ?[1-9]( ?\d{2}){4}))$",
    ))
    .expect("phone pattern is a valid regex")
});

/// Returns true when `value` is an accepted phone number
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_pattern_accepts_known_formats() {
        for phone in [
            "+221771234567",
            "771234567",
            "+221 77123456",
            "0612345678",
            "06 12 34 56 78",
            "+33612345678",
            "+33 6 12 34 56 78",
        ] {
            assert!(is_valid_phone(phone), "{phone} should be accepted");
        }
    }

    #[test]
    fn test_phone_pattern_rejects_garbage() {
        for phone in ["", "12345", "abc", "0012345678", "+1 555 0100", "77 123"] {
            assert!(!is_valid_phone(phone), "{phone} should be rejected");
        }
    }
}
