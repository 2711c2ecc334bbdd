// src/strength.rs
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::generators::CharacterClass;
use crate::models::{Criteria, StrengthReport};

const MIN_STRONG_LENGTH: usize = 8;

// Compared against the lowercase-folded input
const COMMON_PASSWORDS: [&str; 4] = ["password", "123456", "admin", "qwerty"];

/// Score a password against the six-point rubric.
pub fn analyze_password_strength(password: &str) -> StrengthReport {
    let criteria = Criteria {
        length_ok: password.chars().count() >= MIN_STRONG_LENGTH,
        has_lower: password.chars().any(|c| c.is_lowercase()),
        has_upper: password.chars().any(|c| c.is_uppercase()),
        has_digit: password.chars().any(is_decimal_digit),
        has_symbol: password.chars().any(|c| CharacterClass::Symbol.contains(c)),
        not_common: !is_common_password(password),
    };

    StrengthReport::from_criteria(criteria)
}

// Any Unicode decimal digit (category Nd), not only ASCII 0-9
fn is_decimal_digit(c: char) -> bool {
    c.general_category() == GeneralCategory::DecimalNumber
}

pub fn is_common_password(password: &str) -> bool {
    COMMON_PASSWORDS.contains(&password.to_lowercase().as_str())
}
