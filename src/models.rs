// src/models.rs
use serde::{Serialize, Deserialize};
use std::fmt;

// Password generation request. Lowercase is always part of the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl GenerationRequest {
    /// Request with every class enabled.
    pub fn with_length(length: usize) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_digits: true,
            include_symbols: true,
        }
    }
}

/// The six rubric checks, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    pub length_ok: bool,
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
    pub not_common: bool,
}

impl Criteria {
    pub fn entries(&self) -> [(&'static str, bool); 6] {
        [
            ("length_ok", self.length_ok),
            ("has_lower", self.has_lower),
            ("has_upper", self.has_upper),
            ("has_digit", self.has_digit),
            ("has_symbol", self.has_symbol),
            ("not_common", self.not_common),
        ]
    }

    pub fn passed(&self) -> u8 {
        self.entries().iter().filter(|(_, ok)| *ok).count() as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthLevel::Weak,
            3..=4 => StrengthLevel::Medium,
            _ => StrengthLevel::Strong,
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLevel::Weak => write!(f, "Weak"),
            StrengthLevel::Medium => write!(f, "Medium"),
            StrengthLevel::Strong => write!(f, "Strong"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthReport {
    pub criteria: Criteria,
    pub score: u8,
    pub level: StrengthLevel,
}

impl StrengthReport {
    pub fn from_criteria(criteria: Criteria) -> Self {
        let score = criteria.passed();
        Self {
            criteria,
            score,
            level: StrengthLevel::from_score(score),
        }
    }

    /// Names of the checks the password did not satisfy.
    pub fn failed_criteria(&self) -> Vec<&'static str> {
        self.criteria
            .entries()
            .iter()
            .filter(|(_, ok)| !*ok)
            .map(|(name, _)| *name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_boundaries() {
        assert_eq!(StrengthLevel::from_score(0), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(2), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(3), StrengthLevel::Medium);
        assert_eq!(StrengthLevel::from_score(4), StrengthLevel::Medium);
        assert_eq!(StrengthLevel::from_score(5), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_score(6), StrengthLevel::Strong);
    }

    #[test]
    fn test_failed_criteria_lists_unmet_checks() {
        let report = StrengthReport::from_criteria(Criteria {
            length_ok: true,
            has_lower: true,
            has_upper: false,
            has_digit: false,
            has_symbol: true,
            not_common: true,
        });
        assert_eq!(report.score, 4);
        assert_eq!(report.level, StrengthLevel::Medium);
        assert_eq!(report.failed_criteria(), vec!["has_upper", "has_digit"]);
    }

    #[test]
    fn test_default_request_enables_every_class() {
        let request = GenerationRequest::default();
        assert_eq!(request.length, 12);
        assert!(request.include_uppercase && request.include_digits && request.include_symbols);
        assert_eq!(GenerationRequest::with_length(16).length, 16);
    }
}
