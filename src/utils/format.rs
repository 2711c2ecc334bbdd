// src/utils/format.rs
use console::style;

use crate::models::StrengthReport;

// "has_lower" -> "Has Lower"
pub fn criterion_label(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// Multi-line analysis block shown by the menu and the analyze command
pub fn format_report(report: &StrengthReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Level: {}\n", report.level));
    out.push_str(&format!("Score: {}/6\n", report.score));
    out.push_str("\nCriteria met:\n");

    for (name, ok) in report.criteria.entries() {
        let status = if ok {
            style("✅").green()
        } else {
            style("❌").red()
        };
        out.push_str(&format!("  {} {}\n", status, criterion_label(name)));
    }

    out
}

// Numbered list used for batch output
pub fn format_numbered(passwords: &[String]) -> String {
    passwords
        .iter()
        .enumerate()
        .map(|(i, password)| format!("{}. {}", i + 1, password))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strength::analyze_password_strength;

    #[test]
    fn test_criterion_label() {
        assert_eq!(criterion_label("length_ok"), "Length Ok");
        assert_eq!(criterion_label("not_common"), "Not Common");
        assert_eq!(criterion_label(""), "");
    }

    #[test]
    fn test_format_report() {
        console::set_colors_enabled(false);
        let text = format_report(&analyze_password_strength("password"));
        assert!(text.starts_with("Level: Weak\nScore: 2/6\n"));
        assert!(text.contains("✅ Has Lower"));
        assert!(text.contains("❌ Not Common"));
    }

    #[test]
    fn test_format_numbered() {
        let passwords = vec!["abcd".to_string(), "efgh".to_string()];
        assert_eq!(format_numbered(&passwords), "1. abcd\n2. efgh");
        assert_eq!(format_numbered(&[]), "");
    }
}
