// src/cli/handlers.rs
use rand_core::{CryptoRng, RngCore};
use serde::Serialize;
use thiserror::Error;

use crate::generators::{GeneratorError, PasswordGenerator};
use crate::models::{GenerationRequest, StrengthReport};
use crate::strength::analyze_password_strength;
use crate::utils::format_report;

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct GeneratedOutput<'a> {
    password: &'a str,
    strength: StrengthReport,
}

#[derive(Serialize)]
struct BatchOutput<'a> {
    passwords: &'a [String],
}

// Handlers for the non-interactive commands. Each returns the text to print.
pub fn handle_generate<R: RngCore + CryptoRng>(
    generator: &mut PasswordGenerator<R>,
    request: &GenerationRequest,
    json: bool,
) -> Result<String, HandlerError> {
    let password = generator.generate_password(request)?;

    if json {
        let output = GeneratedOutput {
            password: &password,
            strength: analyze_password_strength(&password),
        };
        return Ok(serde_json::to_string_pretty(&output)?);
    }

    Ok(password)
}

pub fn handle_batch<R: RngCore + CryptoRng>(
    generator: &mut PasswordGenerator<R>,
    count: usize,
    request: &GenerationRequest,
    json: bool,
) -> Result<String, HandlerError> {
    let passwords = generator.generate_many(count, request)?;

    if json {
        return Ok(serde_json::to_string_pretty(&BatchOutput { passwords: &passwords })?);
    }

    Ok(passwords.join("\n"))
}

pub fn handle_analyze(password: &str, json: bool) -> Result<String, HandlerError> {
    let report = analyze_password_strength(password);

    if json {
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    Ok(format_report(&report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;
    use serde_json::Value;

    fn generator() -> PasswordGenerator<ChaCha20Rng> {
        PasswordGenerator::with_rng(ChaCha20Rng::seed_from_u64(9))
    }

    #[test]
    fn test_generate_plain_output_is_password() {
        let output = handle_generate(&mut generator(), &GenerationRequest::with_length(16), false).unwrap();
        assert_eq!(output.chars().count(), 16);
        assert!(!output.contains('\n'));
    }

    #[test]
    fn test_generate_json_output() {
        let output = handle_generate(&mut generator(), &GenerationRequest::default(), true).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["password"].as_str().unwrap().len(), 12);
        assert!(value["strength"]["score"].as_u64().unwrap() >= 5);
        assert_eq!(value["strength"]["level"], "Strong");
    }

    #[test]
    fn test_generate_invalid_length() {
        let result = handle_generate(&mut generator(), &GenerationRequest::with_length(3), false);
        assert!(matches!(
            result,
            Err(HandlerError::Generator(GeneratorError::InvalidLength { length: 3, .. }))
        ));
    }

    #[test]
    fn test_batch_outputs() {
        let request = GenerationRequest::with_length(10);
        let text = handle_batch(&mut generator(), 5, &request, false).unwrap();
        assert_eq!(text.lines().count(), 5);

        let json = handle_batch(&mut generator(), 3, &request, true).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["passwords"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_analyze_json_output() {
        let output = handle_analyze("password", true).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["score"], 2);
        assert_eq!(value["level"], "Weak");
        assert_eq!(value["criteria"]["not_common"], false);
        assert_eq!(value["criteria"]["length_ok"], true);
    }
}
