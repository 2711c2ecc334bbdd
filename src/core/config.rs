// src/core/config.rs
use std::env;
use std::str::FromStr;
use log::LevelFilter;

use crate::generators::MIN_LENGTH;

// Runtime defaults for the generator shell
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub quick_password_length: usize,
    pub strong_password_length: usize,
    pub default_batch_count: usize,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 12,
            quick_password_length: 12,
            strong_password_length: 16,
            default_batch_count: 5,

            // Logging
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        // Password Generation
        if let Some(length) = parse_length("PASSGEN_DEFAULT_LENGTH") {
            config.default_password_length = length;
        }

        if let Some(length) = parse_length("PASSGEN_QUICK_LENGTH") {
            config.quick_password_length = length;
        }

        if let Some(length) = parse_length("PASSGEN_STRONG_LENGTH") {
            config.strong_password_length = length;
        }

        if let Some(count) = parse_var::<usize>("PASSGEN_BATCH_COUNT") {
            config.default_batch_count = count;
        }

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => log::warn!("Unknown log level '{}', keeping {}", level, config.log_level),
            }
        }

        config
    }
}

fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    let val = env::var(key).ok()?;
    match val.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            log::warn!("Ignoring invalid value '{}' for {}", val, key);
            None
        }
    }
}

// Lengths below the generator minimum would make every shortcut fail
fn parse_length(key: &str) -> Option<usize> {
    parse_var::<usize>(key).filter(|length| {
        if *length < MIN_LENGTH {
            log::warn!("Ignoring {}={}: minimum is {}", key, length, MIN_LENGTH);
            false
        } else {
            true
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEYS: [&str; 5] = [
        "PASSGEN_DEFAULT_LENGTH",
        "PASSGEN_QUICK_LENGTH",
        "PASSGEN_STRONG_LENGTH",
        "PASSGEN_BATCH_COUNT",
        "LOG_LEVEL",
    ];

    fn clear_env() {
        for key in KEYS {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_env() {
        clear_env();
        assert_eq!(Config::load(), Config::default());
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        env::set_var("PASSGEN_DEFAULT_LENGTH", "20");
        env::set_var("PASSGEN_STRONG_LENGTH", "32");
        env::set_var("PASSGEN_BATCH_COUNT", "3");
        env::set_var("LOG_LEVEL", "DEBUG");

        let config = Config::load();
        assert_eq!(config.default_password_length, 20);
        assert_eq!(config.quick_password_length, 12);
        assert_eq!(config.strong_password_length, 32);
        assert_eq!(config.default_batch_count, 3);
        assert_eq!(config.log_level, LevelFilter::Debug);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_values_are_ignored() {
        clear_env();
        env::set_var("PASSGEN_DEFAULT_LENGTH", "twelve");
        env::set_var("PASSGEN_QUICK_LENGTH", "2");
        env::set_var("LOG_LEVEL", "loud");

        let config = Config::load();
        assert_eq!(config, Config::default());

        clear_env();
    }
}
