// src/generators/mod.rs
use thiserror::Error;

pub mod charset;
mod password;

pub use charset::CharacterClass;
pub use password::PasswordGenerator;

/// Shortest password the generator will produce.
pub const MIN_LENGTH: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length must be at least {minimum} characters (got {length})")]
    InvalidLength { length: usize, minimum: usize },
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
