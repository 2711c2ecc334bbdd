// src/generators/charset.rs
use serde::{Serialize, Deserialize};

use crate::models::GenerationRequest;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    pub fn alphabet(&self) -> &'static [u8] {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }
}

/// Classes enabled by a request, lowercase first, then uppercase, digit, symbol.
pub fn enabled_classes(request: &GenerationRequest) -> Vec<CharacterClass> {
    let mut classes = vec![CharacterClass::Lowercase];

    if request.include_uppercase {
        classes.push(CharacterClass::Uppercase);
    }
    if request.include_digits {
        classes.push(CharacterClass::Digit);
    }
    if request.include_symbols {
        classes.push(CharacterClass::Symbol);
    }

    classes
}

/// Build the sampling pool from the enabled classes.
pub fn build_pool(classes: &[CharacterClass]) -> Vec<u8> {
    let mut pool = Vec::new();
    for class in classes {
        pool.extend_from_slice(class.alphabet());
    }
    pool
}
