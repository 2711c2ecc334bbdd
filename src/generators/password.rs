// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha20Rng;
use rand_core::{CryptoRng, RngCore, SeedableRng};

use super::charset::{build_pool, enabled_classes};
use super::{GeneratorError, Result, MIN_LENGTH};
use crate::models::GenerationRequest;

/// Password generator backed by a single cryptographically secure RNG.
///
/// The same source draws the guaranteed class characters, the pool fill
/// and the final shuffle.
pub struct PasswordGenerator<R = ChaCha20Rng> {
    rng: R,
}

impl PasswordGenerator<ChaCha20Rng> {
    pub fn new() -> Self {
        PasswordGenerator {
            rng: ChaCha20Rng::from_entropy(),
        }
    }
}

impl Default for PasswordGenerator<ChaCha20Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    pub fn generate_password(&mut self, request: &GenerationRequest) -> Result<String> {
        validate(request)?;

        let classes = enabled_classes(request);
        let pool = build_pool(&classes);

        log::debug!(
            "Generating password: length={} classes={:?}",
            request.length,
            classes
        );

        let mut password: Vec<u8> = Vec::with_capacity(request.length);

        // One of each enabled class, lowercase first
        for class in &classes {
            let alphabet = class.alphabet();
            password.push(alphabet[self.rng.gen_range(0..alphabet.len())]);
        }

        let dist = Uniform::from(0..pool.len());
        while password.len() < request.length {
            password.push(pool[dist.sample(&mut self.rng)]);
        }

        password.shuffle(&mut self.rng);

        Ok(password.into_iter().map(char::from).collect())
    }

    /// `count` independent passwords from the same request. Outputs may repeat.
    pub fn generate_many(&mut self, count: usize, request: &GenerationRequest) -> Result<Vec<String>> {
        validate(request)?;

        log::debug!("Generating batch of {} passwords", count);

        (0..count).map(|_| self.generate_password(request)).collect()
    }
}

fn validate(request: &GenerationRequest) -> Result<()> {
    if request.length < MIN_LENGTH {
        log::warn!("Rejected password length {}", request.length);
        return Err(GeneratorError::InvalidLength {
            length: request.length,
            minimum: MIN_LENGTH,
        });
    }
    Ok(())
}
