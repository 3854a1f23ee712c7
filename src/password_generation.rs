//! Utilities for generating passwords.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::charset::build_alphabet;
use crate::{GenerationConfig, InvalidConfiguration, Secret, Selection};

/// Generate a password from the operating system's secure random source.
pub fn generate(config: &GenerationConfig) -> Result<Secret, InvalidConfiguration> {
    generate_with(&mut OsRng, config)
}

/// Generate `count` independent passwords from the operating system's secure random source.
pub fn generate_multiple(
    count: usize,
    config: &GenerationConfig,
) -> Result<Vec<Secret>, InvalidConfiguration> {
    generate_multiple_with(&mut OsRng, count, config)
}

/// Generate a password by sampling the configured alphabet with bytes drawn from `rng`.
///
/// Each character consumes one byte (more, under [`Selection::RejectionSampling`], when a byte
/// is discarded). Nothing is drawn from `rng` if the configuration is rejected.
pub fn generate_with<R>(
    rng: &mut R,
    config: &GenerationConfig,
) -> Result<Secret, InvalidConfiguration>
where
    R: RngCore + CryptoRng,
{
    if config.length < 1 {
        return Err(InvalidConfiguration::InvalidLength);
    }
    let alphabet = build_alphabet(config);
    if alphabet.is_empty() {
        return Err(InvalidConfiguration::EmptyAlphabet);
    }
    let chars = alphabet.as_slice();
    // The largest alphabet is 88 characters, so every index is reachable from a single byte.
    debug_assert!(chars.len() <= 256);

    let mut secret = Secret(String::with_capacity(config.length));
    let mut bytes = vec![0u8; config.length];
    match config.selection {
        Selection::Modulo => {
            rng.fill_bytes(&mut bytes);
            for &b in &bytes {
                secret.0.push(chars[usize::from(b) % chars.len()]);
            }
        }
        Selection::RejectionSampling => {
            let limit = 256 - 256 % chars.len();
            let mut produced = 0;
            while produced < config.length {
                let wanted = config.length - produced;
                rng.fill_bytes(&mut bytes[..wanted]);
                for &b in &bytes[..wanted] {
                    let b = usize::from(b);
                    if b < limit {
                        secret.0.push(chars[b % chars.len()]);
                        produced += 1;
                    }
                }
            }
        }
    }
    Ok(secret)
}

/// Generate `count` passwords, each with a freshly resolved alphabet and fresh randomness.
pub fn generate_multiple_with<R>(
    rng: &mut R,
    count: usize,
    config: &GenerationConfig,
) -> Result<Vec<Secret>, InvalidConfiguration>
where
    R: RngCore + CryptoRng,
{
    (0..count).map(|_| generate_with(rng, config)).collect()
}
