//! Random password generation from a configurable character set, and heuristic strength
//! scoring of the result.
//!
//! Every function here is synchronous and stateless. Randomness comes either from the operating
//! system ([`generate`], [`generate_multiple`]) or from any `RngCore + CryptoRng` the caller
//! hands in ([`generate_with`], [`generate_multiple_with`]).

use serde::{Deserialize, Serialize};

pub mod charset;
mod config;
pub mod password_generation;
pub mod strength;

pub use charset::{build_alphabet, Alphabet};
pub use config::{GenerationConfig, Selection};
pub use password_generation::{generate, generate_multiple, generate_multiple_with, generate_with};
pub use strength::{score, Checks, Rubric, StrengthReport};

/// Why a [`GenerationConfig`] can't produce a password.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidConfiguration {
    #[error("password length must be at least 1")]
    InvalidLength,
    /// No character class was selected, or excluding similar characters left nothing.
    #[error("at least one character type must be included")]
    EmptyAlphabet,
}

/// A generated password. `Debug` output never shows the contents.
#[derive(Clone, Eq, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Secret(String);

opaque_debug::implement!(Secret);

impl Secret {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// The length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Secret {
        Secret(s)
    }
}

impl AsRef<str> for Secret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_debug_is_opaque() {
        let secret = Secret::from("hunter2".to_owned());
        assert!(!format!("{secret:?}").contains("hunter2"));
        assert_eq!(secret.as_str(), "hunter2");
    }

    #[test]
    fn error_messages_name_the_problem() {
        assert_eq!(
            InvalidConfiguration::InvalidLength.to_string(),
            "password length must be at least 1"
        );
        assert_eq!(
            InvalidConfiguration::EmptyAlphabet.to_string(),
            "at least one character type must be included"
        );
    }
}
