//! Assembling the alphabet a password is drawn from.

use crate::GenerationConfig;

pub static LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub static UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub static NUMBERS: &str = "0123456789";
pub static SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Glyphs that are easily confused with one another in most fonts.
pub static SIMILAR: &[char] = &['0', 'O', '1', 'l', 'I'];

/// The characters eligible for selection in a single generation call.
///
/// Classes are concatenated as-is, so each class weighs in proportionally to its size. Order is
/// lowercase, uppercase, numbers, symbols.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.0.contains(&ch)
    }
}

/// Build the alphabet for the given configuration.
///
/// This never fails: if no class is enabled (or the similar-character filter removes
/// everything) the result is simply empty, and it is up to the caller to reject it.
pub fn build_alphabet(config: &GenerationConfig) -> Alphabet {
    let classes = [
        (config.include_lowercase, LOWERCASE),
        (config.include_uppercase, UPPERCASE),
        (config.include_numbers, NUMBERS),
        (config.include_symbols, SYMBOLS),
    ];

    let mut abc = Vec::new();
    for (enabled, class) in classes {
        if enabled {
            abc.extend(class.chars());
        }
    }

    // Filtered after concatenation, not per class.
    if config.exclude_similar {
        abc.retain(|ch| !SIMILAR.contains(ch));
    }
    Alphabet(abc)
}
