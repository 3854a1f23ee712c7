use serde::{Deserialize, Serialize};

/// The knobs for a single generation call.
///
/// Field names serialize in camelCase so a saved configuration lines up with the preferences
/// record the other front-ends keep. Missing fields fall back to [`GenerationConfig::default`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationConfig {
    pub length: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub exclude_similar: bool,
    pub selection: Selection,
}

impl Default for GenerationConfig {
    /// Sixteen characters of letters and digits.
    fn default() -> GenerationConfig {
        GenerationConfig {
            length: 16,
            include_lowercase: true,
            include_uppercase: true,
            include_numbers: true,
            include_symbols: false,
            exclude_similar: false,
            selection: Selection::default(),
        }
    }
}

/// How a random byte is mapped onto an index into the alphabet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Selection {
    /// `byte % alphabet.len()`.
    ///
    /// Unless the alphabet size divides 256, the low indices come up slightly more often than
    /// the rest. Passwords are still unpredictable; this is kept so output matches the
    /// distribution of the existing web and extension generators.
    #[default]
    Modulo,
    /// Discard bytes that fall into the incomplete last "lap" of the alphabet and draw again,
    /// which makes every index equally likely.
    RejectionSampling,
}
