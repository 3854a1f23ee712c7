//! Heuristic password strength rubrics.
//!
//! Two rubrics are in use and they disagree about the same password, so both are kept:
//!
//! * [`Rubric::FivePoint`] counts five pass/fail checks. This is what the command line and the
//!   main web page show.
//! * [`Rubric::TenPoint`] rewards length in tiers and weighs symbols double, on a scale of ten.
//!   This is what the extension popup and the themed page show.
//!
//! Neither is an entropy estimate.

use serde::Serialize;

use crate::charset::SYMBOLS;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rubric {
    FivePoint,
    TenPoint,
}

/// The individual checks behind a score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Checks {
    /// At least 8 characters.
    pub length: bool,
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StrengthReport {
    pub rubric: Rubric,
    pub checks: Checks,
    pub score: u8,
    pub max_score: u8,
    /// 0 (weakest) through 4.
    pub level: u8,
    pub label: &'static str,
}

impl StrengthReport {
    /// How full a strength bar should be, from 0 to 100.
    pub fn percentage(&self) -> f64 {
        f64::from(self.score) / f64::from(self.max_score) * 100.0
    }
}

static FIVE_POINT_LABELS: [&str; 5] = ["Very Weak", "Weak", "Medium", "Strong", "Very Strong"];
static TEN_POINT_LABELS: [&str; 5] = ["", "Weak", "Fair", "Good", "Strong"];

/// Score `password` under the given rubric.
pub fn score(password: &str, rubric: Rubric) -> StrengthReport {
    match rubric {
        Rubric::FivePoint => five_point(password),
        Rubric::TenPoint => ten_point(password),
    }
}

/// One point per passing check; symbols only count if they come from the generator's own
/// symbol set.
pub fn five_point(password: &str) -> StrengthReport {
    let checks = Checks {
        length: display_length(password) >= 8,
        symbols: password.chars().any(|ch| SYMBOLS.contains(ch)),
        ..character_classes(password)
    };
    let score = [
        checks.length,
        checks.lowercase,
        checks.uppercase,
        checks.numbers,
        checks.symbols,
    ]
    .into_iter()
    .filter(|passed| *passed)
    .count() as u8;

    // Scores 0 and 1 both land on the lowest level.
    let level = score.saturating_sub(1);
    StrengthReport {
        rubric: Rubric::FivePoint,
        checks,
        score,
        max_score: 5,
        level,
        label: FIVE_POINT_LABELS[usize::from(level)],
    }
}

/// Length tiers at 8, 12, 16 and 20 characters (plus a bonus at 25), a point each for
/// lowercase, uppercase and digits, and two points for anything outside `[A-Za-z0-9]`.
pub fn ten_point(password: &str) -> StrengthReport {
    let len = display_length(password);
    let checks = Checks {
        length: len >= 8,
        symbols: password.chars().any(|ch| !ch.is_ascii_alphanumeric()),
        ..character_classes(password)
    };

    let mut score: u8 = [8, 12, 16, 20, 25]
        .into_iter()
        .filter(|tier| len >= *tier)
        .count() as u8;
    for (passed, points) in [
        (checks.lowercase, 1),
        (checks.uppercase, 1),
        (checks.numbers, 1),
        (checks.symbols, 2),
    ] {
        if passed {
            score += points;
        }
    }
    let score = score.min(10);

    let level = match score {
        8..=u8::MAX => 4,
        6..=7 => 3,
        4..=5 => 2,
        2..=3 => 1,
        _ => 0,
    };
    StrengthReport {
        rubric: Rubric::TenPoint,
        checks,
        score,
        max_score: 10,
        level,
        label: TEN_POINT_LABELS[usize::from(level)],
    }
}

/// Length as the browser front-ends measure it, in UTF-16 code units, so a character outside
/// the Basic Multilingual Plane (most emoji) counts twice.
fn display_length(password: &str) -> usize {
    password.encode_utf16().count()
}

fn character_classes(password: &str) -> Checks {
    Checks {
        length: false,
        lowercase: password.chars().any(|ch| ch.is_ascii_lowercase()),
        uppercase: password.chars().any(|ch| ch.is_ascii_uppercase()),
        numbers: password.chars().any(|ch| ch.is_ascii_digit()),
        symbols: false,
    }
}
