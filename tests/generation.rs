use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use passgen::charset::SIMILAR;
use passgen::{
    build_alphabet, generate, generate_multiple, generate_multiple_with, generate_with,
    GenerationConfig, InvalidConfiguration, Selection,
};

fn all_class_combinations() -> impl Iterator<Item = GenerationConfig> {
    (1u8..16).flat_map(|mask| {
        [false, true].into_iter().map(move |exclude_similar| GenerationConfig {
            length: 20,
            include_lowercase: mask & 1 != 0,
            include_uppercase: mask & 2 != 0,
            include_numbers: mask & 4 != 0,
            include_symbols: mask & 8 != 0,
            exclude_similar,
            selection: Selection::Modulo,
        })
    })
}

#[test]
fn default_config_gives_sixteen_alphanumerics() {
    let pw = generate(&GenerationConfig::default()).unwrap();
    assert_eq!(pw.len(), 16);
    assert!(pw.as_str().chars().all(|ch| ch.is_ascii_alphanumeric()));
}

#[test]
fn every_character_comes_from_the_alphabet() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    for selection in [Selection::Modulo, Selection::RejectionSampling] {
        for config in all_class_combinations() {
            let config = GenerationConfig { selection, ..config };
            let alphabet = build_alphabet(&config);
            let pw = generate_with(&mut rng, &config).unwrap();
            assert_eq!(pw.len(), config.length);
            assert!(
                pw.as_str().chars().all(|ch| alphabet.contains(ch)),
                "{config:?}"
            );
        }
    }
}

#[test]
fn excluded_characters_never_appear() {
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    let config = GenerationConfig {
        length: 500,
        include_symbols: true,
        exclude_similar: true,
        ..GenerationConfig::default()
    };
    let pw = generate_with(&mut rng, &config).unwrap();
    assert!(!pw.as_str().chars().any(|ch| SIMILAR.contains(&ch)));
}

#[test]
fn no_classes_is_an_empty_alphabet() {
    for exclude_similar in [false, true] {
        let config = GenerationConfig {
            include_lowercase: false,
            include_uppercase: false,
            include_numbers: false,
            include_symbols: false,
            exclude_similar,
            ..GenerationConfig::default()
        };
        assert_eq!(generate(&config), Err(InvalidConfiguration::EmptyAlphabet));
    }
}

#[test]
fn zero_length_is_invalid() {
    let config = GenerationConfig {
        length: 0,
        ..GenerationConfig::default()
    };
    assert_eq!(generate(&config), Err(InvalidConfiguration::InvalidLength));
}

#[test]
fn batch_returns_requested_count_without_collisions() {
    let config = GenerationConfig {
        length: 12,
        ..GenerationConfig::default()
    };
    let pws = generate_multiple(200, &config).unwrap();
    assert_eq!(pws.len(), 200);
    assert!(pws.iter().all(|pw| pw.len() == 12));
    let unique = pws.iter().map(|pw| pw.as_str()).collect::<HashSet<_>>();
    assert_eq!(unique.len(), 200);
}

#[test]
fn batch_fails_as_a_whole_on_bad_config() {
    let config = GenerationConfig {
        length: 0,
        ..GenerationConfig::default()
    };
    assert_eq!(
        generate_multiple(3, &config),
        Err(InvalidConfiguration::InvalidLength)
    );
}

#[test]
fn seeded_source_is_reproducible() {
    let config = GenerationConfig::default();
    let a = generate_multiple_with(&mut ChaCha20Rng::seed_from_u64(3), 4, &config).unwrap();
    let b = generate_multiple_with(&mut ChaCha20Rng::seed_from_u64(3), 4, &config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn modulo_favours_low_indices() {
    // 62 characters: bytes 248..=255 wrap onto 'a'..='h', so those come up 5/256 of the time
    // instead of 4/256.
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let config = GenerationConfig {
        length: 256_000,
        ..GenerationConfig::default()
    };
    let pw = generate_with(&mut rng, &config).unwrap();
    let count = |ch: char| pw.as_str().chars().filter(|c| *c == ch).count();
    let low = count('a') + count('b') + count('c') + count('d');
    let high = count('w') + count('x') + count('y') + count('z');
    // Expected around 20_000 against 16_000.
    assert!(low > high + 2_000, "low {low}, high {high}");
}

#[test]
fn rejection_sampling_evens_out_the_distribution() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let config = GenerationConfig {
        length: 256_000,
        selection: Selection::RejectionSampling,
        ..GenerationConfig::default()
    };
    let pw = generate_with(&mut rng, &config).unwrap();
    let count = |ch: char| pw.as_str().chars().filter(|c| *c == ch).count();
    let low = count('a') + count('b') + count('c') + count('d');
    let high = count('w') + count('x') + count('y') + count('z');
    // Both around 16_500.
    assert!(low.abs_diff(high) < 1_500, "low {low}, high {high}");
}
