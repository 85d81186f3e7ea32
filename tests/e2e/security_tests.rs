//! Security-specific tests.
//!
//! These tests verify:
//! 1. Transcription errors are caught by the checksum
//! 2. Malformed inputs are rejected without panicking
//! 3. Key outputs can be wiped
//! 4. Random-input fuzzing of phrase validation

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wordseed_core::{
    generate_seed_words, keypair_from_phrase, render_phrase, seed_from_phrase, validate_phrase,
    PhraseError, Primitives, Wordlist, PHRASE_LENGTH, SEED_WORDS_LENGTH,
};
use zeroize::Zeroize;

const KNOWN_PHRASE: &str =
    "dash life awesome toast adapt orbit flight wheat animal rule dinner whale about game hair";

fn replace_word(phrase: &str, position: usize, word: &str) -> String {
    let mut words: Vec<&str> = phrase.split(' ').collect();
    words[position] = word;
    words.join(" ")
}

// ============================================================================
// 1. Transcription Error Detection
// ============================================================================

#[test]
fn test_fixed_single_word_mutations_rejected() {
    let mutations = [
        (0, "daughter"),
        (3, "tobacco"),
        (5, "orchard"),
        (7, "ability"),
        (10, "leader"),
        (12, "absent"),
    ];

    for (position, word) in mutations {
        let phrase = replace_word(KNOWN_PHRASE, position, word);
        assert!(
            matches!(
                validate_phrase(&phrase),
                Err(PhraseError::ChecksumMismatch { .. })
            ),
            "Mutating word {} should break the checksum",
            position + 1
        );
    }
}

#[test]
fn test_random_single_word_mutations_rejected() {
    let mut rng = StdRng::seed_from_u64(1337);
    let wordlist = Wordlist::english();

    for _ in 0..200 {
        let seed_words = generate_seed_words(&mut rng);
        let phrase = render_phrase(wordlist, &seed_words).unwrap();

        let position = rng.gen_range(0..SEED_WORDS_LENGTH);
        let original = usize::from(seed_words[position]);
        let replacement = (original + rng.gen_range(1..wordlist.len())) % wordlist.len();
        let mutated = replace_word(&phrase, position, wordlist.word_at(replacement).unwrap());

        match validate_phrase(&mutated) {
            Err(PhraseError::ChecksumMismatch { .. }) => {}
            // A first word past the first 256 entries never resolves
            Err(PhraseError::UnknownPrefix { position: 0, .. }) => assert_eq!(position, 0),
            other => panic!("mutation at word {} not detected: {:?}", position + 1, other),
        }
    }
}

#[test]
fn test_swapped_checksum_words_rejected() {
    let words: Vec<&str> = KNOWN_PHRASE.split(' ').collect();
    let mut swapped = words.clone();
    swapped.swap(13, 14);
    assert!(matches!(
        validate_phrase(&swapped.join(" ")),
        Err(PhraseError::ChecksumMismatch { position: 13, .. })
    ));
}

#[test]
fn test_swapped_seed_words_rejected() {
    let words: Vec<&str> = KNOWN_PHRASE.split(' ').collect();
    let mut swapped = words.clone();
    swapped.swap(2, 3);
    assert!(validate_phrase(&swapped.join(" ")).is_err());
}

#[test]
fn test_invalid_phrase_never_yields_keys() {
    let prims = Primitives::ready().unwrap();
    let phrase = replace_word(KNOWN_PHRASE, 14, "zoo");
    assert!(keypair_from_phrase(&prims, &phrase).is_err());
    assert!(seed_from_phrase(&phrase).is_err());
}

// ============================================================================
// 2. Malformed Input Panic Tests (should NOT panic)
// ============================================================================

#[test]
fn test_validate_garbage_does_not_panic() {
    let many_words = "abandon ".repeat(100);
    let long = "a".repeat(10000);
    let inputs = [
        "",
        "a",
        "hello world",
        "abandon abandon abandon",
        many_words.as_str(),
        "🎉 🎊 🎈 🎃 🎄 🎅 🎆 🎇 🎁 🎂 🎀 🎍 🎉 🎊 🎈", // Unicode, 15 tokens
        "ñña ñña ñña ñña ñña ñña ñña ñña ñña ñña ñña ñña ñña ñña ñña",
        "\0\0\0 \0\0\0 \0\0\0 \0\0\0 \0\0\0 \0\0\0 \0\0\0 \0\0\0 \0\0\0 \0\0\0 \0\0\0 \0\0\0 \0\0\0 \0\0\0 \0\0\0",
        long.as_str(),
    ];

    for input in &inputs {
        assert!(validate_phrase(input).is_err(), "accepted {:?}", input);
    }
}

#[test]
fn test_unicode_tokens_report_unknown_prefix() {
    let phrase = vec!["ñña"; PHRASE_LENGTH].join(" ");
    assert_eq!(
        validate_phrase(&phrase),
        Err(PhraseError::UnknownPrefix {
            position: 0,
            prefix: "ñña".into(),
            bound: 256
        })
    );
}

// ============================================================================
// 3. Key Material Wiping
// ============================================================================

#[test]
fn test_keypair_zeroize_clears_strings() {
    let prims = Primitives::ready().unwrap();
    let mut keys = keypair_from_phrase(&prims, KNOWN_PHRASE).unwrap();
    assert!(!keys.private_key.is_empty());

    keys.zeroize();

    assert!(keys.private_key.is_empty());
    assert!(keys.public_key.is_empty());
    assert!(keys.public_key_raw.is_empty());
}

#[test]
fn test_zeroize_works_on_key_seed() {
    let mut seed = *seed_from_phrase(KNOWN_PHRASE).unwrap();
    assert!(seed.iter().any(|&b| b != 0));
    seed.zeroize();
    assert!(seed.iter().all(|&b| b == 0));
}

// ============================================================================
// 4. Phrase Fuzz Tests (random inputs)
// ============================================================================

#[test]
fn test_validate_fuzz_random_word_sequences() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..1000 {
        let count = rng.gen_range(0..20);
        let phrase: Vec<String> = (0..count)
            .map(|_| {
                let len = rng.gen_range(0..8);
                (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
            })
            .collect();

        // Should not panic
        let _ = validate_phrase(&phrase.join(" "));
    }
}

#[test]
fn test_validate_fuzz_byte_flips() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..500 {
        let mut bytes: Vec<u8> = KNOWN_PHRASE.bytes().collect();
        let idx = rng.gen_range(0..bytes.len());
        bytes[idx] ^= rng.gen_range(1..128u8);

        let corrupted = String::from_utf8_lossy(&bytes).to_string();
        // May succeed (prefix-preserving flip) or fail, but never panic
        let _ = validate_phrase(&corrupted);
    }
}
