#![no_main]

use libfuzzer_sys::fuzz_target;
use wordseed_core::{hash_to_checksum_words, seed_to_seed_words, seed_words_to_seed, Seed};

fuzz_target!(|data: &[u8]| {
    // Any digest of 3+ bytes yields two 10-bit words
    if let Ok(words) = hash_to_checksum_words(data) {
        assert!(words.iter().all(|&w| w < 1024));
    }

    // Any 16 bytes unpack to seed words that pack back to the same bytes
    if let Ok(seed) = <Seed>::try_from(data) {
        let seed_words = seed_to_seed_words(&seed);
        assert_eq!(seed_words_to_seed(&seed_words).unwrap(), seed);
    }
});
