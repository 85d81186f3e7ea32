#![no_main]

use libfuzzer_sys::fuzz_target;
use wordseed_core::{phrase_from_seed, validate_phrase, Wordlist};

fuzz_target!(|data: &[u8]| {
    // validate_phrase must never panic; it returns Ok or Err.
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(seed) = validate_phrase(s) {
            // Anything accepted re-renders to a phrase with the same seed
            let phrase = phrase_from_seed(Wordlist::english(), &seed).unwrap();
            assert_eq!(validate_phrase(&phrase).unwrap(), seed);
        }
    }
});
