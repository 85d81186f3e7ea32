//! Recovery phrase generation and validation
//!
//! A phrase is 15 lowercase words: 13 seed words followed by 2 checksum
//! words. Words are recognised by their first three letters, so a user may
//! type any word sharing the expected prefix.

use crate::checksum::checksum_words_from_seed_words;
use crate::codec::{seed_to_seed_words, seed_words_to_seed, word_bits, CodecError, WORD_BITS};
use crate::primitives::{hash, Primitives, ED25519_SEED_LENGTH};
use crate::wordlist::{prefix_of, Wordlist, WordlistError, FIRST_WORD_BOUND};
use crate::{Seed, SeedWords, PHRASE_LENGTH, SEED_WORDS_LENGTH};
use rand::{CryptoRng, Rng, RngCore};
use thiserror::Error;
use zeroize::Zeroizing;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhraseError {
    #[error("Phrase must be {expected} words long, got {found}")]
    WrongWordCount { expected: usize, found: usize },
    #[error("Word {} is not at least 3 letters long", position + 1)]
    WordTooShort { position: usize },
    #[error("{}", unknown_prefix_message(*position, prefix, *bound))]
    UnknownPrefix {
        position: usize,
        prefix: String,
        bound: usize,
    },
    #[error("Word {} (\"{found}\") is not a valid checksum for the seed, expected prefix \"{expected}\"", position + 1)]
    ChecksumMismatch {
        position: usize,
        expected: String,
        found: String,
    },
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Wordlist(#[from] WordlistError),
}

fn unknown_prefix_message(position: usize, prefix: &str, bound: usize) -> String {
    if position == 0 {
        format!(
            "Prefix \"{}\" for word 1 must be found in the first {} words of the wordlist",
            prefix, bound
        )
    } else {
        format!(
            "Unrecognized prefix \"{}\" at word {}, not found in wordlist",
            prefix,
            position + 1
        )
    }
}

/// Trim surrounding whitespace and lowercase.
pub fn sanitize_phrase(phrase: &str) -> String {
    phrase.trim().to_lowercase()
}

/// Draw 13 random seed words.
///
/// Each draw is uniform over the 1024-word range and then masked to the
/// word's width, so the first word always falls within the first 256 words.
pub fn generate_seed_words<R: RngCore + CryptoRng>(rng: &mut R) -> SeedWords {
    let mut seed_words = [0u16; SEED_WORDS_LENGTH];
    for (position, word) in seed_words.iter_mut().enumerate() {
        let draw: u16 = rng.gen_range(0..1 << WORD_BITS);
        *word = draw & ((1 << word_bits(position)) - 1);
    }
    seed_words
}

/// Render seed words plus their checksum as a phrase.
pub fn render_phrase(wordlist: &Wordlist, seed_words: &[u16]) -> Result<String, PhraseError> {
    let checksum_words = checksum_words_from_seed_words(seed_words)?;

    let words = seed_words
        .iter()
        .chain(checksum_words.iter())
        .map(|&index| wordlist.word_at(usize::from(index)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(words.join(" "))
}

/// Generate a new random phrase from the OS CSPRNG and the built-in wordlist.
pub fn generate_phrase(prims: &Primitives) -> Result<String, PhraseError> {
    generate_phrase_with(&mut prims.rng(), Wordlist::english())
}

/// Generate a new random phrase from an explicit random source and wordlist.
pub fn generate_phrase_with<R: RngCore + CryptoRng>(
    rng: &mut R,
    wordlist: &Wordlist,
) -> Result<String, PhraseError> {
    let seed_words = Zeroizing::new(generate_seed_words(rng));
    log::trace!("generated {} seed words", seed_words.len());
    render_phrase(wordlist, &*seed_words)
}

/// Render an existing seed as its phrase.
pub fn phrase_from_seed(wordlist: &Wordlist, seed: &Seed) -> Result<String, PhraseError> {
    let seed_words = Zeroizing::new(seed_to_seed_words(seed));
    render_phrase(wordlist, &*seed_words)
}

/// Validate a phrase against the built-in wordlist and return its seed.
pub fn validate_phrase(phrase: &str) -> Result<Seed, PhraseError> {
    validate_phrase_in(Wordlist::english(), phrase)
}

/// Validate a phrase against `wordlist` and return its seed.
pub fn validate_phrase_in(wordlist: &Wordlist, phrase: &str) -> Result<Seed, PhraseError> {
    let sanitized = Zeroizing::new(sanitize_phrase(phrase));
    let words: Vec<&str> = sanitized.split_whitespace().collect();

    if words.len() != PHRASE_LENGTH {
        return Err(PhraseError::WrongWordCount {
            expected: PHRASE_LENGTH,
            found: words.len(),
        });
    }

    let seed_words = Zeroizing::new(parse_seed_words(wordlist, &words[..SEED_WORDS_LENGTH])?);

    let checksum_words = checksum_words_from_seed_words(&*seed_words)?;
    for (offset, &expected_index) in checksum_words.iter().enumerate() {
        let position = SEED_WORDS_LENGTH + offset;
        let expected = wordlist.word_at(usize::from(expected_index))?;
        let expected = prefix_of(expected).unwrap_or(expected);
        let found = prefix_of(words[position]).unwrap_or(words[position]);

        if found != expected {
            log::debug!("phrase checksum mismatch at word {}", position + 1);
            return Err(PhraseError::ChecksumMismatch {
                position,
                expected: expected.to_string(),
                found: found.to_string(),
            });
        }
    }

    Ok(seed_words_to_seed(&*seed_words)?)
}

/// Resolve the seed words of a phrase by prefix.
fn parse_seed_words(wordlist: &Wordlist, words: &[&str]) -> Result<SeedWords, PhraseError> {
    let mut seed_words = [0u16; SEED_WORDS_LENGTH];

    for (position, (slot, word)) in seed_words.iter_mut().zip(words).enumerate() {
        let prefix = prefix_of(word).ok_or_else(|| {
            log::debug!("phrase word {} too short", position + 1);
            PhraseError::WordTooShort { position }
        })?;

        let bound = if position == 0 {
            FIRST_WORD_BOUND
        } else {
            wordlist.len()
        };

        let index = wordlist.index_of_prefix(prefix, bound).map_err(|_| {
            log::debug!("phrase word {} has an unknown prefix", position + 1);
            PhraseError::UnknownPrefix {
                position,
                prefix: prefix.to_string(),
                bound: bound.min(wordlist.len()),
            }
        })?;

        // Custom wordlists may be longer than a seed word can address
        *slot = u16::try_from(index).map_err(|_| CodecError::WordOutOfRange {
            position,
            value: u16::MAX,
            bits: word_bits(position),
        })?;
    }

    Ok(seed_words)
}

/// Derive the 32-byte key seed for a phrase: BLAKE3 of the validated seed.
pub fn seed_from_phrase(phrase: &str) -> Result<Zeroizing<[u8; ED25519_SEED_LENGTH]>, PhraseError> {
    seed_from_phrase_in(Wordlist::english(), phrase)
}

/// [`seed_from_phrase`] against a custom wordlist.
pub fn seed_from_phrase_in(
    wordlist: &Wordlist,
    phrase: &str,
) -> Result<Zeroizing<[u8; ED25519_SEED_LENGTH]>, PhraseError> {
    let seed = Zeroizing::new(validate_phrase_in(wordlist, phrase)?);
    let digest = Zeroizing::new(hash(&*seed, ED25519_SEED_LENGTH));

    let mut key_seed = Zeroizing::new([0u8; ED25519_SEED_LENGTH]);
    key_seed.copy_from_slice(&digest);
    Ok(key_seed)
}
