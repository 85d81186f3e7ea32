//! Checksum words
//!
//! The two checksum words are the first 20 bits of a 16-byte BLAKE3 digest of
//! the packed seed. They depend only on the seed bytes, never on how the
//! words are spelled.

use crate::codec::{seed_words_to_seed, CodecError};
use crate::primitives::hash;
use crate::{ChecksumWords, SEED_LENGTH};

/// Digest length used for checksum derivation
pub const CHECKSUM_HASH_LENGTH: usize = SEED_LENGTH;

/// Derive the checksum words for a set of seed words.
pub fn checksum_words_from_seed_words(seed_words: &[u16]) -> Result<ChecksumWords, CodecError> {
    let seed = seed_words_to_seed(seed_words)?;
    let digest = hash(&seed, CHECKSUM_HASH_LENGTH);
    hash_to_checksum_words(&digest)
}

/// Split the leading 20 bits of `digest` into two 10-bit words.
pub fn hash_to_checksum_words(digest: &[u8]) -> Result<ChecksumWords, CodecError> {
    let [h0, h1, h2] = match digest {
        [h0, h1, h2, ..] => [u32::from(*h0), u32::from(*h1), u32::from(*h2)],
        _ => return Err(CodecError::DigestTooShort { found: digest.len() }),
    };

    // Top 10 bits: all of byte 0, top 2 of byte 1
    let word1 = ((h0 << 8) + h1) >> 6;
    // Next 10 bits: low 6 of byte 1, top 4 of byte 2
    let word2 = (((h1 << 10) & 0xffff) + (h2 << 2)) >> 6;

    Ok([word1 as u16, word2 as u16])
}
