//! Seed word bit packing
//!
//! A seed is 13 fixed-width words: the first holds 8 bits, the other twelve
//! hold 10 bits each, 128 bits in total. Words are written MSB first into a
//! single bitstream which is sliced into bytes MSB first, so the seed is
//! exactly [`SEED_LENGTH`] bytes with no padding.

use crate::{Seed, SeedWords, SEED_LENGTH, SEED_WORDS_LENGTH};
use thiserror::Error;

/// Width of the first seed word
pub const FIRST_WORD_BITS: u32 = 8;

/// Width of every other seed word
pub const WORD_BITS: u32 = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Input seed was not of length {expected}, got {found}")]
    InvalidWordCount { expected: usize, found: usize },
    #[error("Seed word {} ({value}) does not fit in {bits} bits", position + 1)]
    WordOutOfRange { position: usize, value: u16, bits: u32 },
    #[error("Checksum digest needs at least 3 bytes, got {found}")]
    DigestTooShort { found: usize },
}

/// Bit width of the seed word at `position`
pub fn word_bits(position: usize) -> u32 {
    if position == 0 {
        FIRST_WORD_BITS
    } else {
        WORD_BITS
    }
}

/// Write cursor over a fixed byte buffer.
#[derive(Debug, Clone, Copy)]
struct BitWriter {
    bytes: [u8; SEED_LENGTH],
    byte: usize,
    bit: u32,
}

impl BitWriter {
    fn new() -> Self {
        Self {
            bytes: [0u8; SEED_LENGTH],
            byte: 0,
            bit: 0,
        }
    }

    /// Append the low `width` bits of `value`, MSB first.
    fn push(mut self, value: u16, width: u32) -> Self {
        for shift in (0..width).rev() {
            if (value >> shift) & 1 != 0 {
                self.bytes[self.byte] |= 0x80 >> self.bit;
            }
            self.bit += 1;
            if self.bit == 8 {
                self.byte += 1;
                self.bit = 0;
            }
        }
        self
    }

    fn finish(self) -> [u8; SEED_LENGTH] {
        self.bytes
    }
}

/// Read cursor mirroring [`BitWriter`].
#[derive(Debug)]
struct BitReader<'a> {
    bytes: &'a [u8],
    byte: usize,
    bit: u32,
}

impl<'a> BitReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            byte: 0,
            bit: 0,
        }
    }

    /// Take the next `width` bits as an integer, MSB first.
    fn take(&mut self, width: u32) -> u16 {
        let mut value = 0u16;
        for _ in 0..width {
            let set = self.bytes[self.byte] & (0x80 >> self.bit) != 0;
            value = (value << 1) | u16::from(set);
            self.bit += 1;
            if self.bit == 8 {
                self.byte += 1;
                self.bit = 0;
            }
        }
        value
    }
}

/// Pack 13 seed words into a 16-byte seed.
pub fn seed_words_to_seed(seed_words: &[u16]) -> Result<Seed, CodecError> {
    if seed_words.len() != SEED_WORDS_LENGTH {
        return Err(CodecError::InvalidWordCount {
            expected: SEED_WORDS_LENGTH,
            found: seed_words.len(),
        });
    }

    let writer = seed_words
        .iter()
        .enumerate()
        .try_fold(BitWriter::new(), |writer, (position, &value)| {
            let bits = word_bits(position);
            if value >> bits != 0 {
                return Err(CodecError::WordOutOfRange {
                    position,
                    value,
                    bits,
                });
            }
            Ok(writer.push(value, bits))
        })?;

    Ok(writer.finish())
}

/// Unpack a 16-byte seed into its 13 seed words.
///
/// Every seed has exactly one word decomposition, so this cannot fail.
pub fn seed_to_seed_words(seed: &Seed) -> SeedWords {
    let mut reader = BitReader::new(seed);
    let mut seed_words = [0u16; SEED_WORDS_LENGTH];
    for (position, word) in seed_words.iter_mut().enumerate() {
        *word = reader.take(word_bits(position));
    }
    seed_words
}
