//! Wordseed Core
//!
//! Compact 15-word recovery phrases and Ed25519 key derivation.
//!
//! # Phrase Layout
//!
//! - 13 seed words: the first carries 8 bits, the rest 10 bits each,
//!   packing into a 16-byte seed
//! - 2 checksum words: the first 20 bits of BLAKE3 of that seed
//!
//! Words are matched on their first three letters.
//!
//! # Key Derivation
//!
//! - Phrase: BLAKE3(seed) at 32 bytes -> Ed25519
//! - Hierarchical: BLAKE3(master key || context) -> Ed25519
//!
//! # Example
//!
//! ```
//! use wordseed_core::{generate_phrase, validate_phrase, keypair_from_phrase, Primitives};
//!
//! let prims = Primitives::ready().unwrap();
//! let phrase = generate_phrase(&prims).unwrap();
//! assert_eq!(phrase.split(' ').count(), wordseed_core::PHRASE_LENGTH);
//!
//! let seed = validate_phrase(&phrase.to_uppercase()).unwrap();
//! assert_eq!(seed.len(), wordseed_core::SEED_LENGTH);
//!
//! let keys = keypair_from_phrase(&prims, &phrase).unwrap();
//! assert!(!keys.public_key.is_empty());
//! ```

pub mod checksum;
pub mod codec;
pub mod config;
pub mod keys;
pub mod phrase;
pub mod primitives;
pub mod wordlist;

pub use checksum::{checksum_words_from_seed_words, hash_to_checksum_words};
pub use codec::{seed_to_seed_words, seed_words_to_seed, CodecError};
pub use config::WordseedConfig;
pub use keys::*;
pub use phrase::*;
pub use primitives::{hash, Primitives, PrimitivesError};
pub use wordlist::{Wordlist, WordlistError, UNIQUE_PREFIX_LEN};

/// Packed seed length in bytes
pub const SEED_LENGTH: usize = 16;

/// Seed words per phrase
pub const SEED_WORDS_LENGTH: usize = 13;

/// Checksum words per phrase
pub const CHECKSUM_WORDS_LENGTH: usize = 2;

/// Total words per phrase
pub const PHRASE_LENGTH: usize = SEED_WORDS_LENGTH + CHECKSUM_WORDS_LENGTH;

/// 16 bytes of packed entropy
pub type Seed = [u8; SEED_LENGTH];

/// Vocabulary indices of the seed words
pub type SeedWords = [u16; SEED_WORDS_LENGTH];

/// Vocabulary indices of the checksum words
pub type ChecksumWords = [u16; CHECKSUM_WORDS_LENGTH];
