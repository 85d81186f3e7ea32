//! Ordered vocabulary lookups
//!
//! Phrases are matched on the first [`UNIQUE_PREFIX_LEN`] characters of each
//! word, so a vocabulary must keep those prefixes unique: within the first
//! [`FIRST_WORD_BOUND`] entries (the scope of the first phrase word) and
//! within the whole list (every other word).

mod english;

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;
use thiserror::Error;

/// Number of leading characters that identify a word
pub const UNIQUE_PREFIX_LEN: usize = 3;

/// The first phrase word only carries 8 bits, so it indexes the first 256 words
pub const FIRST_WORD_BOUND: usize = 256;

/// Smallest vocabulary able to hold a 10-bit word
pub const MIN_VOCABULARY_SIZE: usize = 1024;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordlistError {
    #[error("Word index {index} out of range for a {len}-word list")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Prefix \"{prefix}\" not found in the first {bound} words")]
    PrefixNotFound { prefix: String, bound: usize },
    #[error("Invalid vocabulary: {0}")]
    InvalidVocabulary(String),
}

/// Read-only ordered vocabulary with a precomputed prefix index.
#[derive(Debug, Clone)]
pub struct Wordlist {
    words: Vec<String>,
    /// prefix -> first index carrying it
    prefixes: HashMap<String, usize>,
}

impl Wordlist {
    /// Build a vocabulary from an ordered list of words.
    ///
    /// No invariants are checked here; see [`Wordlist::check_invariants`].
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();

        let mut prefixes = HashMap::with_capacity(words.len());
        for (index, word) in words.iter().enumerate() {
            if let Some(prefix) = prefix_of(word) {
                prefixes.entry(prefix.to_string()).or_insert(index);
            }
        }

        Self { words, prefixes }
    }

    /// The built-in English vocabulary (1024 words).
    pub fn english() -> &'static Wordlist {
        static ENGLISH: OnceLock<Wordlist> = OnceLock::new();
        ENGLISH.get_or_init(|| Wordlist::new(english::ENGLISH))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Word at `index`
    pub fn word_at(&self, index: usize) -> Result<&str, WordlistError> {
        self.words
            .get(index)
            .map(String::as_str)
            .ok_or(WordlistError::IndexOutOfRange {
                index,
                len: self.words.len(),
            })
    }

    /// First index `j < bound` whose word starts with `prefix`.
    ///
    /// The prefix map keeps the first occurrence of every prefix, so a hit
    /// at or past `bound` means no earlier word carries it either.
    pub fn index_of_prefix(&self, prefix: &str, bound: usize) -> Result<usize, WordlistError> {
        match self.prefixes.get(prefix) {
            Some(&index) if index < bound => Ok(index),
            _ => Err(WordlistError::PrefixNotFound {
                prefix: prefix.to_string(),
                bound: bound.min(self.words.len()),
            }),
        }
    }

    /// Smallest prefix length at which every word is distinguishable.
    ///
    /// Returns the longest word length when two words are equal or one is a
    /// prefix of another.
    pub fn unique_prefix_len(&self) -> usize {
        let longest = self.words.iter().map(|w| w.chars().count()).max().unwrap_or(0);

        (1..=longest)
            .find(|&n| {
                let mut seen = HashSet::with_capacity(self.words.len());
                self.words
                    .iter()
                    .all(|w| seen.insert(w.chars().take(n).collect::<String>()))
            })
            .unwrap_or(longest)
    }

    /// Check the properties phrase encoding depends on.
    ///
    /// Only needed for vocabularies loaded from outside the crate; queries
    /// never call this.
    pub fn check_invariants(&self) -> Result<(), WordlistError> {
        if self.words.len() < MIN_VOCABULARY_SIZE {
            return Err(WordlistError::InvalidVocabulary(format!(
                "need at least {} words, got {}",
                MIN_VOCABULARY_SIZE,
                self.words.len()
            )));
        }

        let mut seen: HashMap<&str, usize> = HashMap::with_capacity(self.words.len());
        for (index, word) in self.words.iter().enumerate() {
            let prefix = prefix_of(word).ok_or_else(|| {
                WordlistError::InvalidVocabulary(format!(
                    "word {} (\"{}\") is shorter than {} letters",
                    index, word, UNIQUE_PREFIX_LEN
                ))
            })?;

            // Uniqueness over the full list implies uniqueness over the first 256.
            match seen.entry(prefix) {
                Entry::Occupied(first) => {
                    return Err(WordlistError::InvalidVocabulary(format!(
                        "words {} and {} share the prefix \"{}\"",
                        first.get(),
                        index,
                        prefix
                    )));
                }
                Entry::Vacant(slot) => {
                    slot.insert(index);
                }
            }
        }

        Ok(())
    }
}

/// First [`UNIQUE_PREFIX_LEN`] characters of `word`, or `None` when it is shorter.
pub fn prefix_of(word: &str) -> Option<&str> {
    match word.char_indices().nth(UNIQUE_PREFIX_LEN) {
        Some((end, _)) => Some(&word[..end]),
        None if word.chars().count() == UNIQUE_PREFIX_LEN => Some(word),
        None => None,
    }
}
