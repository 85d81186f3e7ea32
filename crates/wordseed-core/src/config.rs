//! Configuration: parsed from a TOML file + environment variable overrides.
//!
//! Priority: environment variables > config file > defaults.
//!
//! ```toml
//! [wordlist]
//! # One word per line; omit to use the built-in English list
//! path = "/etc/wordseed/words.txt"
//! ```

use crate::wordlist::Wordlist;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding `wordlist.path`
pub const ENV_WORDLIST_PATH: &str = "WORDSEED_WORDLIST_PATH";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordseedConfig {
    /// Vocabulary settings
    #[serde(default)]
    pub wordlist: WordlistSection,
}

/// Vocabulary settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordlistSection {
    /// External wordlist file; the built-in English list when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl WordseedConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read config file: {}", path.display()))?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Invalid TOML in config file")
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var(ENV_WORDLIST_PATH) {
            if !path.is_empty() {
                log::debug!("wordlist path overridden from {}", ENV_WORDLIST_PATH);
                self.wordlist.path = Some(PathBuf::from(path));
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.wordlist.path {
            if !path.is_file() {
                anyhow::bail!("wordlist.path does not point to a file: {}", path.display());
            }
        }
        Ok(())
    }

    /// Build the configured vocabulary.
    ///
    /// External lists hold one word per line; blank lines and `#` comments
    /// are skipped. They must satisfy [`Wordlist::check_invariants`].
    pub fn load_wordlist(&self) -> Result<Wordlist> {
        let Some(path) = &self.wordlist.path else {
            return Ok(Wordlist::english().clone());
        };

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read wordlist: {}", path.display()))?;

        let wordlist = Wordlist::new(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_lowercase),
        );

        wordlist
            .check_invariants()
            .with_context(|| format!("Unusable wordlist: {}", path.display()))?;

        log::debug!("loaded {}-word list from {}", wordlist.len(), path.display());
        Ok(wordlist)
    }
}
