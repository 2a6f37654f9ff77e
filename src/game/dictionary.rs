//! Dictionary of valid words
//!
//! The dictionary is both the pool targets are drawn from and the filter that
//! submitted guesses must pass.

use super::error::DictionaryError;
use crate::core::Word;
use crate::wordlists::{WORDS, loader};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::path::Path;

/// Immutable set of valid lowercase words
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashMap<String, usize>,
}

impl Dictionary {
    /// Build a dictionary from words, dropping duplicates
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if no words are given.
    pub fn new(words: Vec<Word>) -> Result<Self, DictionaryError> {
        let mut index = FxHashMap::default();
        let mut unique = Vec::with_capacity(words.len());
        for word in words {
            if !index.contains_key(word.text()) {
                index.insert(word.text().to_string(), unique.len());
                unique.push(word);
            }
        }
        let words = unique;

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self { words, index })
    }

    /// Dictionary compiled into the binary
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if the embedded list holds no valid words.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::new(loader::words_from_slice(WORDS))
    }

    /// Load a dictionary from a word-per-line file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or holds no valid words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let words = loader::load_from_file(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(words)
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(&word.to_lowercase())
    }

    /// Look up the dictionary's copy of a word
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&Word> {
        self.index
            .get(&word.to_lowercase())
            .map(|&i| &self.words[i])
    }

    /// Pick a word uniformly at random
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // Non-empty by construction
        &self.words[rng.random_range(0..self.words.len())]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
