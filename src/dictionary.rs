//! Word list loading for building the vocabulary index.
//!
//! # Dictionary Format
//!
//! Dictionary files are plain text, one entry per line:
//! ```text
//! # Comments start with #
//! hello
//! help 15000
//! ```
//!
//! Only the first whitespace-separated token of a line is used; anything
//! after it (such as a frequency column) is ignored, since suggestions are
//! ranked by edit distance alone.
//!
//! # Fallback Dictionary
//!
//! Without a dictionary file a small built-in word list is used, which is
//! enough to try the shell out.

use crate::error::{AutocorrectError, Result};
use crate::trie::VocabularyIndex;
use ahash::AHashSet;
use log::info;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const FALLBACK_WORDS: &[&str] = &[
    "the", "thy", "tar", "thru", "hr", "thor", "tur", "thar", "tor", "hell", "helly", "hello",
    "help", "hells", "sapa", "supa", "swa", "swap", "spa", "project", "coffee", "coffret",
    "coffer", "coffea",
];

/// A deduplicated word list, in the order words were first seen.
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    words: Vec<String>,
    seen: AHashSet<String>,
    lowercase: bool,
}

impl Dictionary {
    /// Empty dictionary. With `lowercase` set, every added word is folded to
    /// lowercase first.
    pub fn new(lowercase: bool) -> Self {
        Self {
            lowercase,
            ..Self::default()
        }
    }

    /// Load `dictionary_path` if given, otherwise the built-in word list.
    pub fn load(dictionary_path: Option<&Path>, lowercase: bool) -> Result<Self> {
        let mut dictionary = Self::new(lowercase);
        match dictionary_path {
            Some(path) => dictionary.load_file(path)?,
            None => dictionary.load_fallback(),
        }
        Ok(dictionary)
    }

    /// The built-in word list.
    pub fn fallback(lowercase: bool) -> Self {
        let mut dictionary = Self::new(lowercase);
        dictionary.load_fallback();
        dictionary
    }

    /// Read words from a file.
    ///
    /// # Errors
    /// Fails if the file cannot be read or holds no words at all.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let file = File::open(path)?;
        let added = self.load_reader(BufReader::new(file))?;

        if added == 0 && self.words.is_empty() {
            return Err(AutocorrectError::EmptyDictionary(path.to_path_buf()));
        }

        info!("Loaded {} words from {}", added, path.display());
        Ok(())
    }

    /// Read words from any buffered reader. Returns how many new words were
    /// added.
    pub fn load_reader<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        let mut added = 0;
        for line in reader.lines() {
            let line = line?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(word) = line.split_whitespace().next() {
                if self.add(word) {
                    added += 1;
                }
            }
        }
        Ok(added)
    }

    fn load_fallback(&mut self) {
        for word in FALLBACK_WORDS {
            self.add(word);
        }
        info!("Loaded fallback dictionary with {} words", self.words.len());
    }

    /// Add one word. Returns `false` if it was already present.
    pub fn add(&mut self, word: &str) -> bool {
        let word = if self.lowercase {
            word.to_lowercase()
        } else {
            word.to_string()
        };

        if !self.seen.insert(word.clone()) {
            return false;
        }
        self.words.push(word);
        true
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn build_index(&self) -> VocabularyIndex {
        self.words.iter().collect()
    }
}
