//! Word validation, autocomplete and "did you mean" correction over a fixed
//! vocabulary.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Dictionary     │ ← Loads the word list (dictionary.rs)
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ VocabularyIndex │ ← Prefix tree: membership and prefix walks (trie.rs)
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Suggester      │ ← Candidates (candidates.rs) ranked by
//! │                 │   Damerau-Levenshtein distance (distance.rs)
//! └─────────────────┘
//! ```
//!
//! The index is built once and then only read, so a single instance can be
//! shared by reference between any number of lookups.
//!
//! # Example
//!
//! ```rust
//! use trie_autocorrect::{autocomplete, build_index, correct, is_valid, Alphabet};
//!
//! let index = build_index(["hello", "help", "hells", "hell", "helly"]);
//!
//! assert!(is_valid(&index, "help"));
//! assert_eq!(autocomplete(&index, "hells"), vec!["hells"]);
//!
//! let suggestions = correct(&index, "hela", &Alphabet::default());
//! assert_eq!(suggestions[0].term, "hell");
//! assert_eq!(suggestions[0].distance, 1);
//! ```

pub mod candidates;
pub mod config;
pub mod dictionary;
pub mod distance;
pub mod error;
pub mod shell;
pub mod suggest;
pub mod trie;

pub use candidates::{generate_candidates, Alphabet};
pub use config::Config;
pub use dictionary::Dictionary;
pub use distance::{distance, distance_within};
pub use error::{AutocorrectError, Result};
pub use suggest::{Lookup, Mode, Suggester, Suggestion, Suggestions};
pub use trie::{TrieNode, VocabularyIndex};

/// Build the vocabulary index from a word collection.
pub fn build_index<I, S>(words: I) -> VocabularyIndex
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words.into_iter().collect()
}

/// Whether `word` is in the vocabulary.
pub fn is_valid(index: &VocabularyIndex, word: &str) -> bool {
    index.contains(word)
}

/// Every vocabulary word starting with `prefix`.
pub fn autocomplete(index: &VocabularyIndex, prefix: &str) -> Vec<String> {
    Suggester::new(index).autocomplete(prefix)
}

/// Vocabulary words one edit from `word`, closest first.
pub fn correct(index: &VocabularyIndex, word: &str, alphabet: &Alphabet) -> Vec<Suggestion> {
    Suggester::with_alphabet(index, alphabet.clone()).correct(word)
}
