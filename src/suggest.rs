//! Correction and autocomplete lookups over a [`VocabularyIndex`].
//!
//! Correction ranks every in-vocabulary candidate one edit away from the
//! query by its edit distance. Autocomplete enumerates the vocabulary below
//! the query used as a prefix and does no scoring at all.

use crate::candidates::{generate_candidates, Alphabet};
use crate::distance::{distance, distance_within};
use crate::trie::VocabularyIndex;
use log::debug;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub term: String,
    pub distance: usize,
}

impl Suggestion {
    fn new(term: String, distance: usize) -> Self {
        Self { term, distance }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.term, self.distance)
    }
}

/// Which kind of lookup to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Correct,
    Autocomplete,
}

/// Result of [`Suggester::lookup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestions {
    Ranked(Vec<Suggestion>),
    Completions(Vec<String>),
}

impl Suggestions {
    pub fn is_empty(&self) -> bool {
        match self {
            Suggestions::Ranked(items) => items.is_empty(),
            Suggestions::Completions(words) => words.is_empty(),
        }
    }
}

/// Outcome of checking one word, see [`Suggester::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Valid,
    Unknown {
        corrections: Vec<Suggestion>,
        completions: Vec<String>,
    },
}

/// Stateless lookup service borrowing a built index.
pub struct Suggester<'a> {
    index: &'a VocabularyIndex,
    alphabet: Alphabet,
    max_edit_distance: Option<usize>,
}

impl<'a> Suggester<'a> {
    /// Suggester with the default `a..=z` alphabet and no distance bound.
    pub fn new(index: &'a VocabularyIndex) -> Self {
        Self::with_alphabet(index, Alphabet::default())
    }

    pub fn with_alphabet(index: &'a VocabularyIndex, alphabet: Alphabet) -> Self {
        Self {
            index,
            alphabet,
            max_edit_distance: None,
        }
    }

    /// Drop corrections farther than `max` from the query.
    pub fn max_edit_distance(mut self, max: Option<usize>) -> Self {
        self.max_edit_distance = max;
        self
    }

    pub fn lookup(&self, word: &str, mode: Mode) -> Suggestions {
        match mode {
            Mode::Correct => Suggestions::Ranked(self.correct(word)),
            Mode::Autocomplete => Suggestions::Completions(self.autocomplete(word)),
        }
    }

    /// Vocabulary words starting with `prefix`.
    ///
    /// Empty when `prefix` is not a path in the index; no candidates are
    /// generated in that case.
    pub fn autocomplete(&self, prefix: &str) -> Vec<String> {
        self.index.collect_words_under(prefix)
    }

    /// In-vocabulary words one edit away from `word`, closest first.
    ///
    /// Equal distances are ordered by term. An empty vector means no
    /// correction was found.
    pub fn correct(&self, word: &str) -> Vec<Suggestion> {
        let candidates = generate_candidates(word, &self.alphabet);
        let generated = candidates.len();

        let mut suggestions: Vec<Suggestion> = candidates
            .into_iter()
            .filter(|candidate| self.index.contains(candidate))
            .filter_map(|candidate| {
                let distance = match self.max_edit_distance {
                    Some(max) => distance_within(word, &candidate, max)?,
                    None => distance(word, &candidate),
                };
                Some(Suggestion::new(candidate, distance))
            })
            .collect();

        suggestions.sort_by(|a, b| {
            a.distance
                .cmp(&b.distance)
                .then_with(|| a.term.cmp(&b.term))
        });

        debug!(
            "correct({word:?}): {generated} candidates, {} in vocabulary",
            suggestions.len()
        );
        suggestions
    }

    /// Check a word the way an interactive caller does: valid words need no
    /// suggestions, unknown ones get both corrections and completions.
    pub fn check(&self, word: &str) -> Lookup {
        if self.index.contains(word) {
            return Lookup::Valid;
        }

        Lookup::Unknown {
            corrections: self.correct(word),
            completions: self.autocomplete(word),
        }
    }
}
