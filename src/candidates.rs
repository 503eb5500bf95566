//! Single-edit candidate generation.
//!
//! Given a word, every string reachable with one deletion, one adjacent
//! transposition, one substitution or one insertion is produced. The
//! characters used for substitutions and insertions come from an
//! [`Alphabet`]; nothing outside it is ever introduced, so a query can only
//! be corrected towards words spelled with that alphabet (plus whatever
//! characters the query already contained).

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Characters available for substitutions and insertions.
///
/// Ordered and deduplicated. An empty alphabet is allowed: it simply
/// restricts the generator to deletions and transpositions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// The 26 lowercase Latin letters `a..=z`.
    pub fn lowercase_latin() -> Self {
        ('a'..='z').collect()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.binary_search(&c).is_ok()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::lowercase_latin()
    }
}

impl FromIterator<char> for Alphabet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let set: BTreeSet<char> = iter.into_iter().collect();
        Self {
            chars: set.into_iter().collect(),
        }
    }
}

impl From<&str> for Alphabet {
    fn from(s: &str) -> Self {
        s.chars().collect()
    }
}

impl From<String> for Alphabet {
    fn from(s: String) -> Self {
        s.chars().collect()
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.chars.into_iter().collect()
    }
}

/// All strings one edit away from `word`.
///
/// Split points are taken between characters, not bytes. The result is
/// deduplicated and may contain `word` itself (e.g. substituting a letter
/// with itself).
pub fn generate_candidates(word: &str, alphabet: &Alphabet) -> AHashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut candidates = AHashSet::new();

    for i in 0..=chars.len() {
        let (left, right) = chars.split_at(i);

        // deletion
        if !right.is_empty() {
            candidates.insert(join(&[left, &right[1..]]));
        }

        // adjacent transpose
        if right.len() > 1 {
            candidates.insert(join(&[left, &[right[1], right[0]], &right[2..]]));
        }

        for &c in alphabet.chars() {
            // substitution
            if !right.is_empty() {
                candidates.insert(join(&[left, &[c], &right[1..]]));
            }

            // insertion
            candidates.insert(join(&[left, &[c], right]));
        }
    }

    candidates
}

fn join(parts: &[&[char]]) -> String {
    parts.iter().flat_map(|part| part.iter()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(set: AHashSet<String>) -> Vec<String> {
        let mut words: Vec<String> = set.into_iter().collect();
        words.sort();
        words
    }

    #[test]
    fn test_default_alphabet() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.len(), 26);
        assert!(alphabet.contains('a'));
        assert!(alphabet.contains('z'));
        assert!(!alphabet.contains('A'));
        assert!(!alphabet.contains('1'));
    }

    #[test]
    fn test_alphabet_dedup_and_order() {
        let alphabet = Alphabet::from("cabbac");
        assert_eq!(alphabet.chars(), &['a', 'b', 'c']);
        assert_eq!(String::from(alphabet), "abc");
    }

    #[test]
    fn test_empty_word() {
        let candidates = generate_candidates("", &Alphabet::from("ab"));
        assert_eq!(sorted(candidates), vec!["a", "b"]);
    }

    #[test]
    fn test_single_char_word() {
        let candidates = generate_candidates("a", &Alphabet::from("ab"));
        // "" (delete), "a"/"b" (substitute), "aa"/"ba"/"ab" (insert)
        assert_eq!(sorted(candidates), vec!["", "a", "aa", "ab", "b", "ba"]);
    }

    #[test]
    fn test_empty_alphabet_only_deletes_and_transposes() {
        let candidates = generate_candidates("abc", &Alphabet::from(""));
        assert_eq!(sorted(candidates), vec!["ab", "ac", "acb", "bac", "bc"]);
    }

    #[test]
    fn test_candidate_count_upper_bound() {
        let word = "hela";
        let n = word.len();
        let candidates = generate_candidates(word, &Alphabet::lowercase_latin());

        // n deletes + (n - 1) transposes + 26n substitutions + 26(n + 1) inserts
        assert!(candidates.len() <= n + (n - 1) + 26 * n + 26 * (n + 1));
        assert!(candidates.contains("hel"));
        assert!(candidates.contains("ehla"));
        assert!(candidates.contains("hell"));
        assert!(candidates.contains("help"));
        assert!(candidates.contains("helap"));
    }

    #[test]
    fn test_no_characters_outside_alphabet() {
        let candidates = generate_candidates("ab", &Alphabet::lowercase_latin());
        assert!(candidates
            .iter()
            .all(|c| c.chars().all(|ch| ch.is_ascii_lowercase())));
    }

    #[test]
    fn test_multibyte_split_points() {
        let candidates = generate_candidates("é", &Alphabet::from("e"));
        assert_eq!(sorted(candidates), vec!["", "e", "eé", "ée"]);
    }
}
