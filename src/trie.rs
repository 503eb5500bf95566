//! Prefix tree holding the vocabulary.
//!
//! Every edge is one `char`; a node flagged as complete marks the string
//! spelled by the path from the root as a vocabulary word. Children are
//! kept in a `BTreeMap`, so enumeration runs in code point order.
//!
//! The index is built once and only read afterwards:
//! ```rust
//! use trie_autocorrect::trie::VocabularyIndex;
//!
//! let index: VocabularyIndex = ["hell", "hello", "help"].into_iter().collect();
//! assert!(index.contains("help"));
//! assert_eq!(index.collect_words_under("hel"), vec!["hell", "hello", "help"]);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::mem;

/// A single node of the prefix tree.
///
/// Teardown and `Debug` never recurse into children, so a tree as deep as
/// its longest word costs no call stack to drop or print.
#[derive(Default)]
pub struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    end_of_word: bool,
}

impl TrieNode {
    /// Whether the path leading to this node spells a vocabulary word.
    pub fn is_word(&self) -> bool {
        self.end_of_word
    }

    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(mem::take(&mut node.children).into_values());
        }
    }
}

impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("end_of_word", &self.end_of_word)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// The vocabulary, stored as a prefix tree rooted at an owned [`TrieNode`].
#[derive(Debug, Default)]
pub struct VocabularyIndex {
    root: TrieNode,
    /// Number of distinct complete words.
    word_count: usize,
}

impl VocabularyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word, creating missing nodes along its path.
    ///
    /// Inserting a word that is already present changes nothing. The empty
    /// string marks the root itself as a word.
    pub fn insert(&mut self, word: &str) {
        let node = word
            .chars()
            .fold(&mut self.root, |node, c| node.children.entry(c).or_default());

        if !node.end_of_word {
            node.end_of_word = true;
            self.word_count += 1;
        }
    }

    /// Exact membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.node_at(word).is_some_and(TrieNode::is_word)
    }

    /// Whether `prefix` is a path in the tree, word or not.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.node_at(prefix).is_some()
    }

    /// All vocabulary words starting with `prefix`, including `prefix`
    /// itself when it is a word.
    ///
    /// Returns an empty vector if `prefix` is not a path in the tree. The
    /// walk is a pre-order depth-first traversal driven by an explicit stack,
    /// so stack depth never exceeds the longest word.
    pub fn collect_words_under(&self, prefix: &str) -> Vec<String> {
        let Some(start) = self.node_at(prefix) else {
            return Vec::new();
        };

        let mut words = Vec::new();
        if start.end_of_word {
            words.push(prefix.to_string());
        }

        // Each entry is (buffer length at the parent, edge char, child).
        let mut buffer = prefix.to_string();
        let mut stack: Vec<(usize, char, &TrieNode)> = Vec::new();
        push_children(&mut stack, buffer.len(), start);

        while let Some((parent_len, c, node)) = stack.pop() {
            buffer.truncate(parent_len);
            buffer.push(c);

            if node.end_of_word {
                words.push(buffer.clone());
            }
            push_children(&mut stack, buffer.len(), node);
        }

        words
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    fn node_at(&self, path: &str) -> Option<&TrieNode> {
        path.chars().try_fold(&self.root, |node, c| node.children.get(&c))
    }
}

/// Push in reverse so the smallest child is popped first.
fn push_children<'a>(
    stack: &mut Vec<(usize, char, &'a TrieNode)>,
    len: usize,
    node: &'a TrieNode,
) {
    for (&c, child) in node.children.iter().rev() {
        stack.push((len, c, child));
    }
}

impl<S: AsRef<str>> Extend<S> for VocabularyIndex {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for VocabularyIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}
