// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lehua Trie: a prefix-indexed word store.
//!
//! This module provides a character trie supporting exact word lookup,
//! prefix existence checks, and frequency-ranked autocomplete suggestions.
//! Every insertion of a word increments a per-word frequency counter, and
//! the suggestion engine ranks completions by that counter.
//!
//! # Design
//!
//! * Each node exclusively owns its children; the trie owns the root. The
//!   tree is never restructured, shared, or partially dropped, so plain
//!   owned values suffice and no interior locking is carried.
//! * All operations are total: any input, including the empty string, an
//!   unmatched prefix, or a request for zero suggestions, produces a
//!   well-defined `false`/empty result rather than an error.
//! * `insert` takes `&mut self`; the borrow checker therefore enforces the
//!   single-writer discipline the structure requires. A multi-threaded
//!   deployment must wrap the whole trie in one exclusive lock.
//!
//! # Example
//!
//! ```
//! use olelo_lib::data_structures::lehua_trie::LehuaTrie;
//!
//! let mut trie = LehuaTrie::new();
//! trie.insert("apple");
//! trie.insert("app");
//! trie.insert("app");
//!
//! assert!(trie.search("app"));
//! assert!(!trie.search("ap"));
//! assert!(trie.starts_with("ap"));
//!
//! // "app" was inserted twice, so it outranks "apple".
//! assert_eq!(trie.top_n_suggestions("ap", 2), vec!["app", "apple"]);
//! ```

mod node;
mod suggest;

#[cfg(test)]
mod tests;

use node::TrieNode;
pub use suggest::Suggestion;

/// A prefix-indexed word store with per-word insertion frequencies.
///
/// The trie holds exactly one root node representing the empty prefix. The
/// root is created at construction and lives for the trie's lifetime;
/// non-root nodes are created lazily by [`insert`](Self::insert) and never
/// destroyed (there is no delete operation).
#[derive(Debug, Clone, Default)]
pub struct LehuaTrie {
    /// The root node, representing the empty prefix.
    root: TrieNode,

    /// Count of distinct complete words, maintained by `insert`.
    words: usize,
}

impl LehuaTrie {
    /// Creates a new empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `word`, creating any missing edges along its path, and
    /// increments the frequency at the word's terminal node.
    ///
    /// Inserting the same word `k` times yields a frequency of `k`.
    /// Inserting the empty word marks the root itself as a complete word;
    /// this is a valid edge case, not an error.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.child_or_insert(c);
        }
        if !node.is_end_of_word {
            node.is_end_of_word = true;
            self.words += 1;
        }
        node.frequency = node.frequency.saturating_add(1);
    }

    /// Returns `true` iff `word` was inserted as a complete word.
    ///
    /// A word that exists only as a prefix of other inserted words returns
    /// `false`.
    pub fn search(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|node| node.is_end_of_word)
    }

    /// Returns `true` iff some inserted word has `prefix` as a prefix.
    ///
    /// The empty prefix always returns `true`: its path (the root) exists
    /// by construction.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Returns the number of distinct complete words in the trie.
    pub fn len(&self) -> usize {
        self.words
    }

    /// Returns `true` if no complete word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Walks from the root along `path`, returning the node it ends at, or
    /// `None` as soon as a required edge is missing.
    ///
    /// Shared by `search`, `starts_with`, and the suggestion engine's
    /// anchor resolution.
    fn walk(&self, path: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in path.chars() {
            node = node.child(c)?;
        }
        Some(node)
    }
}
