// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Lehua Trie.
//!
//! Nodes are the fundamental building blocks of the trie. Each node is
//! exclusively owned by its parent (the root by the trie itself), so the
//! whole tree is a single ownership hierarchy with no sharing and no
//! back-references.

use fnv::FnvHashMap;

/// A node in the Lehua Trie.
///
/// Each node represents one position in the character-path space: the path
/// from the root to a node spells the word or prefix that node stands for.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    /// Map of characters to child nodes; at most one edge per character.
    pub(crate) children: FnvHashMap<char, TrieNode>,

    /// Whether some inserted word terminates exactly at this node.
    pub(crate) is_end_of_word: bool,

    /// Number of times a word terminating here has been inserted.
    /// Meaningful only when `is_end_of_word` is true; 0 otherwise.
    pub(crate) frequency: u64,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the child node for `c`, if the edge exists.
    pub(crate) fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Returns the child node for `c`, creating the edge if it is missing.
    pub(crate) fn child_or_insert(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_insert_with(TrieNode::new)
    }
}
