// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Suggestion engine for the Lehua Trie.
//!
//! Given a prefix, this module locates the corresponding subtree anchor,
//! enumerates every complete word beneath it together with its accumulated
//! frequency, and ranks the candidates. The subtree walk uses an explicit
//! work list rather than recursion, so deep vocabularies cannot grow the
//! call stack.
//!
//! Ranking is fully deterministic: frequency descending, then lexicographic
//! word order ascending. Child-map iteration order never leaks into the
//! result.

use serde::Serialize;

use super::node::TrieNode;
use super::LehuaTrie;

/// One ranked autocomplete candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// The complete word, prefix included.
    pub word: String,

    /// How many times the word was inserted.
    pub frequency: u64,
}

impl LehuaTrie {
    /// Returns up to `n` completions of `prefix`, ranked by frequency
    /// descending with lexicographic ties.
    ///
    /// Returns an empty vector when `prefix` matches no inserted word or
    /// when `n` is zero. Read-only: the trie is not mutated.
    pub fn suggestions(&self, prefix: &str, n: usize) -> Vec<Suggestion> {
        if n == 0 {
            return Vec::new();
        }
        let anchor = match self.walk(prefix) {
            Some(node) => node,
            None => return Vec::new(),
        };

        let mut candidates = collect_words(anchor, prefix);
        candidates.sort_unstable_by(|a, b| {
            b.frequency
                .cmp(&a.frequency)
                .then_with(|| a.word.cmp(&b.word))
        });
        candidates.truncate(n);
        candidates
    }

    /// Like [`suggestions`](Self::suggestions), projected to bare words.
    pub fn top_n_suggestions(&self, prefix: &str, n: usize) -> Vec<String> {
        self.suggestions(prefix, n)
            .into_iter()
            .map(|s| s.word)
            .collect()
    }
}

/// Enumerates every complete word in the subtree rooted at `anchor`.
///
/// The anchor itself contributes `prefix` unchanged when it terminates a
/// word. Traversal order is irrelevant to callers; ranking imposes the
/// final order.
fn collect_words(anchor: &TrieNode, prefix: &str) -> Vec<Suggestion> {
    let mut found = Vec::new();
    let mut work = vec![(anchor, prefix.to_string())];

    while let Some((node, word)) = work.pop() {
        if node.is_end_of_word {
            found.push(Suggestion {
                word: word.clone(),
                frequency: node.frequency,
            });
        }
        for (&c, child) in &node.children {
            let mut next = word.clone();
            next.push(c);
            work.push((child, next));
        }
    }

    found
}
