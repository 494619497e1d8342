//! Seed vocabulary loading.
//!
//! The demo harness seeds its trie from an external word list: one word per
//! line, blank lines and `#` comments skipped. A word listed more than once
//! is inserted more than once, accumulating frequency.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::data_structures::LehuaTrie;
use crate::error::OleloResult;

/// Reads a seed word list from `path`.
///
/// Lines are trimmed; empty lines and lines starting with `#` are skipped.
/// Duplicates are preserved so that repeated words accumulate frequency
/// when inserted.
pub fn load_words<P: AsRef<Path>>(path: P) -> OleloResult<Vec<String>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let words: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    debug!(path = %path.display(), count = words.len(), "Loaded seed word list");
    Ok(words)
}

/// Inserts every word of `words` into `trie`.
pub fn seed_trie(trie: &mut LehuaTrie, words: &[String]) {
    for word in words {
        trie.insert(word);
    }
    info!(
        insertions = words.len(),
        distinct = trie.len(),
        "Seeded trie"
    );
}
