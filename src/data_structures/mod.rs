//! Data structures for Olelo.
//!
//! This module contains the core algorithmic content of the crate: the
//! Lehua Trie word store and its suggestion engine. Implementations adhere
//! to the project requirements:
//! - No unsafe code
//! - Exclusive-ownership node model (no shared or back-references)
//! - Total operations: no input produces an error

pub mod lehua_trie;

// Re-export common data structures
pub use lehua_trie::{LehuaTrie, Suggestion};
