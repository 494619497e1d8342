//! Test modules for Olelo.
//!
//! This module contains testing infrastructure for the layers around the
//! trie: configuration, error taxonomy, and seed loading. The trie itself
//! is tested in `data_structures::lehua_trie::tests`.

pub mod config_tests;
pub mod seed_tests;
