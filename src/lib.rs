//! Olelo Library
//!
//! This library contains the core of Olelo: the Lehua Trie word store with
//! its frequency-ranked suggestion engine, plus the configuration, error,
//! and seeding layers used by the demo binary. The library is designed to
//! be used by the binary crate, but can also be used as a dependency by
//! other projects.
//!
//! # Architecture
//!
//! Olelo is designed with the following principles in mind:
//! - A total-function core: no trie operation fails on any input
//! - Exclusive ownership: each node is owned by its parent, so the borrow
//!   checker enforces the single-writer discipline the structure requires
//! - Comprehensive error handling at the harness boundary only

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod seed;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Olelo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function
pub fn init() -> error::OleloResult<()> {
    // Initialize default configuration
    config::init_default_config()?;

    Ok(())
}
