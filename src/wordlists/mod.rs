//! Dictionary loading
//!
//! The dictionary is read once at startup and immutable thereafter.

pub mod loader;

/// Default dictionary file, looked up relative to the working directory
pub const DEFAULT_WORDLIST: &str = "words_5.txt";
