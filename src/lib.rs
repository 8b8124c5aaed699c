//! Wordle Advisor
//!
//! A word-elimination helper for Wordle: filters a dictionary against
//! feedback patterns from prior guesses and ranks the surviving candidates
//! by a letter-frequency heuristic.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_advisor::core::{Pattern, Word};
//!
//! let word = Word::new("crane");
//! let pattern = Pattern::parse("+R-O").unwrap();
//!
//! // R is in CRANE but not at position 0, and O is absent
//! assert!(pattern.matches(&word));
//! ```

// Core domain types
pub mod core;

// Elimination and ranking engine
pub mod advisor;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
