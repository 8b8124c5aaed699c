//! Core domain types
//!
//! The fundamental types of the eliminator: dictionary words and feedback
//! patterns. All types here are pure and have clear semantics.

mod pattern;
mod word;

pub use pattern::{Constraint, Pattern, PatternError};
pub use word::Word;
