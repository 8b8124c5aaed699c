//! Elimination and ranking engine
//!
//! Filters the candidate pool against feedback patterns and ranks survivors
//! by letter-frequency score.

mod candidates;
mod frequency;

pub use candidates::{Candidate, CandidateList};
pub use frequency::FrequencyTable;
