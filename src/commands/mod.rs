//! Command implementations

pub mod advise;

pub use advise::{AdviseConfig, AdviseResult, RankedWord, advise};
