//! Terminal output formatting

pub mod display;

pub use display::{PATTERN_USAGE, print_advise_result};
