//! Tag similarity matching - autocomplete ranking and duplicate detection
//!
//! Pure functions with no I/O, safe to call on every keystroke.

mod matcher;
mod similarity;

pub use matcher::{SuggestOptions, TagSuggestion, is_novel, suggest};
pub use similarity::similarity;
