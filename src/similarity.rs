//! Edit-distance based similarity scoring.
//!
//! Candidates are compared to the query with the Levenshtein distance and
//! the distance is normalized by the longer length into a score in `[0, 1]`.

pub mod levenshtein;

// Re-export commonly used types
pub use levenshtein::*;
