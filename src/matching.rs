//! Phrase matching on top of the prefix tree and the similarity scorer.
//!
//! Dictionary phrases are lowercased and split on whitespace; each token is
//! indexed in a [`PrefixTree`](crate::tree::PrefixTree) with the original
//! phrase as its value. A query retrieves every phrase with a token starting
//! with it, and each candidate is kept when its similarity to the query
//! reaches the threshold.

pub mod config;
pub mod dictionary;
pub mod engine;
pub mod level;
pub mod ranking;

// Re-export commonly used types
pub use config::MatchConfig;
pub use dictionary::load_dictionary;
pub use engine::{Match, MatchEngine, exec};
pub use level::{SimilarityLevel, level_threshold};
pub use ranking::{rank, ranked_values};
