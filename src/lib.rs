//! # prefixsim
//!
//! Prefix-accelerated approximate phrase matching.
//!
//! Dictionary phrases are split into tokens and indexed in a compressed
//! prefix tree. A query retrieves every phrase with a token starting with
//! it, and each candidate is scored with a Levenshtein-based similarity.
//!
//! ## Features
//!
//! - Radix tree with node splitting, exact and prefix lookup, and a
//!   controllable depth-first traversal
//! - Recursion-free traversal driven by a page-backed stack
//! - Character-level Levenshtein distance with reusable rows
//! - Named similarity levels and ranked, de-duplicated results
//!
//! ```
//! use prefixsim::matching::{exec, rank};
//!
//! let matches = exec(&["new york", "new jersey"], "new", 0.2);
//! let ranked = rank(matches);
//! assert_eq!(ranked[0].value, "new york");
//! ```

pub mod cli;
pub mod error;
pub mod matching;
pub mod service;
pub mod similarity;
pub mod tree;
pub mod util;

pub mod prelude {
    pub use crate::error::{PrefixSimError, Result};
    pub use crate::matching::{Match, MatchConfig, MatchEngine, SimilarityLevel, exec, rank};
    pub use crate::similarity::{SimilarityScorer, compute_similarity, levenshtein_distance};
    pub use crate::tree::{PrefixTree, Visit};
    pub use crate::util::paged_stack::PagedStack;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
