//! The match engine: index a dictionary, look up a query by prefix, score.
//!
//! Every call builds its own [`PrefixTree`] from the dictionary it is given
//! and drops it before returning, so an engine can be shared freely between
//! threads.

use std::borrow::Cow;
use std::fmt;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::matching::config::MatchConfig;
use crate::matching::level::SimilarityLevel;
use crate::similarity::SimilarityScorer;
use crate::tree::PrefixTree;

/// A dictionary phrase accepted for a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// The phrase as it appears in the dictionary.
    pub value: String,
    /// Similarity to the query, in `[0, 1]`.
    pub similarity: f64,
}

impl Match {
    /// Create a new match.
    pub fn new(value: impl Into<String>, similarity: f64) -> Self {
        Match {
            value: value.into(),
            similarity,
        }
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{:.2}", self.value, self.similarity)
    }
}

/// Prefix-accelerated approximate phrase matcher.
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    config: MatchConfig,
}

impl MatchEngine {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self::with_config(MatchConfig::default())
    }

    /// Create an engine with a custom configuration.
    pub fn with_config(config: MatchConfig) -> Self {
        MatchEngine { config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Index every whitespace-separated token of every phrase, with the
    /// original phrase as the token's value.
    ///
    /// A phrase repeating a token, or sharing it with another phrase, is
    /// stored once per occurrence.
    pub fn build_tree<S: AsRef<str>>(&self, dictionary: &[S]) -> PrefixTree<String> {
        let mut tree = PrefixTree::with_page_size(self.config.stack_page_size);
        for phrase in dictionary {
            let phrase = phrase.as_ref();
            let normalized = self.normalize(phrase);
            for token in normalized.split_whitespace() {
                tree.insert(token, [phrase.to_string()]);
            }
        }

        debug!(
            "indexed {} phrases into {} keys ({} nodes)",
            dictionary.len(),
            tree.len(),
            tree.node_count()
        );
        tree
    }

    /// Matches from a prebuilt tree: every phrase with a token starting with
    /// `input` whose similarity to `input` is at least `threshold`.
    ///
    /// Results are unordered and may repeat a phrase reached through several
    /// tokens; see [`rank`](crate::matching::ranking::rank).
    pub fn search(&self, tree: &PrefixTree<String>, input: &str, threshold: f64) -> Vec<Match> {
        let query = self.normalize(input);
        if query.is_empty() {
            return Vec::new();
        }

        let candidates = tree.get_by_prefix(&query);
        let mut scorer = SimilarityScorer::new(&*query);
        let mut results = Vec::with_capacity(candidates.len());
        for candidate in &candidates {
            let similarity = scorer.similarity(&self.normalize(candidate));
            if similarity >= threshold {
                trace!("match: {candidate}\tsimilarity: {similarity:.2}");
                results.push(Match::new(candidate.as_str(), similarity));
            }
        }

        debug!(
            "{} of {} candidates met target similarity {:.2}",
            results.len(),
            candidates.len(),
            threshold
        );
        results
    }

    /// Build a fresh tree from `dictionary` and search it for `input`.
    pub fn exec<S: AsRef<str>>(&self, dictionary: &[S], input: &str, threshold: f64) -> Vec<Match> {
        if dictionary.is_empty() {
            return Vec::new();
        }
        let tree = self.build_tree(dictionary);
        self.search(&tree, input, threshold)
    }

    /// [`exec`](Self::exec) with the threshold of a named level.
    pub fn exec_level<S: AsRef<str>>(
        &self,
        dictionary: &[S],
        input: &str,
        level: SimilarityLevel,
    ) -> Vec<Match> {
        self.exec(dictionary, input, level.threshold())
    }

    /// Apply the configured case folding to `text`.
    pub(crate) fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.config.lowercase {
            Cow::Owned(text.to_lowercase())
        } else {
            Cow::Borrowed(text)
        }
    }
}

/// Run a single query with the default engine.
pub fn exec<S: AsRef<str>>(dictionary: &[S], input: &str, threshold: f64) -> Vec<Match> {
    MatchEngine::new().exec(dictionary, input, threshold)
}
