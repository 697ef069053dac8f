//! Configuration for the match engine.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PrefixSimError, Result};
use crate::matching::level::SimilarityLevel;
use crate::util::paged_stack::DEFAULT_PAGE_SIZE;

/// Configuration for [`MatchEngine`](crate::matching::MatchEngine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Slots per page of the traversal stacks.
    pub stack_page_size: usize,
    /// Level used when the caller gives neither a level nor a threshold.
    pub default_level: SimilarityLevel,
    /// Lowercase phrases and queries before indexing and scoring.
    pub lowercase: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            stack_page_size: DEFAULT_PAGE_SIZE,
            default_level: SimilarityLevel::ExtraLow,
            lowercase: true,
        }
    }
}

impl MatchConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: MatchConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the engine cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.stack_page_size == 0 {
            return Err(PrefixSimError::config(
                "stack_page_size must be greater than zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();
        assert_eq!(config.stack_page_size, 4096);
        assert_eq!(config.default_level, SimilarityLevel::ExtraLow);
        assert!(config.lowercase);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"default_level": "HIGH"}}"#).unwrap();

        let config = MatchConfig::load(file.path()).unwrap();
        assert_eq!(config.default_level, SimilarityLevel::High);
        assert_eq!(config.stack_page_size, 4096);
        assert!(config.lowercase);
    }

    #[test]
    fn test_load_rejects_zero_page_size() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"stack_page_size": 0}}"#).unwrap();

        let err = MatchConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, PrefixSimError::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = MatchConfig::load("/nonexistent/prefixsim.json").unwrap_err();
        assert!(matches!(err, PrefixSimError::Io(_)));
    }
}
