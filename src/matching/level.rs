//! Symbolic similarity levels and their numeric thresholds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PrefixSimError;

/// A named acceptance cutoff for similarity scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SimilarityLevel {
    /// Accept everything (0.0).
    #[default]
    ExtraLow,
    /// 0.2
    Low,
    /// 0.4
    Medium,
    /// 0.6
    High,
    /// 0.8
    ExtraHigh,
}

impl SimilarityLevel {
    /// Every level, from the most to the least permissive.
    pub const ALL: [SimilarityLevel; 5] = [
        SimilarityLevel::ExtraLow,
        SimilarityLevel::Low,
        SimilarityLevel::Medium,
        SimilarityLevel::High,
        SimilarityLevel::ExtraHigh,
    ];

    /// Minimum similarity a match needs at this level.
    pub fn threshold(self) -> f64 {
        match self {
            SimilarityLevel::ExtraLow => 0.0,
            SimilarityLevel::Low => 0.2,
            SimilarityLevel::Medium => 0.4,
            SimilarityLevel::High => 0.6,
            SimilarityLevel::ExtraHigh => 0.8,
        }
    }

    /// The wire name of the level, e.g. `EXTRA_HIGH`.
    pub fn name(self) -> &'static str {
        match self {
            SimilarityLevel::ExtraLow => "EXTRA_LOW",
            SimilarityLevel::Low => "LOW",
            SimilarityLevel::Medium => "MEDIUM",
            SimilarityLevel::High => "HIGH",
            SimilarityLevel::ExtraHigh => "EXTRA_HIGH",
        }
    }

    /// Look up a level by its exact wire name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.name() == name)
    }

    /// Look up a level by name, falling back to [`SimilarityLevel::ExtraLow`]
    /// (accept everything) for unknown names.
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }
}

impl fmt::Display for SimilarityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SimilarityLevel {
    type Err = PrefixSimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            PrefixSimError::invalid_argument(format!("unknown similarity level: {s}"))
        })
    }
}

/// Threshold for a level name; unknown names map to 0.0.
pub fn level_threshold(name: &str) -> f64 {
    SimilarityLevel::from_name(name).threshold()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_table() {
        assert_eq!(level_threshold("EXTRA_LOW"), 0.0);
        assert_eq!(level_threshold("LOW"), 0.2);
        assert_eq!(level_threshold("MEDIUM"), 0.4);
        assert_eq!(level_threshold("HIGH"), 0.6);
        assert_eq!(level_threshold("EXTRA_HIGH"), 0.8);
    }

    #[test]
    fn test_unknown_level_accepts_everything() {
        assert_eq!(level_threshold(""), 0.0);
        assert_eq!(level_threshold("high"), 0.0);
        assert_eq!(level_threshold("ULTRA"), 0.0);
        assert_eq!(SimilarityLevel::from_name("nope"), SimilarityLevel::ExtraLow);
    }

    #[test]
    fn test_from_str_is_strict() {
        assert_eq!("HIGH".parse::<SimilarityLevel>().unwrap(), SimilarityLevel::High);
        assert!("high".parse::<SimilarityLevel>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&SimilarityLevel::ExtraHigh).unwrap();
        assert_eq!(json, "\"EXTRA_HIGH\"");

        let level: SimilarityLevel = serde_json::from_str("\"MEDIUM\"").unwrap();
        assert_eq!(level, SimilarityLevel::Medium);
        assert_eq!(level.to_string(), "MEDIUM");
    }
}
