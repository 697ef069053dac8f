//! Ordering and de-duplication of raw matches.

use ahash::AHashSet;

use crate::matching::engine::Match;

/// Sort matches by similarity, best first, and keep only the first (best)
/// occurrence of each phrase. Ties keep their original order.
pub fn rank(mut matches: Vec<Match>) -> Vec<Match> {
    matches.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

    let mut seen = AHashSet::with_capacity(matches.len());
    matches.retain(|m| seen.insert(m.value.clone()));
    matches
}

/// The phrases of [`rank`], without their scores.
pub fn ranked_values(matches: Vec<Match>) -> Vec<String> {
    rank(matches).into_iter().map(|m| m.value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_orders_and_dedups() {
        let matches = vec![
            Match::new("new york", 0.375),
            Match::new("new", 1.0),
            Match::new("new jersey", 0.3),
            Match::new("new york", 0.375),
        ];

        let ranked = rank(matches);
        let values: Vec<&str> = ranked.iter().map(|m| m.value.as_str()).collect();
        assert_eq!(values, vec!["new", "new york", "new jersey"]);
    }

    #[test]
    fn test_rank_keeps_tie_order() {
        let matches = vec![
            Match::new("b", 0.5),
            Match::new("a", 0.5),
            Match::new("c", 0.5),
        ];
        assert_eq!(ranked_values(matches), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(Vec::new()).is_empty());
    }
}
