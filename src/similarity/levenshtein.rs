//! Levenshtein distance and the similarity score derived from it.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
///
/// This is the minimum number of single-character edits (insertions,
/// deletions, or substitutions) required to change `a` into `b`. Characters
/// are compared as `char`s, so multi-byte characters count as one edit.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev_row = Vec::new();
    let mut curr_row = Vec::new();
    distance_with_rows(a, &b_chars, &mut prev_row, &mut curr_row)
}

/// Similarity in `[0, 1]` from two lengths and their edit distance:
/// `1 - distance / max(len1, len2)`.
///
/// Two empty strings are identical (1.0). A distance larger than the longer
/// length cannot come from a real edit script and is clamped to 0.0.
pub fn compute_similarity(len1: usize, len2: usize, distance: usize) -> f64 {
    let max_len = len1.max(len2);
    if max_len == 0 {
        return 1.0;
    }

    (1.0 - distance as f64 / max_len as f64).max(0.0)
}

/// Two-row dynamic programming over `a` × `b`.
///
/// `prev_row` holds the previous row, `curr_row` the row being built; both are
/// resized to `b.len() + 1` and can be reused across calls.
fn distance_with_rows(
    a: &str,
    b: &[char],
    prev_row: &mut Vec<usize>,
    curr_row: &mut Vec<usize>,
) -> usize {
    prev_row.clear();
    prev_row.extend(0..=b.len());
    curr_row.clear();
    curr_row.resize(b.len() + 1, 0);

    for (i, a_char) in a.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, &b_char) in b.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr_row[j + 1] = min(
                min(
                    curr_row[j] + 1,     // insertion
                    prev_row[j + 1] + 1, // deletion
                ),
                prev_row[j] + cost, // substitution
            );
        }

        std::mem::swap(prev_row, curr_row);
    }

    prev_row[b.len()]
}

/// Scores many candidates against one query.
///
/// The query is decoded once and the two DP rows are kept between calls, so
/// scoring a candidate list allocates nothing after the first candidate.
#[derive(Debug, Clone)]
pub struct SimilarityScorer {
    query: String,
    query_chars: Vec<char>,
    prev_row: Vec<usize>,
    curr_row: Vec<usize>,
}

impl SimilarityScorer {
    /// Create a new scorer for the given query string.
    pub fn new(query: impl Into<String>) -> Self {
        let query = query.into();
        let query_chars: Vec<char> = query.chars().collect();
        let row_len = query_chars.len() + 1;

        SimilarityScorer {
            query,
            query_chars,
            prev_row: Vec::with_capacity(row_len),
            curr_row: Vec::with_capacity(row_len),
        }
    }

    /// Get the query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Edit distance from `candidate` to the query.
    pub fn distance(&mut self, candidate: &str) -> usize {
        distance_with_rows(
            candidate,
            &self.query_chars,
            &mut self.prev_row,
            &mut self.curr_row,
        )
    }

    /// Similarity of `candidate` to the query, in `[0, 1]`.
    pub fn similarity(&mut self, candidate: &str) -> f64 {
        let distance = self.distance(candidate);
        compute_similarity(
            candidate.chars().count(),
            self.query_chars.len(),
            distance,
        )
    }
}
