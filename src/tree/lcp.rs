//! Longest-common-prefix helper used by the radix tree.

/// Length in bytes of the longest common prefix of `a` and `b`.
///
/// Comparison is done per `char`, so the returned length always lands on a
/// char boundary of both strings and can be used to slice either of them.
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .find(|((_, ca), cb)| ca != cb)
        .map(|((index, _), _)| index)
        .unwrap_or_else(|| a.len().min(b.len()))
}
