//! Title similarity scoring.
//!
//! Score is the longest common subsequence length relative to the longer
//! title, compared byte by byte.

/// Compute the similarity of two normalized titles, in [0, 1].
///
/// Identical strings (including two empty strings) score exactly 1.0.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 0.0;
    }

    lcs_length(a, b) as f64 / max_len as f64
}

/// Length of the longest common subsequence of two strings.
///
/// Classic O(n·m) dynamic programming over bytes. Only the length is kept,
/// so two rows of the table are enough.
pub fn lcs_length(a: &str, b: &str) -> usize {
    let a = a.as_bytes();
    let b = b.as_bytes();

    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            curr[j] = if a[i - 1] == b[j - 1] {
                prev[j - 1] + 1
            } else {
                prev[j].max(curr[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
