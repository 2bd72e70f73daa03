use std::cmp::Ordering;

use super::vectorizer::SparseVector;

/// Cosine similarity between two sparse vectors.
///
/// A zero vector is similar to nothing: the score is 0 rather than a
/// division by zero.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let denominator = a.norm() * b.norm();
    if denominator == 0.0 {
        return 0.0;
    }
    a.dot(b) / denominator
}

/// Ranks every course vector against the user vector.
///
/// Returns up to `top_n` `(catalog index, score)` pairs ordered by
/// descending score; equal scores fall back to ascending catalog index,
/// so the ordering is deterministic rather than an artifact of sort
/// stability. `top_n` of zero yields an empty ranking; `top_n` beyond the
/// catalog size yields the whole catalog ranked.
pub fn rank(user: &SparseVector, matrix: &[SparseVector], top_n: usize) -> Vec<(usize, f64)> {
    if top_n == 0 {
        return Vec::new();
    }

    let mut scored: Vec<(usize, f64)> = matrix
        .iter()
        .map(|row| cosine_similarity(user, row))
        .enumerate()
        .collect();

    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    scored.truncate(top_n);
    scored
}
