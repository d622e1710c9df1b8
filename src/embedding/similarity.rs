/// Cosine similarity in `[-1, 1]`; `0.0` for mismatched, empty or zero-norm inputs.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let (dot, norm_a_sq, norm_b_sq) =
        a.iter()
            .zip(b.iter())
            .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (&av, &bv)| {
                (dot + av * bv, na + av * av, nb + bv * bv)
            });

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
    }
}

/// Mean cosine similarity of `query` against every vector in `others`.
///
/// Returns `None` when `others` is empty.
pub fn mean_similarity(query: &[f32], others: &[Vec<f32>]) -> Option<f64> {
    if others.is_empty() {
        return None;
    }

    let total: f64 = others
        .iter()
        .map(|other| cosine_similarity(query, other) as f64)
        .sum();

    Some(total / others.len() as f64)
}
