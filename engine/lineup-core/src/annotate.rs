//! Annotation label spacing
//!
//! Horizontal-reference-line labels share one vertical axis; when two
//! averages land close together their labels would overlap. `place` nudges
//! labels apart with a greedy one-pass relaxation. Inputs are tiny (at most
//! a handful of annotations), so a globally minimal-displacement solution is
//! not worth the complexity.

/// Compute non-overlapping vertical positions for annotation labels.
///
/// Returns one position per input value, in input order. Guarantees: the
/// rank order of the inputs is preserved (ties broken by original index),
/// adjacent positions in sorted order are at least `min_gap` apart, and
/// values that were already sufficiently separated are left untouched.
pub fn place(values: &[f64], min_gap: f64) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    // Stable sort keeps ties deterministic by original index.
    order.sort_by(|&i, &j| {
        values[i]
            .partial_cmp(&values[j])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut sorted: Vec<f64> = order.iter().map(|&i| values[i]).collect();
    for i in 1..sorted.len() {
        if sorted[i] - sorted[i - 1] < min_gap {
            sorted[i] = sorted[i - 1] + min_gap;
        }
    }

    let mut placed = vec![0.0; values.len()];
    for (rank, &original) in order.iter().enumerate() {
        placed[original] = sorted[rank];
    }
    placed
}
