//! The Wilcoxon-style rank-sum statistic.

use crate::types::{ColumnLayout, Dataset};

/// Rank-weighted treatment sum: `t = Σ z_i · rank(y_i)`.
///
/// `rank(y_i)` is the 1-based position of `y_i` when all y values are sorted
/// ascending; ties keep input order (stable sort). One sort makes this
/// O(n log n), and it is required to agree with the quadratic formulation
/// `Σ_i z_i · |{j : y_j ≤ y_i}|` on tie-free inputs — the sort is an exact
/// reformulation, not an approximation.
///
/// Under the sharp null, treated units carrying systematically higher
/// outcome ranks push `t` above its randomization mean.
///
/// # Panics
///
/// Panics if `z` and `y` differ in length or are empty.
pub fn rank_sum(z: &[f64], y: &[f64]) -> f64 {
    assert_eq!(z.len(), y.len(), "treatment and outcome must be equally long");
    assert!(!z.is_empty(), "rank statistic is undefined on empty vectors");

    let mut pairs: Vec<(f64, f64)> = z.iter().copied().zip(y.iter().copied()).collect();
    // Stable sort: tied outcomes keep their input order.
    pairs.sort_by(|a, b| a.1.total_cmp(&b.1));

    pairs
        .iter()
        .enumerate()
        .map(|(i, &(z_i, _))| z_i * (i + 1) as f64)
        .sum()
}

/// Rank-sum statistic of an imputed dataset, pooled over its outcome columns.
///
/// Extracts the treatment column and the imputed outcome block, tiles the
/// treatment column once per outcome, and flattens the outcome block
/// column-by-column so entry `(i, t)` lines up with treatment `z_i`. The
/// pooled vectors feed [`rank_sum`], giving one scalar per data half even
/// when there are several outcome columns.
pub fn pooled_rank_sum(imputed: &Dataset, layout: ColumnLayout) -> f64 {
    let n = imputed.nrows();
    let k = layout.outcomes;
    let treatment = imputed.column(ColumnLayout::TREATMENT);
    let outcomes = imputed.columns(layout.outcome_start(), k);

    let mut z = Vec::with_capacity(n * k);
    for _ in 0..k {
        z.extend(treatment.iter().copied());
    }
    // Column-major iteration matches the tiling above.
    let y: Vec<f64> = outcomes.iter().copied().collect();

    rank_sum(&z, &y)
}
