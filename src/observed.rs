//! One-time observed-statistic computation.
//!
//! This is the sequential half of the one-shot design: mask, assemble,
//! split, fit each imputer on its own half, score both halves. Everything
//! the simulation phase needs afterwards (the masked dataset, the fixed
//! partition, the observed statistics) is returned as one snapshot.

use crate::data::TestInput;
use crate::error::TestError;
use crate::impute::Imputer;
use crate::partition::{PartitionConfig, PartitionPair};
use crate::statistics::pooled_rank_sum;
use crate::types::{Dataset, Part};

/// Snapshot produced by [`compute_observed`], consumed by the simulation
/// phase.
#[derive(Debug, Clone)]
pub struct ObservedRun {
    /// The assembled `[Z | X | Y_masked]` dataset.
    pub masked: Dataset,
    /// The fixed row partition used for this run (and reused, with the same
    /// seed, by every simulation replicate).
    pub partition: PartitionPair,
    /// Observed statistic of part one.
    pub t1_obs: f64,
    /// Observed statistic of part two.
    pub t2_obs: f64,
}

/// Mask, assemble, split, fit, and score the observed data.
///
/// Fits `g1` on part one only and `g2` on part two only — neither imputer
/// ever sees the other half's rows, which is what keeps the two p-values
/// free of cross-half information leakage. The fitted state left behind in
/// `g1`/`g2` is exactly what the simulation phase reuses; it is never
/// refitted afterwards.
///
/// Deterministic: for fixed inputs, a fixed partition config, and
/// deterministic imputers, repeated calls produce identical statistics and
/// identical partition membership.
///
/// # Errors
///
/// - [`TestError::EmptyPartition`] if the split leaves either part empty
/// - [`TestError::Fit`] / [`TestError::Transform`] for imputer failures,
///   tagged with the half that failed
pub fn compute_observed(
    input: &TestInput,
    partition: &PartitionConfig,
    g1: &mut dyn Imputer,
    g2: &mut dyn Imputer,
) -> Result<ObservedRun, TestError> {
    let layout = input.layout();
    let masked = input.assemble_masked();

    let pair = partition.split(input.n_rows());
    if pair.first.is_empty() {
        return Err(TestError::EmptyPartition { part: Part::One });
    }
    if pair.second.is_empty() {
        return Err(TestError::EmptyPartition { part: Part::Two });
    }

    let df1 = masked.select_rows(pair.first.iter());
    let df2 = masked.select_rows(pair.second.iter());

    g1.fit(&df1).map_err(|source| TestError::Fit {
        part: Part::One,
        source,
    })?;
    g2.fit(&df2).map_err(|source| TestError::Fit {
        part: Part::Two,
        source,
    })?;

    let imputed1 = g1.transform(&df1).map_err(|source| TestError::Transform {
        part: Part::One,
        source,
    })?;
    let imputed2 = g2.transform(&df2).map_err(|source| TestError::Transform {
        part: Part::Two,
        source,
    })?;

    let t1_obs = pooled_rank_sum(&imputed1, layout);
    let t2_obs = pooled_rank_sum(&imputed2, layout);

    Ok(ObservedRun {
        masked,
        partition: pair,
        t1_obs,
        t2_obs,
    })
}
