//! Work distribution and aggregation across the worker pool.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::OneShotConfig;
use crate::data::TestInput;
use crate::error::TestError;
use crate::impute::Imputer;
use crate::observed::compute_observed;
use crate::output::format_run_banner;
use crate::result::TestOutcome;

use super::worker::run_batch;
use super::{BatchEstimate, SimulationShared};

/// Run the full test: observed phase, then the parallel simulation phase.
///
/// The observed computation runs once, sequentially. The replicate budget
/// is then split into `n_jobs` equal batches of `L / n_jobs + 1` replicates
/// (slightly over-covering the budget) and dispatched as identical task
/// descriptors differing only in the worker index, which selects each
/// worker's independent RNG stream. The coordinator blocks until every
/// batch finishes; the first worker error fails the whole run — there is no
/// partial aggregation.
pub(crate) fn run_test(
    config: &OneShotConfig,
    input: &TestInput,
    g1: &mut dyn Imputer,
    g2: &mut dyn Imputer,
) -> Result<TestOutcome, TestError> {
    config.validate().map_err(TestError::InvalidConfig)?;

    let layout = input.layout();
    let observed = compute_observed(input, &config.partition, g1, g2)?;

    let n_jobs = config.resolved_jobs();
    let per_worker = config.replicates_per_worker();
    if config.progress_interval.is_some() {
        println!("{}", format_run_banner(per_worker, n_jobs));
    }

    let shared = SimulationShared::from_observed(&observed, layout);
    // Fitting is over; from here the imputers are read-only shared state.
    let g1: &dyn Imputer = g1;
    let g2: &dyn Imputer = g2;

    #[cfg(feature = "parallel")]
    let estimates = (0..n_jobs)
        .into_par_iter()
        .map(|worker| {
            run_batch(
                &shared,
                g1,
                g2,
                per_worker,
                worker,
                config.simulation_seed,
                config.progress_interval,
            )
        })
        .collect::<Result<Vec<BatchEstimate>, TestError>>()?;

    #[cfg(not(feature = "parallel"))]
    let estimates = (0..n_jobs)
        .map(|worker| {
            run_batch(
                &shared,
                g1,
                g2,
                per_worker,
                worker,
                config.simulation_seed,
                config.progress_interval,
            )
        })
        .collect::<Result<Vec<BatchEstimate>, TestError>>()?;

    let (p1, p2) = aggregate(&estimates);

    Ok(TestOutcome {
        p1,
        p2,
        t1_obs: observed.t1_obs,
        t2_obs: observed.t2_obs,
        replicates_per_worker: per_worker,
        workers: n_jobs,
    })
}

/// Unweighted mean of the per-worker p-value estimates.
///
/// All batches are equal-sized by construction, so the unweighted mean is
/// the exact pooled estimate.
fn aggregate(estimates: &[BatchEstimate]) -> (f64, f64) {
    let n = estimates.len() as f64;
    let p1 = estimates.iter().map(|e| e.p1).sum::<f64>() / n;
    let p2 = estimates.iter().map(|e| e.p2).sum::<f64>() / n;
    (p1, p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate(p1: f64, p2: f64) -> BatchEstimate {
        BatchEstimate { p1, p2 }
    }

    #[test]
    fn aggregation_is_the_unweighted_mean() {
        let estimates = [estimate(0.1, 0.9), estimate(0.2, 0.8), estimate(0.3, 0.7)];
        let (p1, p2) = aggregate(&estimates);
        assert!((p1 - 0.2).abs() < 1e-12);
        assert!((p2 - 0.8).abs() < 1e-12);
    }

    #[test]
    fn single_worker_aggregates_to_itself() {
        let (p1, p2) = aggregate(&[estimate(0.42, 0.58)]);
        assert_eq!(p1, 0.42);
        assert_eq!(p2, 0.58);
    }
}
