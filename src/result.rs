//! Result type for a finished test run.

use serde::{Deserialize, Serialize};

/// The outcome of a one-shot randomization test.
///
/// Both p-values are one-sided Monte Carlo estimates of
/// `P(T_sim ≥ T_obs)` under the Bernoulli(1/2) randomization distribution,
/// one per data half.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestOutcome {
    /// Exact p-value estimate for part one, in [0, 1].
    pub p1: f64,

    /// Exact p-value estimate for part two, in [0, 1].
    pub p2: f64,

    /// Observed statistic of part one.
    pub t1_obs: f64,

    /// Observed statistic of part two.
    pub t2_obs: f64,

    /// Replicates each worker ran (`L / n_jobs + 1`).
    pub replicates_per_worker: usize,

    /// Number of workers the simulation ran on.
    pub workers: usize,
}

impl TestOutcome {
    /// Total simulation replicates actually run.
    ///
    /// At least the configured budget; slightly more when the budget does
    /// not divide evenly by the worker count (the over-covering policy).
    pub fn total_replicates(&self) -> usize {
        self.replicates_per_worker * self.workers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome() -> TestOutcome {
        TestOutcome {
            p1: 0.05,
            p2: 0.95,
            t1_obs: 100.0,
            t2_obs: 200.0,
            replicates_per_worker: 1_251,
            workers: 8,
        }
    }

    #[test]
    fn total_replicates_over_covers_budget() {
        // 8 * (10000 / 8 + 1) > 10000
        assert_eq!(outcome().total_replicates(), 10_008);
    }

    #[test]
    fn serializes_round_trip() {
        let json = serde_json::to_string(&outcome()).unwrap();
        let back: TestOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome());
    }
}
