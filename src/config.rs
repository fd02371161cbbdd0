//! Configuration for one-shot randomization test runs.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_REPLICATES, PROGRESS_INTERVAL, SIMULATION_SEED};
use crate::partition::PartitionConfig;

/// Configuration options for [`OneShotTest`](crate::OneShotTest).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneShotConfig {
    /// Total Monte Carlo replicate budget (L).
    ///
    /// Workers slightly over-cover this: each of the `n_jobs` batches runs
    /// `L / n_jobs + 1` replicates. Default: 10,000.
    pub replicates: usize,

    /// Number of parallel simulation workers.
    ///
    /// `None` resolves to the available core count at run time.
    pub n_jobs: Option<usize>,

    /// Row partitioning configuration.
    ///
    /// Defaults to a 0.5 split with the process-wide constant seed. The
    /// same configuration drives the observed split and every simulated
    /// re-split, which keeps row-to-part assignment constant across
    /// replicates. Override the seed only for testing.
    pub partition: PartitionConfig,

    /// Seed for the simulation phase's treatment re-draws.
    ///
    /// Each worker derives an independent stream from this seed and its
    /// worker index, so runs with equal seed and worker count reproduce
    /// their p-values bit for bit. Default: a named constant.
    pub simulation_seed: u64,

    /// Replicates between progress reports inside a worker batch.
    ///
    /// `None` silences the run banner and all progress output. Progress is
    /// advisory only and has no functional effect. Default: every 100.
    pub progress_interval: Option<usize>,
}

impl Default for OneShotConfig {
    fn default() -> Self {
        Self {
            replicates: DEFAULT_REPLICATES,
            n_jobs: None,
            partition: PartitionConfig::default(),
            simulation_seed: SIMULATION_SEED,
            progress_interval: Some(PROGRESS_INTERVAL),
        }
    }
}

impl OneShotConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Small replicate budget for smoke runs and development.
    pub fn quick() -> Self {
        Self {
            replicates: 500,
            ..Default::default()
        }
    }

    /// Large replicate budget for publication-grade p-values.
    pub fn thorough() -> Self {
        Self {
            replicates: 100_000,
            ..Default::default()
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the total replicate budget.
    pub fn replicates(mut self, l: usize) -> Self {
        assert!(l > 0, "replicates must be positive");
        self.replicates = l;
        self
    }

    /// Set the worker count.
    pub fn n_jobs(mut self, jobs: usize) -> Self {
        assert!(jobs >= 1, "n_jobs must be at least 1");
        self.n_jobs = Some(jobs);
        self
    }

    /// Replace the partition configuration.
    pub fn partition(mut self, partition: PartitionConfig) -> Self {
        self.partition = partition;
        self
    }

    /// Set the partition seed, keeping the default proportion.
    pub fn partition_seed(mut self, seed: u64) -> Self {
        self.partition.seed = seed;
        self
    }

    /// Set the simulation seed.
    pub fn simulation_seed(mut self, seed: u64) -> Self {
        self.simulation_seed = seed;
        self
    }

    /// Set the progress report interval.
    pub fn progress_interval(mut self, interval: usize) -> Self {
        assert!(interval > 0, "progress interval must be positive");
        self.progress_interval = Some(interval);
        self
    }

    /// Silence the run banner and progress output.
    pub fn silent(mut self) -> Self {
        self.progress_interval = None;
        self
    }

    // =========================================================================
    // Resolution methods
    // =========================================================================

    /// Resolve the worker count, falling back to the available core count.
    pub fn resolved_jobs(&self) -> usize {
        self.n_jobs.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(std::num::NonZeroUsize::get)
                .unwrap_or(1)
        })
    }

    /// Replicates per worker batch: `L / n_jobs + 1`.
    ///
    /// Rounds up, so the batches over-cover the budget: every batch is the
    /// same size and the coordinator's unweighted mean over workers is
    /// exact.
    pub fn replicates_per_worker(&self) -> usize {
        self.replicates / self.resolved_jobs() + 1
    }

    /// Check that the configuration is valid.
    ///
    /// Returns an error message if any field is out of contract.
    pub fn validate(&self) -> Result<(), String> {
        if self.replicates == 0 {
            return Err("replicates must be positive".to_string());
        }
        if self.n_jobs == Some(0) {
            return Err("n_jobs must be at least 1".to_string());
        }
        if !(self.partition.proportion > 0.0 && self.partition.proportion <= 1.0) {
            return Err("split proportion must be in (0, 1]".to_string());
        }
        if self.progress_interval == Some(0) {
            return Err("progress interval must be positive".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PARTITION_SEED;

    #[test]
    fn default_config() {
        let config = OneShotConfig::default();
        assert_eq!(config.replicates, 10_000);
        assert_eq!(config.n_jobs, None);
        assert_eq!(config.partition.seed, PARTITION_SEED);
        assert_eq!(config.partition.proportion, 0.5);
        assert_eq!(config.progress_interval, Some(100));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn preset_configs() {
        assert_eq!(OneShotConfig::quick().replicates, 500);
        assert_eq!(OneShotConfig::thorough().replicates, 100_000);
    }

    #[test]
    fn builder_methods() {
        let config = OneShotConfig::new()
            .replicates(2_000)
            .n_jobs(4)
            .partition_seed(7)
            .simulation_seed(11)
            .progress_interval(50);

        assert_eq!(config.replicates, 2_000);
        assert_eq!(config.n_jobs, Some(4));
        assert_eq!(config.partition.seed, 7);
        assert_eq!(config.simulation_seed, 11);
        assert_eq!(config.progress_interval, Some(50));
    }

    #[test]
    fn over_covering_batch_size() {
        let config = OneShotConfig::new().replicates(10_000).n_jobs(8);
        // floor(10000 / 8) + 1
        assert_eq!(config.replicates_per_worker(), 1_251);

        let exact = OneShotConfig::new().replicates(100).n_jobs(4);
        assert_eq!(exact.replicates_per_worker(), 26);
    }

    #[test]
    fn resolved_jobs_defaults_to_cores() {
        assert!(OneShotConfig::new().resolved_jobs() >= 1);
        assert_eq!(OneShotConfig::new().n_jobs(3).resolved_jobs(), 3);
    }

    #[test]
    fn validation_catches_direct_field_writes() {
        let mut config = OneShotConfig::default();
        config.replicates = 0;
        assert!(config.validate().is_err());

        let mut config = OneShotConfig::default();
        config.partition.proportion = 1.5;
        assert!(config.validate().is_err());

        let mut config = OneShotConfig::default();
        config.progress_interval = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    #[should_panic(expected = "replicates must be positive")]
    fn zero_replicates_rejected() {
        OneShotConfig::new().replicates(0);
    }

    #[test]
    #[should_panic(expected = "n_jobs must be at least 1")]
    fn zero_jobs_rejected() {
        OneShotConfig::new().n_jobs(0);
    }
}
