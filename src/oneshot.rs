//! Main `OneShotTest` entry point and builder.

use crate::config::OneShotConfig;
use crate::data::TestInput;
use crate::error::TestError;
use crate::impute::Imputer;
use crate::partition::PartitionConfig;
use crate::result::TestOutcome;
use crate::simulation::run_test;

/// Main entry point for one-shot randomization tests.
///
/// Use the builder pattern to configure and run a test:
///
/// ```ignore
/// use rerand::{OneShotTest, TestInput};
///
/// let outcome = OneShotTest::new()
///     .replicates(10_000)
///     .n_jobs(8)
///     .run(&input, &mut g1, &mut g2)?;
/// println!("p1 = {}, p2 = {}", outcome.p1, outcome.p2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OneShotTest {
    config: OneShotConfig,
}

impl OneShotTest {
    /// Create with default configuration (10,000 replicates, one worker per
    /// available core).
    pub fn new() -> Self {
        Self {
            config: OneShotConfig::default(),
        }
    }

    /// Create with the `quick` preset (500 replicates).
    pub fn quick() -> Self {
        Self {
            config: OneShotConfig::quick(),
        }
    }

    /// Create with the `thorough` preset (100,000 replicates).
    pub fn thorough() -> Self {
        Self {
            config: OneShotConfig::thorough(),
        }
    }

    /// Set the total replicate budget (L).
    pub fn replicates(mut self, l: usize) -> Self {
        self.config = self.config.replicates(l);
        self
    }

    /// Set the worker count.
    pub fn n_jobs(mut self, jobs: usize) -> Self {
        self.config = self.config.n_jobs(jobs);
        self
    }

    /// Replace the partition configuration (testing hook; the default
    /// 0.5/constant-seed split is part of the method).
    pub fn partition(mut self, partition: PartitionConfig) -> Self {
        self.config = self.config.partition(partition);
        self
    }

    /// Set the simulation seed for reproducible p-values.
    pub fn simulation_seed(mut self, seed: u64) -> Self {
        self.config = self.config.simulation_seed(seed);
        self
    }

    /// Set the progress report interval.
    pub fn progress_interval(mut self, interval: usize) -> Self {
        self.config = self.config.progress_interval(interval);
        self
    }

    /// Silence the run banner and progress output.
    pub fn silent(mut self) -> Self {
        self.config = self.config.silent();
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &OneShotConfig {
        &self.config
    }

    /// Run the test.
    ///
    /// Fits `g1` on part one and `g2` on part two (once each), computes the
    /// observed statistics, then estimates both exact p-values by
    /// re-randomizing the treatment assignment `L / n_jobs + 1` times per
    /// worker through the already-fitted imputers.
    ///
    /// To use "the same" imputation model for both halves, pass two
    /// instances of the same type — each half needs its own fitted state.
    ///
    /// # Errors
    ///
    /// All-or-nothing: any shape, configuration, fit, transform, or worker
    /// failure aborts the run with a [`TestError`]; no partial results are
    /// produced.
    pub fn run(
        &self,
        input: &TestInput,
        g1: &mut dyn Imputer,
        g2: &mut dyn Imputer,
    ) -> Result<TestOutcome, TestError> {
        run_test(&self.config, input, g1, g2)
    }
}
