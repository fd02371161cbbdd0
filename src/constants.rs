//! Process-wide constants for the one-shot test design.
//!
//! Every magic number of the design lives here under a name. The partition
//! seed in particular is part of the method's contract: all partition calls
//! in one run (the observed split and every simulated re-split) must use the
//! same seed so that row-to-part assignment never changes between replicates.

/// Fixed seed for the row partitioner.
///
/// Used for both the one-time observed split and every simulation-replicate
/// split, so the partition assignment pattern is identical across all calls
/// for a given row count. Overridable per run through
/// [`PartitionConfig`](crate::PartitionConfig).
pub const PARTITION_SEED: u64 = 23;

/// Default proportion of rows assigned to part one.
pub const DEFAULT_SPLIT_PROPORTION: f64 = 0.5;

/// Default seed for the simulation phase's treatment re-draws.
///
/// Expanded into one independent stream per worker via a counter mix, so
/// default runs are reproducible bit-for-bit for a fixed worker count.
pub const SIMULATION_SEED: u64 = 271_828;

/// Default total Monte Carlo replicate budget (L).
pub const DEFAULT_REPLICATES: usize = 10_000;

/// Probability that a unit is assigned to treatment in a simulated draw.
///
/// The sharp null is tested against the Bernoulli(1/2) randomization design.
pub const TREATMENT_PROBABILITY: f64 = 0.5;

/// Replicates between progress reports within a worker batch.
pub const PROGRESS_INTERVAL: usize = 100;
