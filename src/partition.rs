//! Deterministic row partitioning.
//!
//! The one-shot design splits the dataset into two disjoint halves with a
//! seeded shuffle. The seed is an explicit configuration value (not hidden
//! global state) and is deliberately constant across *all* split calls in a
//! run — the observed split and every simulated re-split — so row-to-part
//! assignment never changes between replicates; only treatment values do.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SPLIT_PROPORTION, PARTITION_SEED};

/// Configuration for the row partitioner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartitionConfig {
    /// Fraction of rows assigned to part one, in (0, 1].
    ///
    /// Part one receives exactly `floor(n * proportion)` rows; part two
    /// receives all remaining rows, so every row is covered for any
    /// proportion.
    pub proportion: f64,

    /// Seed for the shuffle. Identical seeds give identical partitions for
    /// a given row count.
    pub seed: u64,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            proportion: DEFAULT_SPLIT_PROPORTION,
            seed: PARTITION_SEED,
        }
    }
}

impl PartitionConfig {
    /// Create a configuration with an explicit proportion and seed.
    ///
    /// # Panics
    ///
    /// Panics if `proportion` is not in (0, 1].
    pub fn new(proportion: f64, seed: u64) -> Self {
        assert!(
            proportion > 0.0 && proportion <= 1.0,
            "split proportion must be in (0, 1]"
        );
        Self { proportion, seed }
    }

    /// Default proportion with a custom seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Split `0..n_rows` into two disjoint index sets.
    ///
    /// Shuffles the indices with a Xoshiro256++ generator seeded from
    /// `self.seed` and cuts at `floor(n_rows * proportion)`. Part one is the
    /// shuffle prefix, part two the rest, both in shuffle order. Repeated
    /// calls with the same config and `n_rows` return the identical pair.
    pub fn split(&self, n_rows: usize) -> PartitionPair {
        let mut indices: Vec<usize> = (0..n_rows).collect();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(self.seed);
        indices.shuffle(&mut rng);

        let cut = (n_rows as f64 * self.proportion).floor() as usize;
        let second = indices.split_off(cut);
        PartitionPair {
            first: indices,
            second,
        }
    }
}

/// Two disjoint row-index subsets covering all rows of a dataset.
///
/// Transient: recomputed on every call, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionPair {
    /// Row indices of part one, in shuffle order.
    pub first: Vec<usize>,
    /// Row indices of part two, in shuffle order.
    pub second: Vec<usize>,
}
