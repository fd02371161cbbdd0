//! The imputation capability contract.
//!
//! Concrete imputation models (tree ensembles, nearest-neighbor, Bayesian
//! linear, median fills, ...) are external collaborators: the test engine
//! only needs something that can learn from a table with missing outcome
//! entries and later fill such a table. Any model satisfying [`Imputer`]
//! plugs in; no model is implemented here.

use std::fmt;

use crate::types::Dataset;

/// Failure raised by an imputation model.
///
/// Imputers are external components with their own failure modes
/// (non-convergence, insufficient rows in a partition, shape mismatch on
/// transform), so the carrier is a message rather than a closed variant set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImputeError {
    message: String,
}

impl ImputeError {
    /// Create an error with the given description.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure description.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ImputeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ImputeError {}

/// A fit/transform imputation model.
///
/// The contract the one-shot design relies on:
///
/// - `fit` is called exactly once per data half per test run, before any
///   `transform` on that half. The training table may contain NaN in its
///   outcome columns; those are the entries to learn to fill.
/// - `transform` returns a fully-filled copy of its input without mutating
///   it, and must tolerate many calls (at least the per-worker replicate
///   count) whose treatment column differs from the one seen at fit time.
/// - The fitted state is **never refitted during simulation**. Only the
///   treatment column and the statistic are re-randomized; reusing one fit
///   across all replicates is the defining trade of the one-shot design.
///
/// `Send + Sync` makes a fitted model a read-only shared handle: simulation
/// workers receive `&dyn Imputer` and can only call `transform(&self)`.
///
/// If `fit` fails, the test run aborts without calling `transform`; there
/// are no retry or fallback semantics.
pub trait Imputer: Send + Sync {
    /// Learn imputation parameters from `data` (columns
    /// `[treatment | covariates | outcomes]`, NaN marking missing outcomes).
    fn fit(&mut self, data: &Dataset) -> Result<(), ImputeError>;

    /// Return a fully-filled copy of `data`. Must not mutate the input.
    fn transform(&self, data: &Dataset) -> Result<Dataset, ImputeError>;
}
