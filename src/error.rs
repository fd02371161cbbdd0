//! Error types for the one-shot test.
//!
//! Every failure is surfaced to the caller of the top-level test operation;
//! nothing is swallowed and there is no partial-result recovery. The run
//! either produces both p-values or one of these errors.

use std::fmt;

use crate::impute::ImputeError;
use crate::types::Part;

/// Error returned when a test run cannot produce p-values.
#[derive(Debug)]
pub enum TestError {
    /// Two input arrays disagree on a dimension, or an array is missing a
    /// required column. Detected before any partitioning or fitting.
    InputShape {
        /// Name of the offending array (`"Z"`, `"X"`, `"M"`, `"Y"`).
        array: &'static str,
        /// Dimension that disagrees (`"rows"` or `"columns"`).
        dimension: &'static str,
        /// Expected extent of that dimension.
        expected: usize,
        /// Extent actually found.
        got: usize,
    },

    /// An input array has no rows.
    EmptyInput {
        /// Name of the offending array.
        array: &'static str,
    },

    /// The split left one part without any rows, so no statistic can be
    /// computed on it. Happens for very small inputs or a split proportion
    /// at the extremes.
    EmptyPartition {
        /// The part that came out empty.
        part: Part,
    },

    /// The run configuration failed validation.
    InvalidConfig(String),

    /// An imputer failed to fit its data half. Fatal; `transform` is never
    /// attempted on a model whose fit failed.
    Fit {
        /// The half whose imputer failed.
        part: Part,
        /// The imputer's own failure.
        source: ImputeError,
    },

    /// A fitted imputer failed to transform (during the observed
    /// computation or inside a simulation batch). Fatal for the whole run:
    /// there is no partial aggregation across workers.
    Transform {
        /// The half whose imputer failed.
        part: Part,
        /// The imputer's own failure.
        source: ImputeError,
    },
}

impl fmt::Display for TestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestError::InputShape {
                array,
                dimension,
                expected,
                got,
            } => write!(
                f,
                "shape mismatch for {}: expected {} {}, got {}",
                array, expected, dimension, got
            ),
            TestError::EmptyInput { array } => {
                write!(f, "input {} has no rows", array)
            }
            TestError::EmptyPartition { part } => write!(
                f,
                "partition {} is empty; provide more rows or a less extreme split proportion",
                part
            ),
            TestError::InvalidConfig(message) => {
                write!(f, "invalid configuration: {}", message)
            }
            TestError::Fit { part, source } => {
                write!(f, "imputer failed to fit part {}: {}", part, source)
            }
            TestError::Transform { part, source } => {
                write!(f, "imputer failed to transform part {}: {}", part, source)
            }
        }
    }
}

impl std::error::Error for TestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TestError::Fit { source, .. } | TestError::Transform { source, .. } => Some(source),
            _ => None,
        }
    }
}
