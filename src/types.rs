//! Type aliases and common types.

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

/// A 2D numeric table with rows as units and columns as variables.
pub type Dataset = DMatrix<f64>;

/// A single numeric column.
pub type Column = DVector<f64>;

/// Identifier for one of the two data halves of the one-shot design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Part {
    /// The first half (fitted and scored by the first imputer).
    One,
    /// The second half (fitted and scored by the second imputer).
    Two,
}

impl std::fmt::Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Part::One => write!(f, "one"),
            Part::Two => write!(f, "two"),
        }
    }
}

/// Column convention of an assembled dataset: `[treatment | covariates | outcomes]`.
///
/// Column 0 is always the treatment indicator, followed by `covariates`
/// covariate columns and `outcomes` outcome columns. The layout is derived
/// from the input arrays once and threaded through the statistic computation
/// so that column extraction never relies on bare offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Number of covariate columns (p).
    pub covariates: usize,
    /// Number of outcome columns (k).
    pub outcomes: usize,
}

impl ColumnLayout {
    /// Index of the treatment column.
    pub const TREATMENT: usize = 0;

    /// Total number of columns in the assembled dataset.
    pub fn total_columns(&self) -> usize {
        1 + self.covariates + self.outcomes
    }

    /// Index of the first outcome column.
    pub fn outcome_start(&self) -> usize {
        1 + self.covariates
    }
}
