//! Input arrays and dataset assembly.
//!
//! Loading from storage is out of scope; the test consumes in-memory arrays.
//! Shape coherence is checked here, before any partitioning or fitting.

use crate::error::TestError;
use crate::types::{ColumnLayout, Dataset};

/// The four observed arrays of one test run.
///
/// - `Z`: n×1 binary treatment assignment
/// - `X`: n×p covariates
/// - `M`: n×k missingness indicator (non-zero marks an entry as missing)
/// - `Y`: n×k outcomes
///
/// The row-count invariant across all four arrays is enforced at
/// construction, so every `TestInput` in existence is shape-coherent.
#[derive(Debug, Clone, PartialEq)]
pub struct TestInput {
    z: Dataset,
    x: Dataset,
    m: Dataset,
    y: Dataset,
}

impl TestInput {
    /// Validate and wrap the four input arrays.
    ///
    /// # Errors
    ///
    /// - [`TestError::EmptyInput`] if `Z` has no rows
    /// - [`TestError::InputShape`] if `Z` is not a single column, if any
    ///   array disagrees with `Z` on row count, if `X` or `Y` has no
    ///   columns, or if `M` and `Y` differ in shape
    pub fn new(z: Dataset, x: Dataset, m: Dataset, y: Dataset) -> Result<Self, TestError> {
        let n = z.nrows();
        if n == 0 {
            return Err(TestError::EmptyInput { array: "Z" });
        }
        if z.ncols() != 1 {
            return Err(TestError::InputShape {
                array: "Z",
                dimension: "columns",
                expected: 1,
                got: z.ncols(),
            });
        }
        for (array, rows) in [("X", x.nrows()), ("M", m.nrows()), ("Y", y.nrows())] {
            if rows != n {
                return Err(TestError::InputShape {
                    array,
                    dimension: "rows",
                    expected: n,
                    got: rows,
                });
            }
        }
        if x.ncols() == 0 {
            return Err(TestError::InputShape {
                array: "X",
                dimension: "columns",
                expected: 1,
                got: 0,
            });
        }
        if y.ncols() == 0 {
            return Err(TestError::InputShape {
                array: "Y",
                dimension: "columns",
                expected: 1,
                got: 0,
            });
        }
        if m.ncols() != y.ncols() {
            return Err(TestError::InputShape {
                array: "M",
                dimension: "columns",
                expected: y.ncols(),
                got: m.ncols(),
            });
        }
        Ok(Self { z, x, m, y })
    }

    /// Number of rows shared by all four arrays.
    pub fn n_rows(&self) -> usize {
        self.z.nrows()
    }

    /// Number of covariate columns (p).
    pub fn covariates(&self) -> usize {
        self.x.ncols()
    }

    /// Number of outcome columns (k).
    pub fn outcomes(&self) -> usize {
        self.y.ncols()
    }

    /// Column layout of the assembled `[Z | X | Y]` dataset.
    pub fn layout(&self) -> ColumnLayout {
        ColumnLayout {
            covariates: self.covariates(),
            outcomes: self.outcomes(),
        }
    }

    /// The observed treatment column.
    pub fn treatment(&self) -> &Dataset {
        &self.z
    }

    /// Assemble `[Z | X | Y_masked]` with missing outcome entries replaced
    /// by NaN.
    ///
    /// The missingness mask is applied exactly once here; it is not
    /// re-randomized anywhere in the design.
    pub(crate) fn assemble_masked(&self) -> Dataset {
        let n = self.n_rows();
        let p = self.covariates();
        let k = self.outcomes();

        let mut df = Dataset::zeros(n, 1 + p + k);
        df.column_mut(0).copy_from(&self.z.column(0));
        df.columns_mut(1, p).copy_from(&self.x);
        let mut out = df.columns_mut(1 + p, k);
        for j in 0..k {
            for i in 0..n {
                out[(i, j)] = if self.m[(i, j)] != 0.0 {
                    f64::NAN
                } else {
                    self.y[(i, j)]
                };
            }
        }
        df
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arrays(n: usize, p: usize, k: usize) -> (Dataset, Dataset, Dataset, Dataset) {
        (
            Dataset::from_fn(n, 1, |i, _| (i % 2) as f64),
            Dataset::from_fn(n, p, |i, j| (i + j) as f64),
            Dataset::zeros(n, k),
            Dataset::from_fn(n, k, |i, j| (i * 10 + j) as f64),
        )
    }

    #[test]
    fn accepts_coherent_shapes() {
        let (z, x, m, y) = arrays(8, 3, 2);
        let input = TestInput::new(z, x, m, y).unwrap();
        assert_eq!(input.n_rows(), 8);
        assert_eq!(input.covariates(), 3);
        assert_eq!(input.outcomes(), 2);
        assert_eq!(input.layout().total_columns(), 6);
    }

    #[test]
    fn rejects_row_mismatch() {
        let (z, x, _, y) = arrays(8, 3, 2);
        let m = Dataset::zeros(7, 2);
        match TestInput::new(z, x, m, y) {
            Err(TestError::InputShape {
                array: "M",
                dimension: "rows",
                expected: 8,
                got: 7,
            }) => {}
            other => panic!("expected M row mismatch, got {:?}", other),
        }
    }

    #[test]
    fn rejects_wide_treatment() {
        let (_, x, m, y) = arrays(8, 3, 2);
        let z = Dataset::zeros(8, 2);
        assert!(matches!(
            TestInput::new(z, x, m, y),
            Err(TestError::InputShape { array: "Z", .. })
        ));
    }

    #[test]
    fn rejects_empty_input() {
        let z = Dataset::zeros(0, 1);
        let x = Dataset::zeros(0, 1);
        let m = Dataset::zeros(0, 1);
        let y = Dataset::zeros(0, 1);
        assert!(matches!(
            TestInput::new(z, x, m, y),
            Err(TestError::EmptyInput { array: "Z" })
        ));
    }

    #[test]
    fn rejects_mask_outcome_disagreement() {
        let (z, x, _, y) = arrays(8, 3, 2);
        let m = Dataset::zeros(8, 3);
        assert!(matches!(
            TestInput::new(z, x, m, y),
            Err(TestError::InputShape {
                array: "M",
                dimension: "columns",
                ..
            })
        ));
    }

    #[test]
    fn masking_replaces_flagged_entries_with_nan() {
        let (z, x, mut m, y) = arrays(4, 1, 2);
        m[(1, 0)] = 1.0;
        m[(3, 1)] = 1.0;
        let input = TestInput::new(z, x, m, y).unwrap();
        let df = input.assemble_masked();

        assert_eq!(df.ncols(), 4);
        assert!(df[(1, 2)].is_nan());
        assert!(df[(3, 3)].is_nan());
        // Unflagged entries pass through.
        assert_eq!(df[(0, 2)], 0.0);
        assert_eq!(df[(2, 3)], 21.0);
        // Treatment and covariates are copied verbatim.
        assert_eq!(df[(3, 0)], 1.0);
        assert_eq!(df[(2, 1)], 2.0);
    }
}
