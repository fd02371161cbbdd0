//! Run the one-shot test on synthetic data with a median-fill imputer.
//!
//! Mirrors a typical experiment driver: generate a dataset with missing
//! outcome entries, wire an imputation model through the test, print both
//! p-values. The imputer lives here because imputation models are
//! collaborators of the library, not part of it.
//!
//! ```bash
//! cargo run --example one_shot_median
//! ```

use nalgebra::DMatrix;
use rand::SeedableRng;
use rand_distr::{Bernoulli, Distribution, Normal};
use rand_xoshiro::Xoshiro256PlusPlus;
use rerand::{output, Dataset, ImputeError, Imputer, OneShotTest, TestInput};

/// Fills missing entries with their column's median over observed values.
#[derive(Default)]
struct MedianFill {
    medians: Vec<f64>,
}

impl Imputer for MedianFill {
    fn fit(&mut self, data: &Dataset) -> Result<(), ImputeError> {
        self.medians.clear();
        for j in 0..data.ncols() {
            let mut observed: Vec<f64> = data
                .column(j)
                .iter()
                .copied()
                .filter(|v| !v.is_nan())
                .collect();
            if observed.is_empty() {
                return Err(ImputeError::new(format!(
                    "column {} has no observed values to take a median of",
                    j
                )));
            }
            observed.sort_by(f64::total_cmp);
            let mid = observed.len() / 2;
            let median = if observed.len() % 2 == 0 {
                (observed[mid - 1] + observed[mid]) / 2.0
            } else {
                observed[mid]
            };
            self.medians.push(median);
        }
        Ok(())
    }

    fn transform(&self, data: &Dataset) -> Result<Dataset, ImputeError> {
        let mut filled = data.clone();
        for j in 0..filled.ncols() {
            for i in 0..filled.nrows() {
                if filled[(i, j)].is_nan() {
                    filled[(i, j)] = self.medians[j];
                }
            }
        }
        Ok(filled)
    }
}

/// Synthetic trial: two covariates, two outcomes driven by the covariates
/// (no treatment effect, so the sharp null holds), a fifth of the outcome
/// entries missing at random.
fn synthetic_input(n: usize) -> TestInput {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
    let assignment = Bernoulli::new(0.5).expect("valid probability");
    let missing = Bernoulli::new(0.2).expect("valid probability");
    let noise = Normal::new(0.0, 1.0).expect("valid normal");

    let z = DMatrix::from_fn(n, 1, |_, _| f64::from(assignment.sample(&mut rng)));
    let x = DMatrix::from_fn(n, 2, |_, _| noise.sample(&mut rng));
    let y = DMatrix::from_fn(n, 2, |i, j| {
        2.0 * x[(i, j)] - x[(i, 1 - j)] + 0.5 * noise.sample(&mut rng)
    });
    let m = DMatrix::from_fn(n, 2, |_, _| f64::from(missing.sample(&mut rng)));

    TestInput::new(z, x, m, y).expect("synthetic arrays are shape-coherent")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = synthetic_input(400);

    let outcome = OneShotTest::quick()
        .n_jobs(4)
        .run(&input, &mut MedianFill::default(), &mut MedianFill::default())?;

    println!("{}", output::format_outcome(&outcome));
    Ok(())
}
