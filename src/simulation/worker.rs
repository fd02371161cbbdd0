//! A single simulation worker's batch loop.

use rand::SeedableRng;
use rand_distr::{Bernoulli, Distribution};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::constants::TREATMENT_PROBABILITY;
use crate::error::TestError;
use crate::impute::Imputer;
use crate::output::format_progress;
use crate::statistics::pooled_rank_sum;
use crate::types::Part;

use super::{counter_rng_seed, BatchEstimate, SimulationShared};

/// Run one worker's batch of simulation replicates.
///
/// Per replicate: draw a fresh Bernoulli(1/2) treatment vector (the
/// randomization distribution under the sharp null — never the observed
/// assignment), write it into this worker's private copies of the two data
/// halves, transform each half through the already-fitted imputers, and
/// compute both statistics. Row membership per half never changes; the
/// fixed partition seed means only the treatment column differs between
/// replicates.
///
/// Returns the batch's tail fractions `mean(t_sim ≥ t_obs)` per part. Any
/// transform failure aborts the batch and, through the coordinator, the
/// whole run.
pub(crate) fn run_batch(
    shared: &SimulationShared,
    g1: &dyn Imputer,
    g2: &dyn Imputer,
    replicates: usize,
    worker: usize,
    seed: u64,
    progress_interval: Option<usize>,
) -> Result<BatchEstimate, TestError> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(counter_rng_seed(seed, worker as u64));
    let design =
        Bernoulli::new(TREATMENT_PROBABILITY).expect("treatment probability is a valid parameter");

    // Worker-private buffers: the shared halves are never mutated.
    let mut df1 = shared.part_one.clone();
    let mut df2 = shared.part_two.clone();
    let mut z_sim = vec![0.0f64; shared.n_rows];

    let mut t1_sim = Vec::with_capacity(replicates);
    let mut t2_sim = Vec::with_capacity(replicates);

    for l in 0..replicates {
        for z in z_sim.iter_mut() {
            *z = if design.sample(&mut rng) { 1.0 } else { 0.0 };
        }
        for (r, &row) in shared.rows_one.iter().enumerate() {
            df1[(r, 0)] = z_sim[row];
        }
        for (r, &row) in shared.rows_two.iter().enumerate() {
            df2[(r, 0)] = z_sim[row];
        }

        let imputed1 = g1.transform(&df1).map_err(|source| TestError::Transform {
            part: Part::One,
            source,
        })?;
        let imputed2 = g2.transform(&df2).map_err(|source| TestError::Transform {
            part: Part::Two,
            source,
        })?;

        t1_sim.push(pooled_rank_sum(&imputed1, shared.layout));
        t2_sim.push(pooled_rank_sum(&imputed2, shared.layout));

        if let Some(interval) = progress_interval {
            if l % interval == 0 {
                println!("{}", format_progress(worker, l, replicates));
            }
        }
    }

    Ok(BatchEstimate {
        p1: tail_fraction(&t1_sim, shared.t1_obs),
        p2: tail_fraction(&t2_sim, shared.t2_obs),
    })
}

/// Fraction of simulated statistics at or above the observed one.
fn tail_fraction(simulated: &[f64], observed: f64) -> f64 {
    let hits = simulated.iter().filter(|&&t| t >= observed).count();
    hits as f64 / simulated.len() as f64
}
