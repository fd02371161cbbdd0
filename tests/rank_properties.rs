//! Property tests for the rank-sum statistic.
//!
//! The load-bearing property: the O(n log n) sort formulation must agree
//! with the quadratic "count of y_j ≤ y_i" formulation — the sort is an
//! exact reformulation, checked here on larger randomized inputs than the
//! unit tests cover.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rerand::{pooled_rank_sum, rank_sum, ColumnLayout, Dataset};

/// Quadratic reference: Σ_i z_i · |{j : y_j ≤ y_i}|.
fn rank_sum_quadratic(z: &[f64], y: &[f64]) -> f64 {
    let n = z.len();
    let mut t = 0.0;
    for i in 0..n {
        let rank = (0..n).filter(|&j| y[j] <= y[i]).count();
        t += z[i] * rank as f64;
    }
    t
}

/// Random binary treatment and a random permutation of distinct outcomes.
fn random_instance(rng: &mut Xoshiro256PlusPlus, n: usize) -> (Vec<f64>, Vec<f64>) {
    let z: Vec<f64> = (0..n).map(|_| f64::from(rng.random_range(0..=1))).collect();
    let mut y: Vec<f64> = (0..n).map(|i| (i as f64) * 0.75 - 13.0).collect();
    for i in (1..n).rev() {
        let j = rng.random_range(0..=i);
        y.swap(i, j);
    }
    (z, y)
}

#[test]
fn fast_and_quadratic_formulations_agree() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
    for n in [1usize, 2, 5, 33, 100, 517] {
        for _ in 0..5 {
            let (z, y) = random_instance(&mut rng, n);
            let fast = rank_sum(&z, &y);
            let slow = rank_sum_quadratic(&z, &y);
            assert!(
                (fast - slow).abs() < 1e-9,
                "n={}: fast={} slow={}",
                n,
                fast,
                slow
            );
        }
    }
}

#[test]
fn statistic_depends_only_on_ranks() {
    // Any strictly increasing transform of the outcomes leaves the
    // statistic unchanged.
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(8);
    let (z, y) = random_instance(&mut rng, 120);
    let transformed: Vec<f64> = y.iter().map(|v| (v * 0.1).exp()).collect();
    assert_eq!(rank_sum(&z, &y), rank_sum(&z, &transformed));
}

#[test]
fn statistic_is_monotone_in_treatment() {
    // Adding a treated unit can only increase the statistic.
    let y = vec![5.0, 1.0, 4.0, 2.0, 3.0];
    let none = vec![0.0; 5];
    let mut one = none.clone();
    one[0] = 1.0;
    assert!(rank_sum(&one, &y) > rank_sum(&none, &y));
}

#[test]
fn pooled_statistic_sums_per_outcome_statistics() {
    // Pooling k outcome columns ranks them jointly, which for columns with
    // disjoint value ranges equals ranking each column separately with a
    // fixed offset.
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(9);
    let n = 30;
    let (z, y1) = random_instance(&mut rng, n);
    // Second outcome strictly above the first's range: offsets every rank
    // by n.
    let y2: Vec<f64> = y1.iter().map(|v| v + 1_000.0).collect();

    let mut data = Dataset::zeros(n, 3);
    for i in 0..n {
        data[(i, 0)] = z[i];
        data[(i, 1)] = y1[i];
        data[(i, 2)] = y2[i];
    }
    let layout = ColumnLayout {
        covariates: 0,
        outcomes: 2,
    };

    let treated: f64 = z.iter().sum();
    let expected = rank_sum(&z, &y1) + (rank_sum(&z, &y2) + treated * n as f64);
    assert_eq!(pooled_rank_sum(&data, layout), expected);
}
