//! Statistical kernels for the randomization test.
//!
//! - Rank-sum statistic computation in O(n log n)
//! - Treatment/outcome alignment across multiple outcome columns

mod rank;

pub use rank::{pooled_rank_sum, rank_sum};
