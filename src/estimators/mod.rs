//! Square-count estimators over an edge stream.
//!
//! Every estimator replays [`Graph::edges`](crate::Graph::edges) as a stream,
//! one or more times, feeds a sampler, counts squares exactly on the bounded
//! sample and inflates the count by the inverse sampling probability:
//!
//! | Estimator | Sample | Inflation |
//! |-----------|--------|-----------|
//! | [`eis`] | `s` reservoir-induced samples of `k/s` edges | mean of `round(c / 2 / p²)` |
//! | [`nis`] | bottom-`k` edges by endpoint hash | `round(c / p⁴)`, `p = √(kept / m)` |
//! | [`multipass_baseline`] | reservoir of `k` edges + completion pass | `round(c / p³ / 4)` |

mod eis;
mod multipass;
mod nis;
mod params;

pub use eis::eis;
pub use multipass::multipass_baseline;
pub use nis::nis;
pub use params::{Estimator, EstimatorParams};

use rand::Rng;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::sampling::rng_from_seed;

/// Rounds a scaled count to the nearest integer; non-finite or negative → `0`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn round_estimate(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        // Saturates at u64::MAX.
        value.round() as u64
    } else {
        0
    }
}

pub(crate) fn check_budget(k: usize) -> Result<()> {
    if k == 0 {
        return Err(Error::config("edge budget k must be positive"));
    }
    Ok(())
}

/// Runs `estimator` `reps` times and returns every estimate.
///
/// With `Some(seed)` the repetitions draw their seeds from one generator
/// seeded with `seed`, so the whole series is reproducible.
///
/// # Errors
/// Returns [`Error::Config`] if the estimator parameters are invalid.
pub fn repeat(
    graph: &Graph,
    estimator: Estimator,
    reps: usize,
    seed: Option<u64>,
) -> Result<Vec<u64>> {
    estimator.validate()?;
    let mut seeds = seed.map(|s| rng_from_seed(Some(s)));
    (0..reps)
        .map(|_| {
            let rep_seed = seeds.as_mut().map(|rng| rng.gen::<u64>());
            estimator.run(graph, rep_seed)
        })
        .collect()
}
