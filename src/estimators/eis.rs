//! Ensemble induced sampling.

use rand::Rng;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::params::Estimator;
use crate::error::Result;
use crate::graph::{Edge, Graph};
use crate::sampling::{rng_from_seed, InducedSampler};

/// Estimates the square count with `s` independent reservoir-induced samplers.
///
/// Each sampler gets `min(k / s, m)` edges. The stream is replayed twice: the
/// first pass fills the reservoirs, the second collects induced edges. The
/// result is the truncated mean of the per-sampler estimates.
///
/// # Errors
/// Returns [`Error::Config`](crate::Error::Config) unless `k > 0` and `1 ≤ s ≤ k`.
pub fn eis(graph: &Graph, k: usize, s: usize, seed: Option<u64>) -> Result<u64> {
    Estimator::Eis { k, s }.validate()?;

    let capacity = (k / s).min(graph.m());
    let mut seeds = rng_from_seed(seed);
    let mut samplers: Vec<InducedSampler> = (0..s)
        .map(|_| InducedSampler::new(Some(seeds.gen())))
        .collect();
    debug!(samplers = s, capacity, m = graph.m(), "eis setup");

    for sampler in &mut samplers {
        sampler.setup(capacity);
    }
    run_pass(&mut samplers, graph.edges(), InducedSampler::process);
    for sampler in &mut samplers {
        sampler.finalize();
    }
    run_pass(&mut samplers, graph.edges(), InducedSampler::collect_induced);

    let total: u128 = samplers.iter().map(|x| u128::from(x.estimate())).sum();
    let mean = u64::try_from(total / s as u128).unwrap_or(u64::MAX);
    debug!(mean, "eis estimate");
    Ok(mean)
}

/// Feeds every stream edge to every sampler, in stream order for each sampler.
#[cfg(not(feature = "parallel"))]
fn run_pass(samplers: &mut [InducedSampler], edges: &[Edge], step: fn(&mut InducedSampler, Edge)) {
    for &edge in edges {
        for sampler in samplers.iter_mut() {
            step(sampler, edge);
        }
    }
}

/// Feeds every stream edge to every sampler, in stream order for each sampler.
#[cfg(feature = "parallel")]
fn run_pass(samplers: &mut [InducedSampler], edges: &[Edge], step: fn(&mut InducedSampler, Edge)) {
    samplers
        .par_iter_mut()
        .for_each(|sampler| edges.iter().for_each(|&edge| step(sampler, edge)));
}
