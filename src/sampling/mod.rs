//! Memory-bounded edge samplers.
//!
//! Samplers are organized into:
//! - `reservoir`: uniform fixed-size edge sample (Algorithm R)
//! - `induced`: reservoir sample plus budgeted induced edges, on a colored graph
//! - `threshold`: bottom-k sample under a hash-derived edge score

pub mod induced;
pub mod reservoir;
pub mod threshold;

pub use induced::{InducedSampler, SamplerStats};
pub use reservoir::EdgeReservoir;
pub use threshold::ThresholdSample;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Builds a private generator: reproducible for `Some(seed)`, OS entropy otherwise.
pub(crate) fn rng_from_seed(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}
