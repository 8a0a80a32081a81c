//! # `c4stream` - Streaming 4-Cycle Estimation
//!
//! Estimates the number of 4-cycles ("squares") of a large undirected graph
//! presented as an edge stream, keeping only a memory-bounded subgraph.
//!
//! ## Architecture
//!
//! The pipeline is
//! `edge stream → sampler → bounded subgraph → exact counter → inflation → estimate`.
//!
//! ### Core Abstractions
//!
//! 1. **Graph Store** ([`Graph`]):
//!    - Load-once symmetric adjacency lists plus the full edge list
//!    - Exact Chiba–Nishizeki square counting on a disposable working copy
//!    - Degeneracy and per-edge square completion queries
//!
//! 2. **Colored Graph Store** ([`ColoredGraph`]):
//!    - Two parallel adjacency structures (color 0 and color 1)
//!    - True edge and node deletion with incremental edge counts
//!    - Alternating-color square counting
//!
//! 3. **Samplers** ([`sampling`]):
//!    - Algorithm-R edge reservoir
//!    - Reservoir-induced sampler with budgeted eviction
//!    - Bottom-k hash-threshold sample driven by [`TabulationHasher`]
//!
//! 4. **Estimators** ([`estimators`]):
//!    - `EIS`: ensemble of induced samplers, averaged
//!    - `NIS`: node-hash threshold sample, exact count, `1/p⁴` inflation
//!    - `multipass_baseline`: reservoir sample, completion counting, `1/p³` inflation
//!
//! ## Example
//!
//! ```rust
//! use c4stream::{estimators, Graph};
//!
//! // A single square 0-1-2-3-0.
//! let graph = Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]);
//! assert_eq!(graph.exact_square_count(), 1);
//!
//! // With a budget covering the whole stream the baseline is exact.
//! let estimate = estimators::multipass_baseline(&graph, 16, Some(7)).unwrap();
//! assert_eq!(estimate, 1);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

pub mod error;
pub mod estimators;
pub mod graph;
pub mod hash;
pub mod sampling;
pub mod timing;

pub use error::{Error, Result};
pub use estimators::{Estimator, EstimatorParams};
pub use graph::{Color, ColoredGraph, Edge, Graph, NodeId, NodeRemap};
pub use hash::TabulationHasher;
pub use sampling::{EdgeReservoir, InducedSampler, SamplerStats, ThresholdSample};
