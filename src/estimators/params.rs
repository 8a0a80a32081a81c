//! Estimator configuration.

use serde::{Deserialize, Serialize};

use super::{check_budget, eis, multipass_baseline, nis, repeat};
use crate::error::{Error, Result};
use crate::graph::Graph;

/// Run parameters shared by the estimators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorParams {
    /// Total edge budget.
    pub k: usize,
    /// EIS ensemble size; each sampler gets `k / s` edges.
    pub s: usize,
    /// Repetitions per run.
    pub reps: usize,
    /// Seed for reproducible runs; OS entropy when absent.
    pub seed: Option<u64>,
}

impl Default for EstimatorParams {
    fn default() -> Self {
        Self {
            k: 20_000,
            s: 32,
            reps: 10,
            seed: None,
        }
    }
}

impl EstimatorParams {
    /// EIS with budget `k` split over `s` samplers.
    pub fn eis(&self) -> Estimator {
        Estimator::Eis { k: self.k, s: self.s }
    }

    /// NIS with budget `k`.
    pub fn nis(&self) -> Estimator {
        Estimator::Nis { k: self.k }
    }

    /// The two-pass baseline with budget `k`.
    pub fn multipass_baseline(&self) -> Estimator {
        Estimator::MultipassBaseline { k: self.k }
    }

    /// Runs `estimator` `reps` times, seeding the series from `seed`.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the estimator parameters are invalid.
    pub fn run(&self, graph: &Graph, estimator: Estimator) -> Result<Vec<u64>> {
        repeat(graph, estimator, self.reps, self.seed)
    }
}

/// Selects one estimator and its budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum Estimator {
    /// Ensemble induced sampling with `s` samplers sharing `k` edges.
    Eis {
        /// Total edge budget.
        k: usize,
        /// Ensemble size.
        s: usize,
    },
    /// Node-hash threshold sampling of at most `k` edges.
    Nis {
        /// Edge budget.
        k: usize,
    },
    /// Two-pass reservoir baseline with `k` sampled edges.
    MultipassBaseline {
        /// Edge budget.
        k: usize,
    },
}

impl Estimator {
    /// Short name used in logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Estimator::Eis { .. } => "eis",
            Estimator::Nis { .. } => "nis",
            Estimator::MultipassBaseline { .. } => "multipass_baseline",
        }
    }

    /// Validates the budget (and ensemble size for EIS).
    ///
    /// # Errors
    /// Returns [`Error::Config`] for `k = 0` or an EIS `s` outside `[1, k]`.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Estimator::Eis { k, s } => {
                check_budget(k)?;
                if s == 0 || s > k {
                    return Err(Error::config(format!(
                        "ensemble size s = {s} must lie in [1, k = {k}]"
                    )));
                }
                Ok(())
            }
            Estimator::Nis { k } | Estimator::MultipassBaseline { k } => check_budget(k),
        }
    }

    /// Runs the estimator once over the edge stream of `graph`.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the parameters are invalid.
    pub fn run(&self, graph: &Graph, seed: Option<u64>) -> Result<u64> {
        match *self {
            Estimator::Eis { k, s } => eis(graph, k, s, seed),
            Estimator::Nis { k } => nis(graph, k, seed),
            Estimator::MultipassBaseline { k } => multipass_baseline(graph, k, seed),
        }
    }
}
