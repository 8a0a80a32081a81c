//! Bottom-k edge sampling under a single global score threshold.
//!
//! Each edge arrives with a score (in NIS, the larger hash of its two
//! endpoints). The sample keeps the lowest-scoring edges. When it grows past
//! `k`, every entry sharing the current maximum score is evicted at once and
//! the threshold drops below that score, so the retained set is always
//! "all edges scoring at most the threshold" and never exceeds `k`.

use std::collections::BTreeSet;

use tracing::trace;

use crate::graph::Edge;

/// A bottom-k sample of `(score, edge)` pairs.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `offer` | \(O(\log k)\) amortized | eviction cost is paid by the evicted entries |
/// | `iter` | \(O(k)\) | ascending `(score, edge)` order |
#[derive(Debug, Clone)]
pub struct ThresholdSample {
    k: usize,
    entries: BTreeSet<(u32, Edge)>,
    threshold: Option<u32>,
}

impl ThresholdSample {
    /// Creates an empty sample retaining at most `k` edges.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            entries: BTreeSet::new(),
            threshold: Some(u32::MAX),
        }
    }

    /// Offers an edge with its score; returns `true` if it was admitted.
    ///
    /// An admitted edge may be evicted again by the same call if its score
    /// ties the maximum when the sample overflows.
    pub fn offer(&mut self, score: u32, edge: Edge) -> bool {
        match self.threshold {
            Some(threshold) if score <= threshold => {}
            _ => return false,
        }
        self.entries.insert((score, edge));

        if self.entries.len() > self.k {
            if let Some(&(max_score, _)) = self.entries.last() {
                let evicted = self.entries.split_off(&(max_score, (0, 0)));
                self.threshold = max_score.checked_sub(1);
                trace!(
                    max_score,
                    evicted = evicted.len(),
                    retained = self.entries.len(),
                    "threshold lowered"
                );
            }
        }
        true
    }

    /// Current admission threshold; `None` once no score can be admitted.
    #[inline]
    pub fn threshold(&self) -> Option<u32> {
        self.threshold
    }

    /// Maximum sample size.
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of retained edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is retained.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Retained `(score, edge)` pairs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, Edge)> + '_ {
        self.entries.iter().copied()
    }

    /// Retained edges in ascending score order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.entries.iter().map(|&(_, edge)| edge)
    }
}
