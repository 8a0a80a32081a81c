//! A uniform fixed-size edge sample over a stream of unknown length.
//!
//! The first `capacity` edges fill the reservoir, which is then shuffled once.
//! Edge number `i` (0-based) after that draws `j` uniformly from `[0, i]` and
//! replaces slot `j` when `j < capacity`. At every prefix each edge seen so far
//! is retained with probability `capacity / seen`.
//!
//! The one-time shuffle gives the slots a random relative order, so popping
//! from the back evicts approximately uniformly among the sampled edges.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use super::rng_from_seed;
use crate::graph::Edge;

/// Algorithm-R reservoir of edges with a privately owned generator.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `offer` | \(O(1)\) | one shuffle of `capacity` items when first full |
/// | `pop` | \(O(1)\) | removes the last slot |
#[derive(Debug, Clone)]
pub struct EdgeReservoir {
    capacity: usize,
    items: Vec<Edge>,
    processed: usize,
    shuffled: bool,
    rng: StdRng,
}

impl EdgeReservoir {
    /// Creates an empty reservoir holding at most `capacity` edges.
    pub fn new(capacity: usize, seed: Option<u64>) -> Self {
        Self {
            capacity,
            items: Vec::with_capacity(capacity),
            processed: 0,
            shuffled: false,
            rng: rng_from_seed(seed),
        }
    }

    /// Empties the reservoir and sets a new capacity, keeping the generator.
    pub fn reset(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.items.clear();
        self.items.reserve(capacity);
        self.processed = 0;
        self.shuffled = false;
    }

    /// Offers the next stream edge.
    pub fn offer(&mut self, edge: Edge) {
        if self.items.len() < self.capacity {
            self.items.push(edge);
            if self.items.len() == self.capacity {
                self.items.shuffle(&mut self.rng);
                self.shuffled = true;
            }
        } else {
            let slot = self.rng.gen_range(0..=self.processed);
            if slot < self.capacity {
                self.items[slot] = edge;
            }
        }
        self.processed += 1;
    }

    /// Shuffles a reservoir that never filled up, so that slot order is random
    /// however long the stream was. No-op once shuffled.
    pub fn seal(&mut self) {
        if !self.shuffled {
            self.items.shuffle(&mut self.rng);
            self.shuffled = true;
        }
    }

    /// Removes and returns the edge in the last slot.
    pub fn pop(&mut self) -> Option<Edge> {
        self.items.pop()
    }

    /// The sampled edges in slot order.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.items
    }

    /// Consumes the reservoir, returning the sampled edges in slot order.
    pub fn into_edges(self) -> Vec<Edge> {
        self.items
    }

    /// Maximum number of retained edges.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of edges currently retained.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no edge is retained.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of edges offered since the last reset.
    #[inline]
    pub fn processed(&self) -> usize {
        self.processed
    }
}
