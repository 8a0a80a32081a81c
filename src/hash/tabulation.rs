//! Tabulation hashing of 32-bit keys.
//!
//! A key is split into four bytes; each byte indexes its own table of random
//! words and the lookups are XOR-combined. Two variants are provided:
//! - `simple`: plain 3-independent tabulation over 32-bit words
//! - `twisted`: the last byte is first twisted by the accumulated hash, using
//!   64-bit table words of which the high half is returned
//!
//! Tables are drawn from a generator owned by the hasher, so two hashers built
//! from the same seed agree on every key.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

type SimpleTable = [[u32; 256]; 4];
type TwistedTable = [[u64; 256]; 4];

/// A tabulation hasher over `u32` keys with privately owned random tables.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `simple` | \(O(1)\) | 4 table lookups |
/// | `twisted` | \(O(1)\) | 4 table lookups, 64-bit accumulator |
/// | `reset` | \(O(1)\) | Redraws 2 × 1024 words |
pub struct TabulationHasher {
    simple_table: Box<SimpleTable>,
    twisted_table: Box<TwistedTable>,
    rng: StdRng,
}

impl TabulationHasher {
    /// Creates a hasher whose tables are seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Creates a hasher with reproducible tables.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        let mut hasher = Self {
            simple_table: Box::new([[0; 256]; 4]),
            twisted_table: Box::new([[0; 256]; 4]),
            rng,
        };
        hasher.reset();
        hasher
    }

    /// Redraws both tables from the hasher's generator.
    pub fn reset(&mut self) {
        for row in self.simple_table.iter_mut() {
            for cell in row.iter_mut() {
                *cell = self.rng.gen();
            }
        }
        for row in self.twisted_table.iter_mut() {
            for cell in row.iter_mut() {
                *cell = self.rng.gen();
            }
        }
    }

    /// Simple tabulation: XOR of one lookup per key byte.
    #[inline]
    pub fn simple(&self, key: u32) -> u32 {
        key.to_le_bytes()
            .iter()
            .zip(self.simple_table.iter())
            .fold(0, |h, (&byte, row)| h ^ row[usize::from(byte)])
    }

    /// Twisted tabulation.
    ///
    /// The first three bytes are hashed as in [`simple`](Self::simple); the
    /// fourth byte is XORed with the low byte of the accumulator before its
    /// lookup. The result is the high 32 bits of the 64-bit accumulator.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn twisted(&self, key: u32) -> u32 {
        let bytes = key.to_le_bytes();
        let table = &self.twisted_table;
        let mut h: u64 = 0;
        for (row, &byte) in table.iter().zip(&bytes[..3]) {
            h ^= row[usize::from(byte)];
        }
        let twisted = bytes[3] ^ h.to_le_bytes()[0];
        h ^= table[3][usize::from(twisted)];
        (h >> 32) as u32
    }
}

impl Default for TabulationHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for TabulationHasher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TabulationHasher").finish_non_exhaustive()
    }
}
