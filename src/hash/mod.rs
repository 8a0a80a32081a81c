//! Hashing primitives for threshold sampling.

pub mod tabulation;

pub use tabulation::TabulationHasher;
