//! External inputs the engine consumes without owning.
//!
//! Currently only randomness: the engine never reads a global RNG, callers
//! hand it a seeded [`RngStream`].
mod rng;

pub use rng::{PcgRng, RngOracle, RngStream, compute_seed};
