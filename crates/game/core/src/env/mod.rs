//! Environment inputs supplied to the rules by the caller.
//!
//! The only environmental input combat needs is randomness, provided through
//! the [`RngOracle`] trait.
pub mod rng;

pub use rng::{PcgRng, RngOracle, ScriptedRng};
