//! Accrue Core - the accumulation engine.
//!
//! This crate splits a periodic contribution across weighted categories,
//! settles liquidity between the gold and stock funds, and keeps the
//! committed ledger. It is storage- and network-agnostic: persistence and
//! price lookup are traits implemented by the `storage-sqlite` and
//! `market-data` crates.

pub mod accumulation;
pub mod categories;
pub mod constants;
pub mod errors;
pub mod pricing;
pub mod utils;

pub use accumulation::*;
pub use categories::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
