//! Daily batch processing.
//!
//! This module contains the runner that iterates all known partners,
//! evaluates each one's wage for the day, and writes the results to the
//! day-ledger.

mod runner;

pub use runner::{BatchOptions, BatchRunner, BatchSummary};
