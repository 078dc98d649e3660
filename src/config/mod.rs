//! Configuration for the Daily Wage Engine.
//!
//! This module provides the deduction rule table types and the loader
//! that reads them from a YAML file.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{HalfDayRule, PenaltyBand, WageRules};
