//! Core data models for the Daily Wage Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod partner;
mod shift_record;
mod wage_result;

pub use partner::PartnerProfile;
pub use shift_record::ShiftRecord;
pub use wage_result::{DeductionBreakdown, LedgerEntry, WageResult};
