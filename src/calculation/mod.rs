//! Calculation logic for the Daily Wage Engine.
//!
//! This module contains the banded penalty function shared by the late
//! and early-departure rules, the shift timing calculator, the monthly
//! leave entitlement step function, and the wage engine that composes
//! them into one day's wage and deduction breakdown.

mod leave_entitlement;
mod penalty_bands;
mod shift_timing;
mod wage_engine;

pub use leave_entitlement::monthly_leaves_remaining;
pub use penalty_bands::banded_penalty;
pub use shift_timing::{minutes_late, shortfall_minutes, worked_minutes};
pub use wage_engine::WageEngine;
