//! Configuration types for the deduction rule table.
//!
//! This module contains the strongly-typed rule structures that are
//! deserialized from the YAML configuration file. The built-in defaults
//! carry the standard rule table, so the engine also works without a
//! configuration file.

use rust_decimal::Decimal;
use serde::Deserialize;

/// A banded penalty: nothing inside the grace period, a minor amount up
/// to the cutoff, and a major amount beyond it.
///
/// The same shape is used for the late-arrival and early-departure axes.
/// Both currently carry identical amounts but are conceptually distinct
/// rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PenaltyBand {
    /// Minutes tolerated without any penalty.
    pub grace_minutes: i64,
    /// Upper bound (inclusive) of the minor band, in minutes.
    pub minor_cutoff_minutes: i64,
    /// Penalty amount for the minor band.
    pub minor: Decimal,
    /// Penalty amount beyond the minor cutoff.
    pub major: Decimal,
}

/// The half-day rule: worked durations at or below the threshold force
/// the wage to a flat amount.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HalfDayRule {
    /// Worked minutes at or below which the half-day wage applies.
    pub threshold_minutes: i64,
    /// The flat wage paid for a half day.
    pub flat_wage: Decimal,
}

/// The complete deduction rule table.
///
/// Immutable once constructed; the engine takes a `WageRules` value at
/// construction so per-environment overrides never go through shared
/// global state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WageRules {
    /// The full daily wage before deductions.
    pub base_wage: Decimal,
    /// Expected full-shift duration, in minutes.
    pub full_shift_minutes: i64,
    /// Late-arrival penalty band.
    pub late: PenaltyBand,
    /// Early-departure penalty band.
    pub early_end: PenaltyBand,
    /// Half-day wage override rule.
    pub half_day: HalfDayRule,
    /// Flat penalty for an unexcused no-show.
    pub no_show_penalty: Decimal,
}

impl Default for WageRules {
    fn default() -> Self {
        let band = PenaltyBand {
            grace_minutes: 15,
            minor_cutoff_minutes: 60,
            minor: Decimal::new(60, 0),
            major: Decimal::new(120, 0),
        };
        Self {
            base_wage: Decimal::new(500, 0),
            full_shift_minutes: 540,
            late: band.clone(),
            early_end: band,
            half_day: HalfDayRule {
                threshold_minutes: 300,
                flat_wage: Decimal::new(250, 0),
            },
            no_show_penalty: Decimal::new(200, 0),
        }
    }
}

impl WageRules {
    /// Returns the amount withheld when the half-day override applies.
    ///
    /// The half-day rule is a wage override rather than an additive
    /// subtraction, so the recorded deduction is base wage minus the flat
    /// half-day wage.
    pub fn half_day_deduction(&self) -> Decimal {
        self.base_wage - self.half_day.flat_wage
    }
}
