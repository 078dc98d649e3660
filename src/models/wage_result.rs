//! Wage calculation result models.
//!
//! This module contains the [`WageResult`] type produced by one wage
//! evaluation, the itemized [`DeductionBreakdown`], and the persisted
//! [`LedgerEntry`] day-ledger record.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Itemized deductions for one partner's day.
///
/// Each field is a non-negative amount. The no-show deduction is mutually
/// exclusive with all others: a no-show day never evaluates the late,
/// early-end, or half-day rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    /// Deduction for arriving late.
    pub late: Decimal,
    /// Deduction for leaving before the full shift elapsed.
    pub early_end: Decimal,
    /// Amount withheld when the half-day wage override applies.
    pub half_day: Decimal,
    /// Flat penalty for an unexcused no-show.
    pub no_show: Decimal,
}

impl DeductionBreakdown {
    /// Returns the sum of all deduction categories.
    pub fn total(&self) -> Decimal {
        self.late + self.early_end + self.half_day + self.no_show
    }

    /// Returns true if every deduction category is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use wage_engine::models::DeductionBreakdown;
    ///
    /// assert!(DeductionBreakdown::default().is_zero());
    /// ```
    pub fn is_zero(&self) -> bool {
        self.total().is_zero()
    }
}

/// The outcome of one wage evaluation for one partner and date.
///
/// Immutable once produced. The daily wage is always clamped to a
/// non-negative amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageResult {
    /// The wage earned for the day, after deductions.
    pub daily_wage: Decimal,
    /// The itemized deductions applied.
    pub deductions: DeductionBreakdown,
}

impl WageResult {
    /// Builds the default full-wage result used when no profile or shift
    /// record is available for the day.
    pub fn full_wage(base_wage: Decimal) -> Self {
        Self {
            daily_wage: base_wage,
            deductions: DeductionBreakdown::default(),
        }
    }
}

/// The persisted per-partner, per-day ledger record.
///
/// One entry exists per (partner, date); re-running a day replaces the
/// previous entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// The partner this entry belongs to.
    pub partner_id: String,
    /// The date the wage was computed for.
    pub date: NaiveDate,
    /// The computed daily wage.
    pub wage: Decimal,
    /// The itemized deduction breakdown.
    pub deductions: DeductionBreakdown,
    /// When this entry was written.
    pub written_at: DateTime<Utc>,
}
