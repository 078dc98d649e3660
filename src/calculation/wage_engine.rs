//! Wage engine: one partner, one day, one wage.
//!
//! This module composes the banded penalties, shift timing, and leave
//! entitlement calculations into the full evaluation of a single day's
//! wage. The evaluation is a pure function over the partner profile, the
//! shift record, and an explicitly supplied "today" (used only for
//! day-of-week); no clock or global state is consulted.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::WageRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{DeductionBreakdown, PartnerProfile, ShiftRecord, WageResult};

use super::{banded_penalty, minutes_late, monthly_leaves_remaining, shortfall_minutes, worked_minutes};

/// Evaluates daily wages against an immutable rule table.
///
/// Constructed once with a [`WageRules`] value; every evaluation is an
/// independent pure computation, so a single engine can serve any number
/// of partners.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::WageEngine;
/// use wage_engine::config::WageRules;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let engine = WageEngine::new(WageRules::default());
/// // 2026-08-04 is a Tuesday; no profile or shift on record.
/// let today = NaiveDate::from_ymd_opt(2026, 8, 4).unwrap();
/// let result = engine.evaluate_day(None, None, today).unwrap();
/// assert_eq!(result.daily_wage, Decimal::new(500, 0));
/// assert!(result.deductions.is_zero());
/// ```
#[derive(Debug, Clone)]
pub struct WageEngine {
    rules: WageRules,
}

impl WageEngine {
    /// Creates an engine with the given rule table.
    pub fn new(rules: WageRules) -> Self {
        Self { rules }
    }

    /// Returns the rule table this engine evaluates against.
    pub fn rules(&self) -> &WageRules {
        &self.rules
    }

    /// Computes the wage and deduction breakdown for one partner's day.
    ///
    /// Either input may be absent (no profile found, or no attendance
    /// record for the date); missing data yields the full base wage with
    /// zero deductions rather than an error.
    ///
    /// On a no-show day only the no-show rule is evaluated: a weekend
    /// no-show is excused when the partner still has monthly leaves,
    /// while a weekday no-show always carries the flat penalty. On a
    /// present day the late penalty applies first, then either the
    /// half-day wage override (worked minutes at or below the threshold)
    /// or the early-departure penalty (worked minutes short of a full
    /// shift). The half-day rule is a hard floor: once it fires, the
    /// wage is the flat half-day amount and the early-departure rule is
    /// not evaluated.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidShift`] when a present-day record
    /// has a non-positive worked duration (end at or before start, or
    /// breaks exceeding the elapsed time).
    pub fn evaluate_day(
        &self,
        partner: Option<&PartnerProfile>,
        shift: Option<&ShiftRecord>,
        today: NaiveDate,
    ) -> EngineResult<WageResult> {
        let (Some(partner), Some(shift)) = (partner, shift) else {
            return Ok(WageResult::full_wage(self.rules.base_wage));
        };

        if shift.is_no_show {
            Ok(self.evaluate_no_show(partner, today))
        } else {
            self.evaluate_present(partner, shift)
        }
    }

    fn evaluate_no_show(&self, partner: &PartnerProfile, today: NaiveDate) -> WageResult {
        let weekend = matches!(today.weekday(), Weekday::Sat | Weekday::Sun);
        let excused = weekend && monthly_leaves_remaining(partner.date_of_joining) > 0;

        let mut deductions = DeductionBreakdown::default();
        let mut wage = self.rules.base_wage;

        if excused {
            debug!(partner_id = %partner.id, "weekend no-show excused by remaining leaves");
        } else {
            deductions.no_show = self.rules.no_show_penalty;
            wage -= deductions.no_show;
        }

        WageResult {
            daily_wage: wage.max(Decimal::ZERO),
            deductions,
        }
    }

    fn evaluate_present(
        &self,
        partner: &PartnerProfile,
        shift: &ShiftRecord,
    ) -> EngineResult<WageResult> {
        let worked = worked_minutes(shift.actual_start, shift.actual_end, shift.break_minutes);
        if worked <= 0 {
            return Err(EngineError::InvalidShift {
                partner_id: partner.id.clone(),
                message: format!("non-positive worked duration ({worked} minutes)"),
            });
        }

        let mut deductions = DeductionBreakdown::default();
        let mut wage = self.rules.base_wage;

        let late = minutes_late(partner.scheduled_shift_start, shift.actual_start);
        deductions.late = banded_penalty(&self.rules.late, late);
        wage -= deductions.late;

        if worked <= self.rules.half_day.threshold_minutes {
            // Hard floor: the half-day wage replaces whatever was
            // computed so far, and the early-departure rule is skipped.
            deductions.half_day = self.rules.half_day_deduction();
            wage = self.rules.half_day.flat_wage;
        } else if worked < self.rules.full_shift_minutes {
            let short_by = shortfall_minutes(worked, self.rules.full_shift_minutes);
            deductions.early_end = banded_penalty(&self.rules.early_end, short_by);
            wage -= deductions.early_end;
        }

        Ok(WageResult {
            daily_wage: wage.max(Decimal::ZERO),
            deductions,
        })
    }
}
