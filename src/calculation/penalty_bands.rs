//! Banded penalty evaluation.
//!
//! This module provides the shared banding function used by both the
//! late-arrival and early-departure rules, parameterized by which rule's
//! amounts to apply.

use rust_decimal::Decimal;

use crate::config::PenaltyBand;

/// Returns the penalty amount for the given number of minutes.
///
/// Minutes at or below the band's grace period (including negative
/// values, meaning on-time or better) carry no penalty; minutes up to the
/// minor cutoff carry the minor amount; anything beyond carries the major
/// amount.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::banded_penalty;
/// use wage_engine::config::WageRules;
/// use rust_decimal::Decimal;
///
/// let rules = WageRules::default();
/// assert_eq!(banded_penalty(&rules.late, 10), Decimal::ZERO);
/// assert_eq!(banded_penalty(&rules.late, 30), Decimal::new(60, 0));
/// assert_eq!(banded_penalty(&rules.late, 90), Decimal::new(120, 0));
/// ```
pub fn banded_penalty(band: &PenaltyBand, minutes: i64) -> Decimal {
    if minutes <= band.grace_minutes {
        Decimal::ZERO
    } else if minutes <= band.minor_cutoff_minutes {
        band.minor
    } else {
        band.major
    }
}
