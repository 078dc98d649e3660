//! Monthly leave entitlement calculation.
//!
//! This module derives a partner's remaining monthly leave allowance from
//! the day of the month on which they joined, modeling a pro-rated
//! monthly allotment. The value is only consulted to decide whether a
//! weekend no-show is excused; leave consumption bookkeeping lives with
//! an external collaborator.

use chrono::{Datelike, NaiveDate};

/// Returns the partner's monthly leave allowance based on their join date.
///
/// A step function of the joining day-of-month: joining earlier in a
/// month grants more leaves.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::monthly_leaves_remaining;
/// use chrono::NaiveDate;
///
/// let joined_first = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// assert_eq!(monthly_leaves_remaining(joined_first), 4);
///
/// let joined_late = NaiveDate::from_ymd_opt(2025, 6, 25).unwrap();
/// assert_eq!(monthly_leaves_remaining(joined_late), 0);
/// ```
pub fn monthly_leaves_remaining(join_date: NaiveDate) -> u8 {
    match join_date.day() {
        1 => 4,
        2..=3 => 3,
        4..=15 => 2,
        16..=21 => 1,
        _ => 0,
    }
}
