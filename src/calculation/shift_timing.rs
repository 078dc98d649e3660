//! Shift timing calculations.
//!
//! This module derives lateness and worked-duration figures from the
//! time-of-day fields of a shift record. All comparisons are within a
//! single calendar day.

use chrono::NaiveTime;

/// Returns how many minutes after the scheduled start the partner
/// actually started.
///
/// Positive means late; zero or negative means on-time or early. Only
/// positive values feed the penalty band.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::minutes_late;
/// use chrono::NaiveTime;
///
/// let scheduled = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
/// let actual = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
/// assert_eq!(minutes_late(scheduled, actual), 30);
/// assert_eq!(minutes_late(actual, scheduled), -30);
/// ```
pub fn minutes_late(scheduled_start: NaiveTime, actual_start: NaiveTime) -> i64 {
    (actual_start - scheduled_start).num_minutes()
}

/// Returns the minutes worked between start and end, minus break time.
///
/// May be zero or negative when the record is anomalous (end at or
/// before start, or breaks exceeding the elapsed time); callers must
/// treat a non-positive duration as a data anomaly rather than a worked
/// shift.
pub fn worked_minutes(actual_start: NaiveTime, actual_end: NaiveTime, break_minutes: u32) -> i64 {
    (actual_end - actual_start).num_minutes() - i64::from(break_minutes)
}

/// Returns how far the worked duration falls short of a full shift,
/// clamped at zero.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::shortfall_minutes;
///
/// assert_eq!(shortfall_minutes(480, 540), 60);
/// assert_eq!(shortfall_minutes(540, 540), 0);
/// assert_eq!(shortfall_minutes(600, 540), 0);
/// ```
pub fn shortfall_minutes(worked: i64, full_shift_minutes: i64) -> i64 {
    (full_shift_minutes - worked).max(0)
}
