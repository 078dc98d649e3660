//! Request types for the Daily Wage Engine API.
//!
//! This module defines the JSON request structures for the `/evaluate`
//! and `/run` endpoints.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::{PartnerProfile, ShiftRecord};

/// Request body for the `/evaluate` endpoint.
///
/// Both `partner` and `shift` may be omitted; the engine treats missing
/// data as "no deduction information available" and returns the full
/// base wage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateRequest {
    /// The partner profile, if one exists.
    #[serde(default)]
    pub partner: Option<PartnerRequest>,
    /// The day's attendance record, if one exists.
    #[serde(default)]
    pub shift: Option<ShiftRequest>,
    /// The date to evaluate; supplies the day-of-week for the weekend
    /// no-show rule.
    pub today: NaiveDate,
}

/// Partner information in an evaluate request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerRequest {
    /// Unique identifier for the partner.
    pub id: String,
    /// The date the partner joined.
    pub date_of_joining: NaiveDate,
    /// The time of day the partner's shift is scheduled to start.
    pub scheduled_shift_start: NaiveTime,
}

/// Attendance information in an evaluate request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// The date this record covers.
    pub date: NaiveDate,
    /// The time the partner actually started work.
    pub actual_start: NaiveTime,
    /// The time the partner actually stopped work.
    pub actual_end: NaiveTime,
    /// Unpaid break time taken during the shift, in minutes.
    #[serde(default)]
    pub break_minutes: u32,
    /// Whether the attendance system marked this as a half day.
    #[serde(default)]
    pub is_half_day: bool,
    /// Whether the partner did not work at all on this date.
    #[serde(default)]
    pub is_no_show: bool,
}

/// Request body for the `/run` endpoint.
///
/// The date is optional; when omitted the batch runs for the current
/// date, which is what the external daily scheduler wants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunRequest {
    /// The date to run the batch for.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl From<PartnerRequest> for PartnerProfile {
    fn from(req: PartnerRequest) -> Self {
        PartnerProfile {
            id: req.id,
            date_of_joining: req.date_of_joining,
            scheduled_shift_start: req.scheduled_shift_start,
        }
    }
}

impl From<ShiftRequest> for ShiftRecord {
    fn from(req: ShiftRequest) -> Self {
        ShiftRecord {
            date: req.date,
            actual_start: req.actual_start,
            actual_end: req.actual_end,
            break_minutes: req.break_minutes,
            is_half_day: req.is_half_day,
            is_no_show: req.is_no_show,
        }
    }
}
