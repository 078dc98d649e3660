//! Partner profile model.
//!
//! This module defines the PartnerProfile struct representing a gig-work
//! partner as held by the external partner registry.

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Represents a gig-work partner whose daily attendance determines pay.
///
/// Profiles are owned by an external partner registry and are immutable
/// for the duration of one wage calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerProfile {
    /// Unique identifier for the partner.
    pub id: String,
    /// The date the partner joined.
    pub date_of_joining: NaiveDate,
    /// The time of day the partner's shift is scheduled to start.
    pub scheduled_shift_start: NaiveTime,
}

impl PartnerProfile {
    /// Returns the day of the month on which the partner joined.
    ///
    /// The joining day drives the monthly leave entitlement step function.
    ///
    /// # Examples
    ///
    /// ```
    /// use wage_engine::models::PartnerProfile;
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let partner = PartnerProfile {
    ///     id: "partner_001".to_string(),
    ///     date_of_joining: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
    ///     scheduled_shift_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
    /// };
    /// assert_eq!(partner.joining_day(), 10);
    /// ```
    pub fn joining_day(&self) -> u32 {
        self.date_of_joining.day()
    }
}
