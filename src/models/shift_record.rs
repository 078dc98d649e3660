//! Shift record model.
//!
//! This module defines the ShiftRecord struct representing one day's
//! attendance snapshot for a partner, as produced by the external
//! attendance system.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One partner's attendance record for a single date.
///
/// At most one record exists per partner per date. Records are created by
/// the external attendance system and are read-only to this engine.
///
/// The `is_half_day` flag is advisory: the attendance system may mark a
/// day as a half day, but the engine derives half-day status from the
/// worked duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_shift_record() {
        let json = r#"{
            "date": "2026-08-04",
            "actual_start": "09:10:00",
            "actual_end": "18:00:00",
            "break_minutes": 30,
            "is_half_day": false,
            "is_no_show": false
        }"#;

        let record: ShiftRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2026, 8, 4).unwrap());
        assert_eq!(record.actual_start, NaiveTime::from_hms_opt(9, 10, 0).unwrap());
        assert_eq!(record.actual_end, NaiveTime::from_hms_opt(18, 0, 0).unwrap());
        assert_eq!(record.break_minutes, 30);
        assert!(!record.is_half_day);
        assert!(!record.is_no_show);
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "date": "2026-08-04",
            "actual_start": "09:00:00",
            "actual_end": "18:00:00"
        }"#;

        let record: ShiftRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.break_minutes, 0);
        assert!(!record.is_half_day);
        assert!(!record.is_no_show);
    }

    #[test]
    fn test_serialize_round_trip() {
        let record = ShiftRecord {
            date: NaiveDate::from_ymd_opt(2026, 8, 4).unwrap(),
            actual_start: NaiveTime::from_hms_opt(9, 10, 0).unwrap(),
            actual_end: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            break_minutes: 30,
            is_half_day: false,
            is_no_show: true,
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ShiftRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
