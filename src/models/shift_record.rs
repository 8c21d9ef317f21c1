//! Shift record model: the clock-in/clock-out telemetry for one booking.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The clock events for one caregiver shift.
///
/// A record is created with both events unset at booking confirmation;
/// `clock_in` is set when the caregiver starts and `clock_out` when they
/// finish. Once both are set the record is terminal and can be reconciled
/// into actual pay.
///
/// At most one record per caregiver may be active (`clock_in` set,
/// `clock_out` unset) at a time — that invariant is enforced by the caller
/// under a transaction at clock-in time, not by this engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// The booking this shift belongs to.
    pub booking_id: u64,
    /// When the caregiver started, if they have.
    #[serde(default)]
    pub clock_in: Option<NaiveDateTime>,
    /// When the caregiver finished, if they have.
    #[serde(default)]
    pub clock_out: Option<NaiveDateTime>,
}

impl ShiftRecord {
    /// Creates a fresh record with neither clock event set.
    pub fn new(booking_id: u64) -> Self {
        Self {
            booking_id,
            clock_in: None,
            clock_out: None,
        }
    }

    /// Returns true if the caregiver has clocked in but not yet out.
    pub fn is_active(&self) -> bool {
        self.clock_in.is_some() && self.clock_out.is_none()
    }

    /// Returns true if both clock events are set and the record can be
    /// reconciled.
    pub fn is_terminal(&self) -> bool {
        self.clock_in.is_some() && self.clock_out.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_fresh_record_is_neither_active_nor_terminal() {
        let record = ShiftRecord::new(7);
        assert!(!record.is_active());
        assert!(!record.is_terminal());
    }

    #[test]
    fn test_clocked_in_record_is_active() {
        let record = ShiftRecord {
            booking_id: 7,
            clock_in: Some(datetime("2026-03-02 09:00:00")),
            clock_out: None,
        };
        assert!(record.is_active());
        assert!(!record.is_terminal());
    }

    #[test]
    fn test_clocked_out_record_is_terminal() {
        let record = ShiftRecord {
            booking_id: 7,
            clock_in: Some(datetime("2026-03-02 09:00:00")),
            clock_out: Some(datetime("2026-03-02 13:30:00")),
        };
        assert!(!record.is_active());
        assert!(record.is_terminal());
    }

    #[test]
    fn test_record_serialization() {
        let record = ShiftRecord {
            booking_id: 12,
            clock_in: Some(datetime("2026-03-02 09:00:00")),
            clock_out: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: ShiftRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_missing_clock_fields_default_to_none() {
        let record: ShiftRecord = serde_json::from_str(r#"{"booking_id": 3}"#).unwrap();
        assert_eq!(record, ShiftRecord::new(3));
    }
}
