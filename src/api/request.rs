//! Request types for the Shift Time & Pay Engine API.
//!
//! This module defines the JSON request structures for the `/quote`,
//! `/extend`, and `/reconcile` endpoints. Time strings are parsed here,
//! once, into the [`TimeSlot`] value type — the engine never re-parses
//! them internally.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{BookingWindow, ShiftRecord, TimeSlot};

/// Request body for the `/quote` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// The start time, as "H:MM" (legacy "18h00" is accepted).
    pub start_time: String,
    /// The end time, as "H:MM" (legacy "18h00" is accepted).
    pub end_time: String,
    /// The first day of the booking.
    pub start_date: NaiveDate,
    /// The last day, when the booking spans more than one day.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// The hourly rate to quote at.
    pub hourly_rate: Decimal,
}

impl QuoteRequest {
    /// Parses the request's time strings and builds the booking window.
    pub fn window(&self) -> EngineResult<BookingWindow> {
        let start_slot = TimeSlot::parse(&self.start_time)?;
        let end_slot = TimeSlot::parse(&self.end_time)?;
        BookingWindow::new(start_slot, end_slot, self.start_date, self.end_date)
    }
}

/// Request body for the `/extend` endpoint.
///
/// Describes the original booking plus the new end time; only the end
/// slot moves in an extension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtendRequest {
    /// The original booking being extended.
    #[serde(flatten)]
    pub original: QuoteRequest,
    /// The new end time, as "H:MM".
    pub new_end_time: String,
}

impl ExtendRequest {
    /// Parses the new end time string.
    pub fn new_end_slot(&self) -> EngineResult<TimeSlot> {
        TimeSlot::parse(&self.new_end_time)
    }
}

/// Request body for the `/reconcile` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileRequest {
    /// The booking the shift belongs to.
    #[serde(default)]
    pub booking_id: u64,
    /// When the caregiver clocked in.
    pub clock_in: NaiveDateTime,
    /// When the caregiver clocked out.
    pub clock_out: NaiveDateTime,
    /// The hourly rate to pay at.
    pub hourly_rate: Decimal,
}

impl From<&ReconcileRequest> for ShiftRecord {
    fn from(req: &ReconcileRequest) -> Self {
        ShiftRecord {
            booking_id: req.booking_id,
            clock_in: Some(req.clock_in),
            clock_out: Some(req.clock_out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_request_builds_window() {
        let request: QuoteRequest = serde_json::from_str(
            r#"{
                "start_time": "18h00",
                "end_time": "1:00",
                "start_date": "2026-03-02",
                "hourly_rate": "10"
            }"#,
        )
        .unwrap();

        let window = request.window().unwrap();
        assert_eq!(window.start_slot, TimeSlot::new(18, 0).unwrap());
        assert_eq!(window.end_slot, TimeSlot::new(1, 0).unwrap());
        assert_eq!(window.day_count(), 1);
    }

    #[test]
    fn test_quote_request_rejects_bad_time_string() {
        let request: QuoteRequest = serde_json::from_str(
            r#"{
                "start_time": "9:15",
                "end_time": "14:00",
                "start_date": "2026-03-02",
                "hourly_rate": "10"
            }"#,
        )
        .unwrap();

        assert!(request.window().is_err());
    }

    #[test]
    fn test_extend_request_flattens_original() {
        let request: ExtendRequest = serde_json::from_str(
            r#"{
                "start_time": "10:00",
                "end_time": "14:00",
                "start_date": "2026-03-02",
                "hourly_rate": "10",
                "new_end_time": "16:00"
            }"#,
        )
        .unwrap();

        assert_eq!(request.original.end_time, "14:00");
        assert_eq!(
            request.new_end_slot().unwrap(),
            TimeSlot::new(16, 0).unwrap()
        );
    }

    #[test]
    fn test_reconcile_request_converts_to_record() {
        let request: ReconcileRequest = serde_json::from_str(
            r#"{
                "booking_id": 7,
                "clock_in": "2026-03-02T09:00:00",
                "clock_out": "2026-03-02T13:30:00",
                "hourly_rate": "50"
            }"#,
        )
        .unwrap();

        let record: ShiftRecord = (&request).into();
        assert_eq!(record.booking_id, 7);
        assert!(record.is_terminal());
    }
}
