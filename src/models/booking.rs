//! Booking window and booking snapshot models.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::TimeSlot;

/// The lifecycle status of a booking.
///
/// Transitions are `pending → confirmed → completed`, with
/// `pending|confirmed → cancelled` as a side transition. `cancelled` and
/// `completed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Requested by a parent, awaiting confirmation.
    Pending,
    /// Confirmed by the admin and assigned to a caregiver.
    Confirmed,
    /// The shift happened and the record is closed.
    Completed,
    /// Cancelled before completion.
    Cancelled,
}

impl BookingStatus {
    /// Returns true if no further transition is possible from this status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }
}

/// The time and date window a booking covers.
///
/// A window is single-day when `end_date` is absent. The end slot may sort
/// before the start slot on the raw clock (overnight shift) — that is a
/// normal window, not an error.
///
/// # Examples
///
/// ```
/// use booking_engine::models::{BookingWindow, TimeSlot};
/// use chrono::NaiveDate;
///
/// let window = BookingWindow::new(
///     TimeSlot::new(9, 0).unwrap(),
///     TimeSlot::new(17, 0).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     Some(NaiveDate::from_ymd_opt(2026, 3, 3).unwrap()),
/// ).unwrap();
/// assert_eq!(window.day_count(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingWindow {
    /// The slot the shift starts at.
    pub start_slot: TimeSlot,
    /// The slot the shift ends at.
    pub end_slot: TimeSlot,
    /// The first day of the booking.
    pub start_date: NaiveDate,
    /// The last day of the booking, if it spans more than one day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl BookingWindow {
    /// Creates a booking window, validating the date range.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidWindow`] if `end_date` is before
    /// `start_date`.
    pub fn new(
        start_slot: TimeSlot,
        end_slot: TimeSlot,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> EngineResult<Self> {
        if let Some(end) = end_date {
            if end < start_date {
                return Err(EngineError::InvalidWindow {
                    message: format!("end date {} is before start date {}", end, start_date),
                });
            }
        }
        Ok(Self {
            start_slot,
            end_slot,
            start_date,
            end_date,
        })
    }

    /// Returns the number of calendar days the window covers, at least 1.
    ///
    /// Both endpoints count: a window from `D` to `D+1` covers 2 days.
    pub fn day_count(&self) -> u32 {
        let end = self.end_date.unwrap_or(self.start_date);
        let days_between = (end - self.start_date).num_days().max(0) as u32;
        (days_between + 1).max(1)
    }
}

/// A lightweight projection of one booking, captured at one instant.
///
/// Held in memory between notification polls; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSnapshot {
    /// The booking's lifecycle status at capture time.
    pub status: BookingStatus,
    /// The name of the parent who booked.
    pub client_name: String,
    /// The day the booking is for.
    pub date: NaiveDate,
    /// The assigned caregiver, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nanny_name: Option<String>,
}

/// A capture of the whole booking collection at one instant, keyed by
/// booking id.
///
/// `BTreeMap` keeps diff output deterministic across polls.
pub type BookingSnapshotMap = BTreeMap<u64, BookingSnapshot>;
