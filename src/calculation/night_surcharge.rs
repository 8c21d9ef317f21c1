//! Night surcharge rule: the evening predicate and the fee calculation.
//!
//! A booking incurs the night fee when the shift touches the night on
//! either edge: it ends after 19:00, it starts before 07:00, or it runs
//! past midnight and ends before 07:00. Both edges are checked against
//! absolute clock hours, never against business-order keys.

use chrono::{NaiveDateTime, Timelike};
use rust_decimal::Decimal;

use crate::models::TimeSlot;

/// Hour after which an ending shift counts as evening (exclusive: a shift
/// ending exactly at 19:00 is not evening, one ending 19:30 is).
pub const EVENING_END_HOUR: u8 = 19;

/// Hour before which a starting or ending shift counts as early-morning.
pub const EARLY_START_HOUR: u8 = 7;

/// Returns true if the booked window incurs the night surcharge.
///
/// # Examples
///
/// ```
/// use booking_engine::calculation::is_evening_booking;
/// use booking_engine::models::TimeSlot;
///
/// let slot = |h, m| TimeSlot::new(h, m).unwrap();
///
/// assert!(!is_evening_booking(slot(10, 0), slot(14, 0)));
/// assert!(!is_evening_booking(slot(9, 0), slot(19, 0)));
/// assert!(is_evening_booking(slot(9, 0), slot(19, 30)));
/// // Overnight window ending at 01:00 touches the night on the end edge
/// assert!(is_evening_booking(slot(18, 0), slot(1, 0)));
/// ```
pub fn is_evening_booking(start: TimeSlot, end: TimeSlot) -> bool {
    end.hour() > EVENING_END_HOUR
        || (end.hour() == EVENING_END_HOUR && end.minute() > 0)
        || end.hour() < EARLY_START_HOUR
        || start.hour() < EARLY_START_HOUR
}

/// Returns true if a worked shift incurs the night surcharge.
///
/// Same predicate as [`is_evening_booking`], applied to the real
/// clock-in/clock-out timestamps instead of the quoted slots. Actual pay
/// recomputes this from what happened, not from what was booked.
pub fn is_evening_shift(clock_in: NaiveDateTime, clock_out: NaiveDateTime) -> bool {
    let start_hour = clock_in.hour() as u8;
    let end_hour = clock_out.hour() as u8;

    end_hour > EVENING_END_HOUR
        || (end_hour == EVENING_END_HOUR && clock_out.minute() > 0)
        || end_hour < EARLY_START_HOUR
        || start_hour < EARLY_START_HOUR
}

/// Calculates the total night surcharge across a booking's days.
///
/// Returns `fee_per_day × day_count` when the window is evening, zero
/// otherwise.
pub fn total_night_surcharge(is_evening: bool, day_count: u32, fee_per_day: Decimal) -> Decimal {
    if is_evening {
        fee_per_day * Decimal::from(day_count)
    } else {
        Decimal::ZERO
    }
}
