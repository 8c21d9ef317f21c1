//! Billable duration calculation between two time slots.

use rust_decimal::Decimal;

use crate::models::TimeSlot;

/// Calculates the billable hours between a start and an end slot.
///
/// When the end slot is later than the start slot on the raw 24-hour
/// clock, the duration is the direct difference of their decimal hours.
/// Otherwise the window crosses midnight and the duration wraps:
/// `(24 − start) + end`.
///
/// `start == end` is defined as a full 24-hour wrap, not zero: a shift
/// that starts and ends at the same wall-clock time uses every slot of
/// the day. Naive subtraction would yield 0, which is the wrong answer
/// for this product.
///
/// # Examples
///
/// ```
/// use booking_engine::calculation::hours_between;
/// use booking_engine::models::TimeSlot;
/// use rust_decimal::Decimal;
///
/// let ten = TimeSlot::new(10, 0).unwrap();
/// let two_pm = TimeSlot::new(14, 0).unwrap();
/// assert_eq!(hours_between(ten, two_pm), Decimal::from(4));
///
/// // Overnight: 18:00 to 01:00 is 7 hours
/// let six_pm = TimeSlot::new(18, 0).unwrap();
/// let one_am = TimeSlot::new(1, 0).unwrap();
/// assert_eq!(hours_between(six_pm, one_am), Decimal::from(7));
///
/// // Same slot: full 24-hour wrap
/// assert_eq!(hours_between(ten, ten), Decimal::from(24));
/// ```
pub fn hours_between(start: TimeSlot, end: TimeSlot) -> Decimal {
    let start_hour = start.decimal_hour();
    let end_hour = end.decimal_hour();

    if end_hour > start_hour {
        end_hour - start_hour
    } else {
        // Crosses midnight (or wraps the full day when start == end)
        (Decimal::from(24) - start_hour) + end_hour
    }
}
