//! Shift pay reconciliation: actual pay from real clock events.
//!
//! Reconciliation is deliberately independent of the planned quote. Two
//! shifts with identical clock-in/clock-out produce identical breakdowns
//! no matter what was originally booked, and the actual total may diverge
//! from the quoted one (a shift that ran long, for example).

use rust_decimal::Decimal;

use crate::config::PricingConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{PayBreakdown, ShiftRecord};

use super::night_surcharge::is_evening_shift;

/// Reconciles one terminal shift record into actual pay.
///
/// `hours_worked` is real elapsed wall-clock time between the two clock
/// events; the evening predicate is recomputed from those same timestamps.
/// The night surcharge is the caregiver-facing per-shift fee — single shift
/// only, multi-day work is the sum of multiple terminal records.
///
/// # Errors
///
/// Returns [`EngineError::IncompleteShift`] if either clock event is unset
/// (callers must filter for terminal records first; the engine refuses
/// rather than substituting "now"), and [`EngineError::InvalidClockRange`]
/// if clock-out is not after clock-in.
///
/// # Examples
///
/// ```
/// use booking_engine::calculation::reconcile;
/// use booking_engine::config::PricingConfig;
/// use booking_engine::models::ShiftRecord;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let record = ShiftRecord {
///     booking_id: 7,
///     clock_in: Some("2026-03-02T09:00:00".parse::<NaiveDateTime>().unwrap()),
///     clock_out: Some("2026-03-02T13:30:00".parse::<NaiveDateTime>().unwrap()),
/// };
///
/// let pay = reconcile(&record, Decimal::from(50), &PricingConfig::default()).unwrap();
/// assert_eq!(pay.hours_worked, Decimal::new(45, 1)); // 4.5
/// assert_eq!(pay.base_pay, Decimal::from(225));
/// ```
pub fn reconcile(
    record: &ShiftRecord,
    hourly_rate: Decimal,
    config: &PricingConfig,
) -> EngineResult<PayBreakdown> {
    let clock_in = record.clock_in.ok_or_else(|| EngineError::IncompleteShift {
        booking_id: record.booking_id,
        missing: "clock-in".to_string(),
    })?;
    let clock_out = record
        .clock_out
        .ok_or_else(|| EngineError::IncompleteShift {
            booking_id: record.booking_id,
            missing: "clock-out".to_string(),
        })?;

    if clock_out <= clock_in {
        return Err(EngineError::InvalidClockRange {
            booking_id: record.booking_id,
        });
    }

    let worked_minutes = (clock_out - clock_in).num_minutes();
    let hours_worked = Decimal::from(worked_minutes) / Decimal::from(60);

    let base_pay = hourly_rate * hours_worked;
    let night_surcharge = if is_evening_shift(clock_in, clock_out) {
        config.caregiver_night_surcharge().fee_per_shift
    } else {
        Decimal::ZERO
    };

    Ok(PayBreakdown {
        hours_worked,
        base_pay,
        night_surcharge,
        total: base_pay + night_surcharge,
    })
}

/// Sums reconciled breakdowns into one aggregate.
///
/// This is the reduce behind the "nanny hours report": callers group
/// terminal records by caregiver, reconcile each, and sum the results.
pub fn sum_breakdowns<'a, I>(breakdowns: I) -> PayBreakdown
where
    I: IntoIterator<Item = &'a PayBreakdown>,
{
    breakdowns.into_iter().fold(
        PayBreakdown {
            hours_worked: Decimal::ZERO,
            base_pay: Decimal::ZERO,
            night_surcharge: Decimal::ZERO,
            total: Decimal::ZERO,
        },
        |acc, b| PayBreakdown {
            hours_worked: acc.hours_worked + b.hours_worked,
            base_pay: acc.base_pay + b.base_pay,
            night_surcharge: acc.night_surcharge + b.night_surcharge,
            total: acc.total + b.total,
        },
    )
}
