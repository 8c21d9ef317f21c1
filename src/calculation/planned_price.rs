//! Planned price calculation: the quote shown before work happens.
//!
//! The same pure function backs the initial booking, the "extend" flow
//! (only the end slot moves), and the "rebook" flow (fresh window); all
//! three must quote identically for the same inputs.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::PricingConfig;
use crate::models::{BookingWindow, PricedQuote, QuoteExtension, TimeSlot};

use super::duration::hours_between;
use super::night_surcharge::{is_evening_booking, total_night_surcharge};

/// Quotes the planned price for a booking window.
///
/// `base_price = round(hourly_rate × hours × day_count)`, rounded once on
/// the aggregate — never per day and never on intermediate hours, so the
/// `total = base_price + night_surcharge` invariant stays exact. Hours are
/// computed once per day-unit, not re-derived per day.
///
/// # Examples
///
/// ```
/// use booking_engine::calculation::quote;
/// use booking_engine::config::PricingConfig;
/// use booking_engine::models::{BookingWindow, TimeSlot};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let window = BookingWindow::new(
///     TimeSlot::new(10, 0).unwrap(),
///     TimeSlot::new(14, 0).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     None,
/// ).unwrap();
///
/// let quote = quote(&window, Decimal::from(10), &PricingConfig::default());
/// assert_eq!(quote.hours, Decimal::from(4));
/// assert_eq!(quote.total, Decimal::from(40));
/// ```
pub fn quote(window: &BookingWindow, hourly_rate: Decimal, config: &PricingConfig) -> PricedQuote {
    let hours = hours_between(window.start_slot, window.end_slot);
    let day_count = window.day_count();

    let base_price = (hourly_rate * hours * Decimal::from(day_count))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    let is_evening = is_evening_booking(window.start_slot, window.end_slot);
    let night_surcharge = total_night_surcharge(
        is_evening,
        day_count,
        config.parent_night_surcharge().fee_per_day,
    );

    let total = base_price + night_surcharge;

    PricedQuote {
        hours,
        day_count,
        base_price,
        night_surcharge,
        total,
    }
}

/// Re-quotes a booking whose end slot moved, with the deltas against the
/// original quote.
///
/// Both quotes are derived from scratch through [`quote`];
/// `additional_hours = new hours − old hours` and
/// `additional_cost = new total − old total`.
pub fn extend_quote(
    window: &BookingWindow,
    new_end_slot: TimeSlot,
    hourly_rate: Decimal,
    config: &PricingConfig,
) -> QuoteExtension {
    let original = quote(window, hourly_rate, config);

    let extended_window = BookingWindow {
        end_slot: new_end_slot,
        ..*window
    };
    let extended = quote(&extended_window, hourly_rate, config);

    QuoteExtension {
        additional_hours: extended.hours - original.hours,
        additional_cost: extended.total - original.total,
        quote: extended,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn slot(hour: u8, minute: u8) -> TimeSlot {
        TimeSlot::new(hour, minute).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn window(start: TimeSlot, end: TimeSlot, days: Option<(&str, &str)>) -> BookingWindow {
        match days {
            Some((from, to)) => {
                BookingWindow::new(start, end, date(from), Some(date(to))).unwrap()
            }
            None => BookingWindow::new(start, end, date("2026-03-02"), None).unwrap(),
        }
    }

    #[test]
    fn test_daytime_single_day_quote() {
        let quoted = quote(
            &window(slot(10, 0), slot(14, 0), None),
            dec("10"),
            &PricingConfig::default(),
        );

        assert_eq!(quoted.hours, dec("4"));
        assert_eq!(quoted.day_count, 1);
        assert_eq!(quoted.base_price, dec("40"));
        assert_eq!(quoted.night_surcharge, dec("0"));
        assert_eq!(quoted.total, dec("40"));
    }

    #[test]
    fn test_overnight_quote_includes_surcharge() {
        let quoted = quote(
            &window(slot(18, 0), slot(1, 0), None),
            dec("10"),
            &PricingConfig::default(),
        );

        assert_eq!(quoted.hours, dec("7"));
        assert_eq!(quoted.night_surcharge, dec("10"));
        assert_eq!(quoted.total, dec("80"));
    }

    #[test]
    fn test_two_day_quote_multiplies_hours_once() {
        let quoted = quote(
            &window(slot(9, 0), slot(17, 0), Some(("2026-03-02", "2026-03-03"))),
            dec("10"),
            &PricingConfig::default(),
        );

        assert_eq!(quoted.day_count, 2);
        assert_eq!(quoted.hours, dec("8"));
        assert_eq!(quoted.base_price, dec("160"));
        assert_eq!(quoted.total, dec("160"));
    }

    #[test]
    fn test_surcharge_scales_with_day_count() {
        let quoted = quote(
            &window(slot(18, 0), slot(22, 0), Some(("2026-03-02", "2026-03-04"))),
            dec("10"),
            &PricingConfig::default(),
        );

        assert_eq!(quoted.day_count, 3);
        assert_eq!(quoted.night_surcharge, dec("30"));
        assert_eq!(quoted.total, quoted.base_price + quoted.night_surcharge);
    }

    #[test]
    fn test_rounding_happens_once_on_the_aggregate() {
        // 2.5h x 3 days x 10.07/h = 75.525 -> rounds to 76 once.
        // Per-day rounding would give round(25.175) x 3 = 75.
        let quoted = quote(
            &window(slot(9, 0), slot(11, 30), Some(("2026-03-02", "2026-03-04"))),
            dec("10.07"),
            &PricingConfig::default(),
        );

        assert_eq!(quoted.base_price, dec("76"));
    }

    #[test]
    fn test_total_invariant_holds() {
        let config = PricingConfig::default();
        let cases = [
            window(slot(10, 0), slot(14, 0), None),
            window(slot(18, 0), slot(1, 0), None),
            window(slot(6, 30), slot(6, 30), None),
            window(slot(9, 0), slot(17, 0), Some(("2026-03-02", "2026-03-08"))),
        ];

        for case in &cases {
            let quoted = quote(case, dec("12.34"), &config);
            assert_eq!(quoted.total, quoted.base_price + quoted.night_surcharge);
        }
    }

    #[test]
    fn test_extend_reports_hour_and_cost_deltas() {
        let original = window(slot(10, 0), slot(14, 0), None);
        let extension = extend_quote(&original, slot(16, 0), dec("10"), &PricingConfig::default());

        assert_eq!(extension.additional_hours, dec("2"));
        assert_eq!(extension.additional_cost, dec("20"));
        assert_eq!(extension.quote.hours, dec("6"));
        assert_eq!(extension.quote.total, dec("60"));
    }

    #[test]
    fn test_extend_into_the_evening_adds_the_surcharge() {
        let original = window(slot(14, 0), slot(18, 0), None);
        let extension = extend_quote(&original, slot(20, 0), dec("10"), &PricingConfig::default());

        assert_eq!(extension.additional_hours, dec("2"));
        // 2 extra hours plus the night fee the original quote did not carry
        assert_eq!(extension.additional_cost, dec("30"));
    }

    #[test]
    fn test_rebook_is_just_a_fresh_quote() {
        let config = PricingConfig::default();
        let first = quote(&window(slot(10, 0), slot(14, 0), None), dec("10"), &config);
        let rebooked = quote(
            &window(slot(10, 0), slot(14, 0), Some(("2026-04-06", "2026-04-06"))),
            dec("10"),
            &config,
        );

        // Same slots and rate quote identically regardless of the date
        assert_eq!(first.hours, rebooked.hours);
        assert_eq!(first.total, rebooked.total);
    }
}
