//! Priced quote and pay breakdown models.
//!
//! A [`PricedQuote`] is computed from the selected slots before the shift
//! happens; a [`PayBreakdown`] is computed from real clock events after it
//! happens. The two numbers are allowed to diverge (a shift that ran long,
//! for example) and are never derived from each other.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The planned price for a booking window, quoted before work happens.
///
/// Invariants: `total = base_price + night_surcharge`, and
/// `base_price = round(hourly_rate × hours × day_count)` with rounding
/// applied once on the aggregate, never per day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedQuote {
    /// Billable hours per day-unit of the window.
    pub hours: Decimal,
    /// The number of calendar days the window covers.
    pub day_count: u32,
    /// `round(hourly_rate × hours × day_count)`.
    pub base_price: Decimal,
    /// The night surcharge across all days, zero for daytime windows.
    pub night_surcharge: Decimal,
    /// `base_price + night_surcharge`.
    pub total: Decimal,
}

/// A quote recomputed after the end slot of an existing booking moved,
/// with the deltas against the original quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteExtension {
    /// The fresh quote for the extended window.
    pub quote: PricedQuote,
    /// `new hours − old hours` per day-unit.
    pub additional_hours: Decimal,
    /// `new total − old total`.
    pub additional_cost: Decimal,
}

/// Actual pay for one terminal shift, derived only from clock events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// Real elapsed wall-clock hours between clock-in and clock-out.
    pub hours_worked: Decimal,
    /// `hourly_rate × hours_worked`, single shift only.
    pub base_pay: Decimal,
    /// The per-shift night surcharge, zero for daytime shifts.
    pub night_surcharge: Decimal,
    /// `base_pay + night_surcharge`.
    pub total: Decimal,
}
