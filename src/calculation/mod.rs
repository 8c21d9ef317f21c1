//! Calculation logic for the Shift Time & Pay Engine.
//!
//! This module contains the pure calculation functions: billable duration
//! between slots, the night surcharge predicate and fee, planned price
//! quoting (initial booking, extend, rebook), and actual-pay reconciliation
//! from clock events. All functions are deterministic over immutable inputs
//! and safe to call concurrently.

mod duration;
mod night_surcharge;
mod planned_price;
mod reconcile;

pub use duration::hours_between;
pub use night_surcharge::{
    EARLY_START_HOUR, EVENING_END_HOUR, is_evening_booking, is_evening_shift,
    total_night_surcharge,
};
pub use planned_price::{extend_quote, quote};
pub use reconcile::{reconcile, sum_breakdowns};
