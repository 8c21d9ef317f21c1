//! Shift Time & Pay Engine for a childcare booking platform.
//!
//! This crate provides the deterministic calculations behind the booking
//! flows: business-day time slots, billable duration, night surcharges,
//! planned quotes, actual-pay reconciliation from clock events, and the
//! booking snapshot differ that drives live admin notifications.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod notify;
