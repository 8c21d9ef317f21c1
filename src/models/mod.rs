//! Core data models for the Shift Time & Pay Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod booking;
mod quote;
mod shift_record;
mod time_slot;

pub use booking::{BookingSnapshot, BookingSnapshotMap, BookingStatus, BookingWindow};
pub use quote::{PayBreakdown, PricedQuote, QuoteExtension};
pub use shift_record::ShiftRecord;
pub use time_slot::TimeSlot;
