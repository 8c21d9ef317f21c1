//! Live admin notification support.
//!
//! The polling loop, its cadence, and the display caps live in the calling
//! application; this module only provides the pure snapshot differ they
//! are built on.

mod differ;

pub use differ::{BookingEvent, BookingEventKind, diff};
