//! Pricing configuration for the Shift Time & Pay Engine.
//!
//! The two night-surcharge constants live here rather than in code: the
//! parent-facing and caregiver-facing flows charge conceptually the same
//! surcharge in different currencies and units, and the two rules stay
//! independently configurable.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CaregiverNightSurcharge, ParentNightSurcharge, PricingConfig};
