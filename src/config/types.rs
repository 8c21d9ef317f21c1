//! Configuration types for the pricing rules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML pricing file.

use rust_decimal::Decimal;
use serde::Deserialize;

/// The parent-facing night surcharge rule.
///
/// Charged per booked day, denominated in the parent-facing currency.
#[derive(Debug, Clone, Deserialize)]
pub struct ParentNightSurcharge {
    /// The currency the fee is denominated in (e.g., "EUR").
    pub currency: String,
    /// The fixed fee charged per booked day of an evening booking.
    pub fee_per_day: Decimal,
}

/// The caregiver-facing night surcharge rule.
///
/// Paid per worked shift, denominated in the caregiver-facing currency.
/// This is deliberately a separate rule from [`ParentNightSurcharge`]:
/// the two flows use different currencies and units for conceptually the
/// same surcharge, and the engine keeps them independently configurable
/// rather than assuming they must be equal.
#[derive(Debug, Clone, Deserialize)]
pub struct CaregiverNightSurcharge {
    /// The currency the fee is denominated in (e.g., "MAD").
    pub currency: String,
    /// The fixed fee paid per evening shift worked.
    pub fee_per_shift: Decimal,
}

/// The complete pricing configuration loaded from YAML.
///
/// # Example
///
/// ```
/// use booking_engine::config::PricingConfig;
///
/// let config = PricingConfig::default();
/// assert_eq!(config.parent_night_surcharge().fee_per_day.to_string(), "10");
/// assert_eq!(config.caregiver_night_surcharge().fee_per_shift.to_string(), "100");
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    parent_night_surcharge: ParentNightSurcharge,
    caregiver_night_surcharge: CaregiverNightSurcharge,
}

impl PricingConfig {
    /// Creates a pricing configuration from its component rules.
    pub fn new(
        parent_night_surcharge: ParentNightSurcharge,
        caregiver_night_surcharge: CaregiverNightSurcharge,
    ) -> Self {
        Self {
            parent_night_surcharge,
            caregiver_night_surcharge,
        }
    }

    /// Returns the parent-facing night surcharge rule.
    pub fn parent_night_surcharge(&self) -> &ParentNightSurcharge {
        &self.parent_night_surcharge
    }

    /// Returns the caregiver-facing night surcharge rule.
    pub fn caregiver_night_surcharge(&self) -> &CaregiverNightSurcharge {
        &self.caregiver_night_surcharge
    }
}

impl Default for PricingConfig {
    /// The fee constants observed in production: EUR 10 per booked day on
    /// the parent side, MAD 100 per worked shift on the caregiver side.
    fn default() -> Self {
        Self {
            parent_night_surcharge: ParentNightSurcharge {
                currency: "EUR".to_string(),
                fee_per_day: Decimal::from(10),
            },
            caregiver_night_surcharge: CaregiverNightSurcharge {
                currency: "MAD".to_string(),
                fee_per_shift: Decimal::from(100),
            },
        }
    }
}
