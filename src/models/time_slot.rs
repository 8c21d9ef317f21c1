//! Half-hour time slot model with business-day ordering.
//!
//! Bookings pick times on a 24-hour grid of half-hour slots. The business
//! day starts at 06:00 and wraps through midnight back to 05:30, so an
//! overnight shift's end time still sorts "after" its start time.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Hour at which the business day starts (06:00 sorts first, 05:30 last).
const BUSINESS_DAY_START_HOUR: u8 = 6;

/// A point on the half-hour booking grid.
///
/// Immutable value type: `hour` is in `0..=23` and `minute` is `0` or `30`,
/// enforced at construction. Ordering is the business-day ordering, never
/// the raw 24-hour ordering — shifts commonly start in the afternoon and
/// end after midnight.
///
/// # Examples
///
/// ```
/// use booking_engine::models::TimeSlot;
///
/// let start = TimeSlot::new(18, 0).unwrap();
/// let end = TimeSlot::new(1, 0).unwrap();
/// // 01:00 sorts after 18:00 on the business-day axis
/// assert!(end > start);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeSlot {
    hour: u8,
    minute: u8,
}

impl TimeSlot {
    /// Creates a time slot, validating the half-hour / 24-hour domain.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTimeSlot`] if `hour` is not in `0..=23`
    /// or `minute` is not `0` or `30`.
    pub fn new(hour: u8, minute: u8) -> EngineResult<Self> {
        if hour > 23 {
            return Err(EngineError::InvalidTimeSlot {
                value: format!("{}:{:02}", hour, minute),
                message: "hour must be between 0 and 23".to_string(),
            });
        }
        if minute != 0 && minute != 30 {
            return Err(EngineError::InvalidTimeSlot {
                value: format!("{}:{:02}", hour, minute),
                message: "minute must be 0 or 30".to_string(),
            });
        }
        Ok(Self { hour, minute })
    }

    /// Parses a time string into a slot.
    ///
    /// Accepts the canonical `"H:MM"` / `"HH:MM"` form as well as the legacy
    /// `"18h00"` / `"18h"` form seen at the product's boundaries. Parsing
    /// happens once here; the rest of the engine only ever sees the value
    /// type.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTimeSlot`] for malformed strings and
    /// for values outside the half-hour / 24-hour domain.
    ///
    /// # Examples
    ///
    /// ```
    /// use booking_engine::models::TimeSlot;
    ///
    /// assert_eq!(TimeSlot::parse("9:30").unwrap(), TimeSlot::new(9, 30).unwrap());
    /// assert_eq!(TimeSlot::parse("18h00").unwrap(), TimeSlot::new(18, 0).unwrap());
    /// assert_eq!(TimeSlot::parse("18h").unwrap(), TimeSlot::new(18, 0).unwrap());
    /// assert!(TimeSlot::parse("9:15").is_err());
    /// ```
    pub fn parse(value: &str) -> EngineResult<Self> {
        let trimmed = value.trim();
        let invalid = |message: &str| EngineError::InvalidTimeSlot {
            value: value.to_string(),
            message: message.to_string(),
        };

        let (hour_part, minute_part) = match trimmed.split_once([':', 'h', 'H']) {
            Some((h, m)) => (h, m),
            None => return Err(invalid("expected 'H:MM' or 'HhMM'")),
        };

        let hour: u8 = hour_part
            .parse()
            .map_err(|_| invalid("hour is not a number"))?;
        let minute: u8 = if minute_part.is_empty() {
            0
        } else {
            minute_part
                .parse()
                .map_err(|_| invalid("minute is not a number"))?
        };

        Self::new(hour, minute)
    }

    /// Returns the hour component (`0..=23`).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute component (`0` or `30`).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Maps the slot to its position in the business-day ordering.
    ///
    /// 06:00 maps to 0 and 05:30 maps to 47, the last of the 48 half-hour
    /// slots. Slots are only ever compared through this key.
    ///
    /// # Examples
    ///
    /// ```
    /// use booking_engine::models::TimeSlot;
    ///
    /// assert_eq!(TimeSlot::new(6, 0).unwrap().business_order_key(), 0);
    /// assert_eq!(TimeSlot::new(5, 30).unwrap().business_order_key(), 47);
    /// ```
    pub fn business_order_key(&self) -> u8 {
        let hour_key = (self.hour + 24 - BUSINESS_DAY_START_HOUR) % 24;
        hour_key * 2 + self.minute / 30
    }

    /// Returns the slot as a decimal hour on the raw 24-hour clock
    /// (e.g., 09:30 is `9.5`).
    pub fn decimal_hour(&self) -> Decimal {
        Decimal::from(self.hour) + Decimal::from(self.minute) / Decimal::from(60)
    }
}

impl Ord for TimeSlot {
    fn cmp(&self, other: &Self) -> Ordering {
        self.business_order_key().cmp(&other.business_order_key())
    }
}

impl PartialOrd for TimeSlot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeSlot {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(de::Error::custom)
    }
}
