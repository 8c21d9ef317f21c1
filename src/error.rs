//! Error types for the Shift Time & Pay Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during time, price, and pay
//! calculations.

use thiserror::Error;

/// The main error type for the Shift Time & Pay Engine.
///
/// The engine is pure and total over its documented domain, so the taxonomy
/// is narrow: precondition violations (inputs outside the documented domain)
/// and configuration problems. There are no retry semantics — every
/// calculation is deterministic given the same inputs.
///
/// # Example
///
/// ```
/// use booking_engine::error::EngineError;
///
/// let error = EngineError::InvalidTimeSlot {
///     value: "25:00".to_string(),
///     message: "hour must be between 0 and 23".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid time slot '25:00': hour must be between 0 and 23"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A time slot was outside the half-hour / 24-hour domain, or a time
    /// string could not be parsed into a slot.
    #[error("Invalid time slot '{value}': {message}")]
    InvalidTimeSlot {
        /// The offending input, as received at the boundary.
        value: String,
        /// A description of what made the slot invalid.
        message: String,
    },

    /// A booking window contained inconsistent data (e.g., an end date
    /// before the start date).
    #[error("Invalid booking window: {message}")]
    InvalidWindow {
        /// A description of what made the window invalid.
        message: String,
    },

    /// A shift record was reconciled before both clock events were set.
    ///
    /// Callers must filter for terminal records first; the engine refuses
    /// rather than substituting zero or "now".
    #[error("Shift for booking {booking_id} is missing {missing}; cannot reconcile")]
    IncompleteShift {
        /// The booking the shift belongs to.
        booking_id: u64,
        /// Which clock event was missing ("clock-in" or "clock-out").
        missing: String,
    },

    /// A shift record's clock-out was not after its clock-in.
    #[error("Shift for booking {booking_id} has clock-out at or before clock-in")]
    InvalidClockRange {
        /// The booking the shift belongs to.
        booking_id: u64,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
