//! HTTP API module for the Shift Time & Pay Engine.
//!
//! This module provides the REST endpoints for quoting bookings and
//! reconciling worked shifts. Transport stays thin: every business rule
//! lives in [`crate::calculation`].

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ExtendRequest, QuoteRequest, ReconcileRequest};
pub use response::ApiError;
pub use state::AppState;
