//! HTTP request handlers for the Shift Time & Pay Engine API.
//!
//! This module contains the handler functions for all API endpoints. The
//! handlers are thin adapters: they parse the boundary representation
//! (time strings, ISO dates), call the pure calculation functions, and
//! map engine errors onto HTTP error responses.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{extend_quote, quote, reconcile};
use crate::models::ShiftRecord;

use super::request::{ExtendRequest, QuoteRequest, ReconcileRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/quote", post(quote_handler))
        .route("/extend", post(extend_handler))
        .route("/reconcile", post(reconcile_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection onto an API error body.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for the POST /quote endpoint.
///
/// Quotes the planned price for a booking window.
async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_error(correlation_id, rejection);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let window = match request.window() {
        Ok(window) => window,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid quote input");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let quoted = quote(&window, request.hourly_rate, state.pricing());
    info!(
        correlation_id = %correlation_id,
        total = %quoted.total,
        "Quote calculated"
    );

    (StatusCode::OK, Json(quoted)).into_response()
}

/// Handler for the POST /extend endpoint.
///
/// Re-quotes a booking whose end time moved and reports the deltas.
async fn extend_handler(
    State(state): State<AppState>,
    payload: Result<Json<ExtendRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing extend request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_error(correlation_id, rejection);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let inputs = request
        .original
        .window()
        .and_then(|window| request.new_end_slot().map(|slot| (window, slot)));
    let (window, new_end_slot) = match inputs {
        Ok(parsed) => parsed,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid extend input");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let extension = extend_quote(
        &window,
        new_end_slot,
        request.original.hourly_rate,
        state.pricing(),
    );
    info!(
        correlation_id = %correlation_id,
        additional_cost = %extension.additional_cost,
        "Extension quoted"
    );

    (StatusCode::OK, Json(extension)).into_response()
}

/// Handler for the POST /reconcile endpoint.
///
/// Computes actual pay for one terminal shift from its clock events.
async fn reconcile_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReconcileRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing reconcile request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_error(correlation_id, rejection);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let record: ShiftRecord = (&request).into();
    match reconcile(&record, request.hourly_rate, state.pricing()) {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                booking_id = record.booking_id,
                total = %breakdown.total,
                "Shift reconciled"
            );
            (StatusCode::OK, Json(breakdown)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Reconciliation refused");
            ApiErrorResponse::from(err).into_response()
        }
    }
}
