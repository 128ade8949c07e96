// --- File: crates/hopigo_availability/src/handlers.rs ---
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use hopigo_common::models::{AvailabilitySlot, BookingRecord};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use crate::store::{AvailabilityStoreError, InMemoryAvailability};

// Define shared state needed by availability handlers
#[derive(Clone)]
pub struct AvailabilityState {
    pub store: Arc<InMemoryAvailability>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct AvailabilityQuery {
    /// Provider whose slots are requested
    #[cfg_attr(feature = "openapi", schema(example = "p1"))]
    pub provider_id: String,

    /// Date in YYYY-MM-DD format
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-06-10"))]
    pub date: String,
}

#[derive(Serialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SlotDto {
    #[cfg_attr(feature = "openapi", schema(example = "2025-06-10T13:00:00Z"))]
    pub start_time: String, // ISO 8601 format
    #[cfg_attr(feature = "openapi", schema(example = "2025-06-10T14:00:00Z"))]
    pub end_time: String, // ISO 8601 format
    pub available: bool,
}

impl From<AvailabilitySlot> for SlotDto {
    fn from(slot: AvailabilitySlot) -> Self {
        Self {
            start_time: slot.start_time.to_rfc3339(),
            end_time: slot.end_time.to_rfc3339(),
            available: slot.available,
        }
    }
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AvailabilityResponse {
    pub slots: Vec<SlotDto>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookSlotRequest {
    pub provider_id: String,
    pub start_time: String, // ISO 8601 format string
    pub end_time: String,   // ISO 8601 format string
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookingResponse {
    pub success: bool,
    pub booking_id: Option<String>,
    pub message: String,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct BookingsQuery {
    pub provider_id: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookingDto {
    pub provider_id: String,
    pub status: String,
    pub date: String, // YYYY-MM-DD
}

impl From<BookingRecord> for BookingDto {
    fn from(record: BookingRecord) -> Self {
        let status = serde_json::to_value(record.status)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_else(|| "pending".to_string());
        Self {
            provider_id: record.provider_id,
            status,
            date: record.date.format("%Y-%m-%d").to_string(),
        }
    }
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookingsResponse {
    pub bookings: Vec<BookingDto>,
}

/// Handler to get a provider's slot candidates for one date.
#[axum::debug_handler]
pub async fn get_availability_handler(
    State(state): State<Arc<AvailabilityState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, (StatusCode, String)> {
    let date = NaiveDate::parse_from_str(&query.date, "%Y-%m-%d").map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            "Invalid date format (YYYY-MM-DD)".to_string(),
        )
    })?;

    let slots = state.store.day_slots(&query.provider_id, date).map_err(|e| {
        warn!("Failed to compute slots: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to compute availability".to_string(),
        )
    })?;

    info!(
        "Availability for provider {} on {}: {} slots",
        query.provider_id,
        date,
        slots.len()
    );

    Ok(Json(AvailabilityResponse {
        slots: slots.into_iter().map(SlotDto::from).collect(),
    }))
}

/// Handler to book a slot for a provider.
#[axum::debug_handler]
pub async fn book_slot_handler(
    State(state): State<Arc<AvailabilityState>>,
    Json(payload): Json<BookSlotRequest>,
) -> Result<Json<BookingResponse>, (StatusCode, String)> {
    let start = parse_rfc3339(&payload.start_time)?;
    let end = parse_rfc3339(&payload.end_time)?;

    match state.store.book(&payload.provider_id, start, end) {
        Ok(booking_id) => Ok(Json(BookingResponse {
            success: true,
            booking_id: Some(booking_id),
            message: "Appointment booked successfully.".to_string(),
        })),
        Err(AvailabilityStoreError::Conflict) => Err((
            StatusCode::CONFLICT,
            "Requested time slot is no longer available.".to_string(),
        )),
        Err(AvailabilityStoreError::InvalidRange) => Err((
            StatusCode::BAD_REQUEST,
            "end_time must be after start_time".to_string(),
        )),
        Err(e) => {
            warn!("Booking failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to book appointment.".to_string(),
            ))
        }
    }
}

/// Handler to list a provider's booking records (for marked dates).
#[axum::debug_handler]
pub async fn get_bookings_handler(
    State(state): State<Arc<AvailabilityState>>,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<BookingsResponse>, (StatusCode, String)> {
    let records = state.store.bookings(&query.provider_id).map_err(|e| {
        warn!("Failed to list bookings: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to list bookings".to_string(),
        )
    })?;

    Ok(Json(BookingsResponse {
        bookings: records.into_iter().map(BookingDto::from).collect(),
    }))
}

fn parse_rfc3339(value: &str) -> Result<DateTime<Utc>, (StatusCode, String)> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            (
                StatusCode::BAD_REQUEST,
                format!("Invalid RFC 3339 timestamp: {}", value),
            )
        })
}
