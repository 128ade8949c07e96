// File: crates/hopigo_availability/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::handlers::{
    AvailabilityQuery, AvailabilityResponse, BookSlotRequest, BookingDto, BookingResponse,
    BookingsQuery, BookingsResponse, SlotDto,
};

#[utoipa::path(
    get,
    path = "/availability",
    params(
        ("provider_id" = String, Query, description = "Provider whose slots are requested", example = "p1"),
        ("date" = String, Query, description = "Date in YYYY-MM-DD format", example = "2025-06-10", format = "date")
    ),
    responses(
        (status = 200, description = "Slot candidates for the date", body = AvailabilityResponse),
        (status = 400, description = "Invalid date format", body = String),
        (status = 500, description = "Internal error", body = String)
    )
)]
fn doc_get_availability_handler() {}

#[utoipa::path(
    post,
    path = "/book",
    request_body(content = BookSlotRequest, example = json!({
        "provider_id": "p1",
        "start_time": "2025-06-10T13:00:00Z",
        "end_time": "2025-06-10T14:00:00Z"
    })),
    responses(
        (status = 200, description = "Booking result", body = BookingResponse,
         example = json!({
             "success": true,
             "booking_id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
             "message": "Appointment booked successfully."
         })
        ),
        (status = 409, description = "Slot already booked", body = String),
        (status = 500, description = "Booking failed", body = String)
    )
)]
fn doc_book_slot_handler() {}

#[utoipa::path(
    get,
    path = "/bookings",
    params(
        ("provider_id" = String, Query, description = "Provider whose bookings are listed", example = "p1")
    ),
    responses(
        (status = 200, description = "Booking records for the provider", body = BookingsResponse,
         example = json!({
             "bookings": [
                 { "provider_id": "p1", "status": "accepted", "date": "2025-06-10" }
             ]
         })
        ),
        (status = 500, description = "Failed to list bookings", body = String)
    )
)]
fn doc_get_bookings_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_get_availability_handler,
        doc_book_slot_handler,
        doc_get_bookings_handler
    ),
    components(
        schemas(
            AvailabilityQuery,
            AvailabilityResponse,
            SlotDto,
            BookSlotRequest,
            BookingResponse,
            BookingsQuery,
            BookingDto,
            BookingsResponse
        )
    ),
    tags(
        (name = "availability", description = "HopiGo availability and booking API")
    ),
    servers(
        (url = "/api", description = "Main API prefix")
    )
)]
pub struct AvailabilityApiDoc;
