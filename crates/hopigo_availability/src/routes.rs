// --- File: crates/hopigo_availability/src/routes.rs ---

use crate::handlers::{
    book_slot_handler, get_availability_handler, get_bookings_handler, AvailabilityState,
};
use crate::schedule::{ProviderSchedule, ScheduleError};
use crate::store::InMemoryAvailability;
use axum::{
    routing::{get, post},
    Router,
};
use hopigo_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing all routes for the availability feature.
///
/// The in-memory store is built here from the configured provider schedule
/// (or schedule defaults when the section is absent).
pub fn routes(config: Arc<AppConfig>) -> Result<Router, ScheduleError> {
    let schedule = match config.schedule.as_ref() {
        Some(schedule_config) => ProviderSchedule::from_config(schedule_config)?,
        None => ProviderSchedule::default(),
    };
    let state = Arc::new(AvailabilityState {
        store: Arc::new(InMemoryAvailability::new(schedule)),
    });

    Ok(Router::new()
        .route("/availability", get(get_availability_handler))
        .route("/bookings", get(get_bookings_handler))
        .route("/book", post(book_slot_handler))
        .with_state(state))
}
