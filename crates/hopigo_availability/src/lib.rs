// --- File: crates/hopigo_availability/src/lib.rs ---
// Declare modules within this crate
pub mod doc;
pub mod handlers;
pub mod routes;
pub mod schedule;
#[cfg(test)]
mod schedule_proptest;
#[cfg(test)]
mod schedule_test;
pub mod store;

pub use schedule::{generate_day_slots, ProviderSchedule, ScheduleError};
pub use store::InMemoryAvailability;
