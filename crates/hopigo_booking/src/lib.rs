// --- File: crates/hopigo_booking/src/lib.rs ---
//! Client-side booking flow: the selection state machine, the HTTP
//! availability adapter and the calendar orchestrator that drives them.

pub mod adapter;
pub mod orchestrator;
pub mod selection;

pub use adapter::{AdapterError, HttpAvailabilityProvider};
pub use orchestrator::BookingCalendar;
pub use selection::{SelectionPhase, SelectionState};
