// --- File: crates/hopigo_common/src/models.rs ---
//! Data structures shared across the HopiGo booking crates.
//!
//! Everything crossing a crate boundary lives here: the slot shape the
//! availability source produces, the booking records the marked-date
//! derivation consumes, and the annotation types the calendar view renders.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A discrete bookable time interval for a provider on a given date.
///
/// Produced entirely by the availability source. Consumers only look at
/// `available` for filtering and `start_time` for display; the rest is
/// passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub available: bool,
}

/// Status of an existing booking, as reported by the bookings source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Accepted,
    Completed,
    Cancelled,
}

/// An existing booking for a provider, pre-fetched by the caller and fed
/// into the marked-date derivation. Only `{pending, accepted}` statuses
/// annotate the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub provider_id: String,
    pub status: BookingStatus,
    pub date: NaiveDate,
}

/// Annotation for a single calendar cell that carries existing bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkedDateInfo {
    pub marked: bool,
    pub dot_color: String,
}

/// Dot color convention for marked dates: accepted bookings render with the
/// primary brand color, pending bookings with the warning color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkPalette {
    pub primary: String,
    pub warning: String,
}

impl Default for MarkPalette {
    fn default() -> Self {
        Self {
            primary: "#5D5FEF".to_string(),
            warning: "#F5A623".to_string(),
        }
    }
}
