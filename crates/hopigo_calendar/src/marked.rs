// --- File: crates/hopigo_calendar/src/marked.rs ---
//! Marked-date derivation: existing bookings for the provider in view are
//! turned into per-date dot annotations for the calendar grid.
//!
//! This is pure bookkeeping over a caller-supplied record list; nothing here
//! fetches. Only `{pending, accepted}` bookings mark a date, and accepted
//! takes precedence over pending when both fall on the same day.

use std::collections::HashMap;

use chrono::NaiveDate;
use hopigo_common::models::{BookingRecord, BookingStatus, MarkPalette, MarkedDateInfo};

/// Date key format used by the calendar view, e.g. `2025-06-10`.
const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Derive the marked-date map for one provider from pre-fetched bookings.
pub fn derive_marked_dates(
    provider_id: &str,
    bookings: &[BookingRecord],
    palette: &MarkPalette,
) -> HashMap<String, MarkedDateInfo> {
    let mut status_by_date: HashMap<NaiveDate, BookingStatus> = HashMap::new();

    for booking in bookings {
        if booking.provider_id != provider_id {
            continue;
        }
        match booking.status {
            BookingStatus::Accepted => {
                status_by_date.insert(booking.date, BookingStatus::Accepted);
            }
            BookingStatus::Pending => {
                // Accepted already on this date wins the dot color.
                status_by_date
                    .entry(booking.date)
                    .or_insert(BookingStatus::Pending);
            }
            BookingStatus::Completed | BookingStatus::Cancelled => {}
        }
    }

    status_by_date
        .into_iter()
        .map(|(date, status)| {
            let dot_color = match status {
                BookingStatus::Accepted => palette.primary.clone(),
                _ => palette.warning.clone(),
            };
            (
                date.format(DATE_KEY_FORMAT).to_string(),
                MarkedDateInfo {
                    marked: true,
                    dot_color,
                },
            )
        })
        .collect()
}
