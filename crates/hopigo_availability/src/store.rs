// --- File: crates/hopigo_availability/src/store.rs ---
//! In-memory availability source.
//!
//! Keeps per-provider booked periods and booking records behind a `RwLock`
//! and serves slot queries by combining the provider schedule with whatever
//! has been booked so far. This is the process-local stand-in for the
//! managed booking backend; the HTTP surface in `handlers` sits on top of
//! it, and tests use it directly.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, NaiveDate, Utc};
use hopigo_common::models::{AvailabilitySlot, BookingRecord, BookingStatus};
use hopigo_common::services::{AvailabilityProvider, BoxFuture};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::schedule::{generate_day_slots, ProviderSchedule};

#[derive(Error, Debug)]
pub enum AvailabilityStoreError {
    #[error("Booking conflict")]
    Conflict,
    #[error("Invalid time range: end must be after start")]
    InvalidRange,
    #[error("Availability store lock poisoned")]
    LockPoisoned,
}

#[derive(Default)]
struct StoreInner {
    booked: HashMap<String, Vec<(DateTime<Utc>, DateTime<Utc>)>>,
    records: Vec<BookingRecord>,
}

/// In-memory slot source over one shared provider schedule.
pub struct InMemoryAvailability {
    schedule: ProviderSchedule,
    inner: RwLock<StoreInner>,
}

impl InMemoryAvailability {
    pub fn new(schedule: ProviderSchedule) -> Self {
        Self {
            schedule,
            inner: RwLock::new(StoreInner::default()),
        }
    }

    pub fn schedule(&self) -> &ProviderSchedule {
        &self.schedule
    }

    /// Slot candidates for one provider on one date, unavailable where they
    /// collide with an existing booking.
    pub fn day_slots(
        &self,
        provider_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<AvailabilitySlot>, AvailabilityStoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| AvailabilityStoreError::LockPoisoned)?;
        let booked = inner
            .booked
            .get(provider_id)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        Ok(generate_day_slots(date, &self.schedule, booked))
    }

    /// Record a booking for the given interval. Rejects overlaps with any
    /// existing booking for the same provider.
    pub fn book(
        &self,
        provider_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<String, AvailabilityStoreError> {
        if end <= start {
            return Err(AvailabilityStoreError::InvalidRange);
        }

        let mut inner = self
            .inner
            .write()
            .map_err(|_| AvailabilityStoreError::LockPoisoned)?;

        let periods = inner.booked.entry(provider_id.to_string()).or_default();
        if periods
            .iter()
            .any(|(busy_start, busy_end)| start < *busy_end && end > *busy_start)
        {
            return Err(AvailabilityStoreError::Conflict);
        }
        periods.push((start, end));

        let booking_date = start.with_timezone(&self.schedule.time_zone).date_naive();
        inner.records.push(BookingRecord {
            provider_id: provider_id.to_string(),
            status: BookingStatus::Accepted,
            date: booking_date,
        });

        let booking_id = Uuid::new_v4().to_string();
        info!(
            "Booked {} - {} for provider {} ({})",
            start, end, provider_id, booking_id
        );
        Ok(booking_id)
    }

    /// All booking records for one provider, for marked-date derivation.
    pub fn bookings(
        &self,
        provider_id: &str,
    ) -> Result<Vec<BookingRecord>, AvailabilityStoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| AvailabilityStoreError::LockPoisoned)?;
        Ok(inner
            .records
            .iter()
            .filter(|record| record.provider_id == provider_id)
            .cloned()
            .collect())
    }
}

impl AvailabilityProvider for InMemoryAvailability {
    type Error = AvailabilityStoreError;

    fn fetch_availability(
        &self,
        provider_id: &str,
        date: NaiveDate,
    ) -> BoxFuture<'_, Vec<AvailabilitySlot>, Self::Error> {
        let provider_id = provider_id.to_string();
        Box::pin(async move { self.day_slots(&provider_id, date) })
    }
}
