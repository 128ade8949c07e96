// --- File: crates/hopigo_common/src/services.rs ---
//! Service abstractions for external collaborators.
//!
//! The booking flow never talks to an availability backend directly; it goes
//! through the `AvailabilityProvider` trait so the HTTP-backed adapter, the
//! in-process source and test mocks are interchangeable.

use chrono::NaiveDate;
use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;

use crate::models::AvailabilitySlot;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A source of availability slots for a `(provider, date)` pair.
///
/// The returned list is surfaced verbatim: this layer does not filter,
/// reorder or interpret slots. Whether a fetch failure is surfaced as an
/// error or normalized away is the caller's decision, not the provider's.
pub trait AvailabilityProvider: Send + Sync {
    /// Error type returned by availability operations.
    type Error: StdError + Send + Sync + 'static;

    /// Fetch the slot candidates for one provider on one calendar date.
    fn fetch_availability(
        &self,
        provider_id: &str,
        date: NaiveDate,
    ) -> BoxFuture<'_, Vec<AvailabilitySlot>, Self::Error>;
}
