// --- File: crates/hopigo_booking/src/orchestrator.rs ---
//! Booking calendar orchestrator.
//!
//! Ties the month grid, the availability source and the selection state
//! machine together for one provider at a time. Month navigation and
//! selection snapshots are synchronous; only the slot fetch awaits, and no
//! lock is held across that await so a later selection can overtake a slow
//! fetch and have the slow result discarded.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Local, Months, NaiveDate, Utc};
use tracing::{debug, warn};

use hopigo_calendar::grid::{self, MonthRef};
use hopigo_calendar::marked::derive_marked_dates;
use hopigo_common::models::{BookingRecord, MarkPalette, MarkedDateInfo};
use hopigo_common::services::AvailabilityProvider;
use hopigo_config::BookingConfig;

use crate::selection::SelectionState;

type SelectCallback = Box<dyn FnMut(DateTime<Utc>) + Send>;

/// One provider's booking calendar: a navigable month cursor, a selectable
/// date window anchored at today, and the slot selection for the current
/// date.
pub struct BookingCalendar<P: AvailabilityProvider> {
    availability: Arc<P>,
    provider_id: Mutex<String>,
    selection: Mutex<SelectionState>,
    month: Mutex<MonthRef>,
    anchor: NaiveDate,
    min_date: NaiveDate,
    max_date: NaiveDate,
    palette: MarkPalette,
    // Taken out of the mutex for the duration of an invocation so the
    // callback never runs with an orchestrator lock held.
    on_select: Mutex<Option<SelectCallback>>,
}

// A poisoned lock only means another thread panicked mid-update of plain
// data; the state itself is still usable.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<P: AvailabilityProvider> BookingCalendar<P> {
    /// Calendar anchored at today's local date.
    pub fn new(
        provider_id: impl Into<String>,
        availability: Arc<P>,
        booking: &BookingConfig,
        on_select: impl FnMut(DateTime<Utc>) + Send + 'static,
    ) -> Self {
        Self::anchored_at(
            provider_id,
            availability,
            booking,
            on_select,
            Local::now().date_naive(),
        )
    }

    /// Deterministic constructor: `today` is supplied rather than read from
    /// the wall clock. The selectable window is `[today, today + N months]`
    /// inclusive.
    pub fn anchored_at(
        provider_id: impl Into<String>,
        availability: Arc<P>,
        booking: &BookingConfig,
        on_select: impl FnMut(DateTime<Utc>) + Send + 'static,
        today: NaiveDate,
    ) -> Self {
        let advance = u32::try_from(booking.max_advance_months).unwrap_or(0);
        let max_date = today
            .checked_add_months(Months::new(advance))
            .unwrap_or(today);

        let defaults = MarkPalette::default();
        let palette = MarkPalette {
            primary: booking
                .primary_dot_color
                .clone()
                .unwrap_or(defaults.primary),
            warning: booking
                .warning_dot_color
                .clone()
                .unwrap_or(defaults.warning),
        };

        Self {
            availability,
            provider_id: Mutex::new(provider_id.into()),
            selection: Mutex::new(SelectionState::new()),
            month: Mutex::new(MonthRef::containing(today)),
            anchor: today,
            min_date: today,
            max_date,
            palette,
            on_select: Mutex::new(Some(Box::new(on_select))),
        }
    }

    pub fn provider_id(&self) -> String {
        lock(&self.provider_id).clone()
    }

    /// Switch the calendar to another provider. The selection and the month
    /// cursor are dropped back to their initial state so nothing from the
    /// previous provider leaks into the new view.
    pub fn set_provider(&self, provider_id: impl Into<String>) {
        let provider_id = provider_id.into();
        debug!(%provider_id, "switching provider");
        *lock(&self.provider_id) = provider_id;
        lock(&self.selection).reset();
        *lock(&self.month) = MonthRef::containing(self.anchor);
    }

    // --- Month navigation ---

    pub fn month(&self) -> MonthRef {
        *lock(&self.month)
    }

    pub fn next_month(&self) -> MonthRef {
        let mut month = lock(&self.month);
        *month = month.advance(1);
        *month
    }

    pub fn prev_month(&self) -> MonthRef {
        let mut month = lock(&self.month);
        *month = month.advance(-1);
        *month
    }

    /// Cells of the current month view, whole weeks included.
    pub fn visible_dates(&self) -> Vec<NaiveDate> {
        grid::generate_grid(self.month())
    }

    /// Selectable window bounds, both inclusive.
    pub fn min_date(&self) -> NaiveDate {
        self.min_date
    }

    pub fn max_date(&self) -> NaiveDate {
        self.max_date
    }

    pub fn is_selectable(&self, date: NaiveDate) -> bool {
        grid::is_selectable(date, Some(self.min_date), Some(self.max_date))
    }

    // --- Selection ---

    pub fn selected_date(&self) -> Option<NaiveDate> {
        lock(&self.selection).selected_date()
    }

    pub fn chosen_start(&self) -> Option<DateTime<Utc>> {
        lock(&self.selection).chosen_start()
    }

    /// True while a slot fetch for the selected date is outstanding.
    pub fn is_loading(&self) -> bool {
        lock(&self.selection).is_loading()
    }

    /// Slot candidates for the selected date, as last loaded.
    pub fn slots(&self) -> Vec<hopigo_common::models::AvailabilitySlot> {
        lock(&self.selection).slots().to_vec()
    }

    /// Select a date and fetch its slots.
    ///
    /// The chosen slot and previously loaded slots are cleared before this
    /// returns control to the executor, so no caller ever observes a chosen
    /// slot paired with a newly selected date. Returns `false` (and does
    /// nothing) for dates outside the selectable window.
    ///
    /// A fetch failure is logged and normalized to an empty slot list, which
    /// renders the same as a fully booked day. If another date is selected
    /// while this fetch is in flight, the result is discarded on arrival.
    pub async fn select_date(&self, date: NaiveDate) -> bool {
        if !self.is_selectable(date) {
            debug!(%date, "ignoring selection outside the bookable window");
            return false;
        }

        lock(&self.selection).select_date(date);

        let provider_id = self.provider_id();
        let slots = match self.availability.fetch_availability(&provider_id, date).await {
            Ok(slots) => slots,
            Err(err) => {
                warn!(%provider_id, %date, error = %err, "availability fetch failed, treating day as having no slots");
                Vec::new()
            }
        };

        lock(&self.selection).slots_arrived(date, slots);
        true
    }

    /// Choose the loaded slot starting at `start` and notify the selection
    /// callback. A no-op returning `false` when the slot is not among the
    /// loaded candidates or is unavailable.
    ///
    /// The callback runs with no orchestrator lock held, so it may call back
    /// into this calendar. A nested `choose_slot` from inside the callback
    /// updates the selection but is not re-notified.
    pub fn choose_slot(&self, start: DateTime<Utc>) -> bool {
        let chosen = lock(&self.selection).choose_slot(start);
        if chosen {
            let callback = lock(&self.on_select).take();
            if let Some(mut callback) = callback {
                callback(start);
                let mut slot = lock(&self.on_select);
                if slot.is_none() {
                    *slot = Some(callback);
                }
            }
        }
        chosen
    }

    /// Dot markers for the current provider's booking records, keyed by
    /// `YYYY-MM-DD`.
    pub fn marked_dates(&self, bookings: &[BookingRecord]) -> HashMap<String, MarkedDateInfo> {
        derive_marked_dates(&self.provider_id(), bookings, &self.palette)
    }
}
