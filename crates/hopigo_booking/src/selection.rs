// --- File: crates/hopigo_booking/src/selection.rs ---
//! Slot-selection state machine.
//!
//! One provider, one selected date, at most one chosen slot. The transitions
//! here are synchronous and infallible; the async plumbing around slot
//! fetches lives in the orchestrator and only ever calls in through
//! [`SelectionState::select_date`] and [`SelectionState::slots_arrived`].

use chrono::{DateTime, NaiveDate, Utc};
use hopigo_common::models::AvailabilitySlot;
use tracing::debug;

/// Where the selection currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    /// Nothing selected yet, or the state was reset.
    NoDateSelected,
    /// A date is selected and its slot fetch is outstanding.
    DateSelectedNoSlots,
    /// Slots for the selected date are in hand, none chosen.
    SlotsLoaded,
    /// A specific slot has been chosen.
    SlotChosen,
}

/// The selection itself. All mutation goes through the methods below; no
/// transition ever leaves a chosen slot referring to a date other than the
/// selected one.
#[derive(Debug, Clone)]
pub struct SelectionState {
    phase: SelectionPhase,
    selected_date: Option<NaiveDate>,
    slots: Vec<AvailabilitySlot>,
    chosen_start: Option<DateTime<Utc>>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            phase: SelectionPhase::NoDateSelected,
            selected_date: None,
            slots: Vec::new(),
            chosen_start: None,
        }
    }

    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    /// The slot candidates loaded for the selected date. Empty while a fetch
    /// is outstanding or when the day has no slots.
    pub fn slots(&self) -> &[AvailabilitySlot] {
        &self.slots
    }

    pub fn chosen_start(&self) -> Option<DateTime<Utc>> {
        self.chosen_start
    }

    /// True while a slot fetch for the selected date has not landed yet.
    pub fn is_loading(&self) -> bool {
        self.phase == SelectionPhase::DateSelectedNoSlots
    }

    /// Select `date`, discarding any chosen slot and any loaded slots in the
    /// same call. Re-selecting the already-selected date behaves identically:
    /// the slots are cleared and a fresh fetch is expected.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = Some(date);
        self.slots.clear();
        self.chosen_start = None;
        self.phase = SelectionPhase::DateSelectedNoSlots;
    }

    /// Deliver the result of a slot fetch that was issued for `for_date`.
    ///
    /// Returns `false` and changes nothing when `for_date` is no longer the
    /// selected date, which is how a slow response for a previously selected
    /// date gets discarded instead of clobbering the current one.
    pub fn slots_arrived(&mut self, for_date: NaiveDate, slots: Vec<AvailabilitySlot>) -> bool {
        if self.selected_date != Some(for_date) {
            debug!(%for_date, "discarding slots for a date that is no longer selected");
            return false;
        }
        self.slots = slots;
        self.chosen_start = None;
        self.phase = SelectionPhase::SlotsLoaded;
        true
    }

    /// Choose the slot starting at `start`. A no-op (returning `false`) when
    /// no slots are loaded, when no listed slot starts at `start`, or when
    /// the matching slot is marked unavailable. Choosing a different slot
    /// while one is already chosen replaces the choice.
    pub fn choose_slot(&mut self, start: DateTime<Utc>) -> bool {
        if self.phase != SelectionPhase::SlotsLoaded && self.phase != SelectionPhase::SlotChosen {
            return false;
        }
        let listed = self
            .slots
            .iter()
            .any(|s| s.start_time == start && s.available);
        if !listed {
            return false;
        }
        self.chosen_start = Some(start);
        self.phase = SelectionPhase::SlotChosen;
        true
    }

    /// Drop everything back to the initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
