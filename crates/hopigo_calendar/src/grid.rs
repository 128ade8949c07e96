// --- File: crates/hopigo_calendar/src/grid.rs ---
//! Month-grid generation for the booking calendar.
//!
//! A month view renders complete weeks: the grid starts on the Sunday on or
//! before the 1st and ends on the Saturday on or after the last day, so
//! cells from adjacent months are included for visual continuity and flagged
//! via [`is_in_month`]. All date math is on whole days; time of day never
//! enters any comparison here.

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};

/// A reference month for grid generation and prev/next navigation.
///
/// There is deliberately no day-of-month component, so advancing from a
/// January anchor can never produce a "Feb 31" style overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRef {
    pub year: i32,
    /// 1-based month, always in `1..=12`.
    pub month: u32,
}

impl MonthRef {
    /// The month containing the given date.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month containing today's local date.
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    /// Adds `delta` whole months, carrying into the year in either
    /// direction. Only month/year matter; day-of-month does not exist here.
    pub fn advance(self, delta: i32) -> Self {
        let total = self.year * 12 + self.month as i32 - 1 + delta;
        Self {
            year: total.div_euclid(12),
            month: (total.rem_euclid(12) + 1) as u32,
        }
    }

    /// First day of this month.
    pub fn first_day(self) -> NaiveDate {
        // month is 1..=12 by construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("valid month reference")
    }

    /// Last day of this month.
    pub fn last_day(self) -> NaiveDate {
        self.advance(1)
            .first_day()
            .pred_opt()
            .expect("date before first of month")
    }
}

/// Generate the full set of calendar cells for a month view.
///
/// Returns every date from the Sunday on or before the 1st through the
/// Saturday on or after the last day, ascending with no gaps. The length is
/// always a multiple of 7 (28, 35 or 42 depending on month shape).
pub fn generate_grid(month: MonthRef) -> Vec<NaiveDate> {
    let first = month.first_day();
    let last = month.last_day();

    let lead = first.weekday().num_days_from_sunday() as u64;
    let trail = (Weekday::Sat.num_days_from_sunday() - last.weekday().num_days_from_sunday()) as u64;

    let start = first - Days::new(lead);
    let end = last + Days::new(trail);

    start.iter_days().take_while(|d| *d <= end).collect()
}

/// True iff `date` falls in the reference month itself rather than in one of
/// the overflow cells from an adjacent month.
pub fn is_in_month(date: NaiveDate, month: MonthRef) -> bool {
    date.year() == month.year && date.month() == month.month
}

/// True iff `date` is today's local wall-clock date.
pub fn is_today(date: NaiveDate) -> bool {
    is_today_on(date, Local::now().date_naive())
}

/// Deterministic seam for [`is_today`]: compare against an explicit "today".
pub fn is_today_on(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

/// True iff `date` lies within the optional `[min, max]` bounds, inclusive
/// on both sides. Callers normalize any time-of-day before passing bounds.
pub fn is_selectable(date: NaiveDate, min: Option<NaiveDate>, max: Option<NaiveDate>) -> bool {
    if let Some(min) = min {
        if date < min {
            return false;
        }
    }
    if let Some(max) = max {
        if date > max {
            return false;
        }
    }
    true
}
