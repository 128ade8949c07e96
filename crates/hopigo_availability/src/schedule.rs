// --- File: crates/hopigo_availability/src/schedule.rs ---
//! Slot generation from a provider's business hours.
//!
//! A day's slot candidates are fixed-length intervals stepping through the
//! provider's working window, expressed in the provider's own time zone and
//! returned in UTC. Slots overlapping an existing booking (plus buffer) are
//! emitted with `available = false` rather than omitted, so the client can
//! render a fully booked day distinctly from a day with no schedule at all.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;
use hopigo_common::models::AvailabilitySlot;
use hopigo_config::ScheduleConfig;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),
    #[error("Failed to parse time: {0}")]
    TimeParseError(String),
    #[error("Invalid slot duration: {0} minutes")]
    InvalidDuration(i64),
}

/// Business-hours configuration for one provider, resolved from
/// [`ScheduleConfig`] with defaults for anything unset.
#[derive(Debug, Clone)]
pub struct ProviderSchedule {
    pub time_zone: Tz,
    pub work_start: NaiveTime,
    pub work_end: NaiveTime,
    pub working_days: Vec<Weekday>,
    pub slot_duration: Duration,
    pub buffer: Duration,
}

impl Default for ProviderSchedule {
    fn default() -> Self {
        Self {
            time_zone: Tz::America__Aruba,
            work_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            work_end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            working_days: vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ],
            slot_duration: Duration::minutes(60),
            buffer: Duration::minutes(0),
        }
    }
}

impl ProviderSchedule {
    /// Resolve a schedule from configuration, falling back to defaults for
    /// unset fields and rejecting values that cannot mean anything.
    pub fn from_config(config: &ScheduleConfig) -> Result<Self, ScheduleError> {
        let defaults = Self::default();

        let time_zone = match &config.time_zone {
            Some(name) => {
                Tz::from_str(name).map_err(|_| ScheduleError::UnknownTimeZone(name.clone()))?
            }
            None => defaults.time_zone,
        };

        let work_start = parse_work_time(config.work_start_time.as_deref(), defaults.work_start)?;
        let work_end = parse_work_time(config.work_end_time.as_deref(), defaults.work_end)?;

        let working_days = match &config.working_days {
            Some(days) => days
                .iter()
                .filter_map(|day| parse_weekday(day))
                .collect::<Vec<_>>(),
            None => defaults.working_days,
        };

        let slot_duration = match config.slot_duration_minutes {
            Some(minutes) if minutes > 0 => Duration::minutes(minutes),
            Some(minutes) => return Err(ScheduleError::InvalidDuration(minutes)),
            None => defaults.slot_duration,
        };

        let buffer = match config.buffer_minutes {
            Some(minutes) if minutes >= 0 => Duration::minutes(minutes),
            Some(minutes) => return Err(ScheduleError::InvalidDuration(minutes)),
            None => defaults.buffer,
        };

        Ok(Self {
            time_zone,
            work_start,
            work_end,
            working_days,
            slot_duration,
            buffer,
        })
    }
}

fn parse_work_time(value: Option<&str>, default: NaiveTime) -> Result<NaiveTime, ScheduleError> {
    match value {
        Some(time_str) => NaiveTime::parse_from_str(time_str, "%H:%M")
            .map_err(|_| ScheduleError::TimeParseError(time_str.to_string())),
        None => Ok(default),
    }
}

fn parse_weekday(day: &str) -> Option<Weekday> {
    match day {
        "Mon" => Some(Weekday::Mon),
        "Tue" => Some(Weekday::Tue),
        "Wed" => Some(Weekday::Wed),
        "Thu" => Some(Weekday::Thu),
        "Fri" => Some(Weekday::Fri),
        "Sat" => Some(Weekday::Sat),
        "Sun" => Some(Weekday::Sun),
        _ => None,
    }
}

fn merge_booked_periods(
    booked: &[(DateTime<Utc>, DateTime<Utc>)],
) -> Vec<(DateTime<Utc>, DateTime<Utc>)> {
    if booked.is_empty() {
        return vec![];
    }
    let mut sorted = booked.to_vec();
    sorted.sort_by_key(|(start, _)| *start);
    let mut merged = vec![sorted[0]];
    for &(start, end) in &sorted[1..] {
        let last = merged.last_mut().unwrap();
        if start <= last.1 {
            last.1 = last.1.max(end);
        } else {
            merged.push((start, end));
        }
    }
    merged
}

/// Generate the slot candidates for one provider-local calendar date.
///
/// Non-working days produce an empty list. Slots that would run past the end
/// of the working window are not emitted; slots colliding with a booked
/// period (buffer included) are emitted unavailable.
pub fn generate_day_slots(
    date: NaiveDate,
    schedule: &ProviderSchedule,
    booked: &[(DateTime<Utc>, DateTime<Utc>)],
) -> Vec<AvailabilitySlot> {
    if !schedule.working_days.contains(&date.weekday()) {
        return vec![];
    }

    debug!(
        "Generating slots for {} ({} - {} {})",
        date, schedule.work_start, schedule.work_end, schedule.time_zone
    );

    let merged = merge_booked_periods(booked);
    let window_end = date.and_time(schedule.work_end);

    let mut slots = Vec::new();
    let mut cursor = date.and_time(schedule.work_start);

    while cursor + schedule.slot_duration <= window_end {
        let slot_end_naive = cursor + schedule.slot_duration;

        // A DST gap makes the local start nonexistent; skip that candidate.
        let (start_local, end_local) = match (
            schedule.time_zone.from_local_datetime(&cursor).earliest(),
            schedule
                .time_zone
                .from_local_datetime(&slot_end_naive)
                .earliest(),
        ) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                cursor = slot_end_naive;
                continue;
            }
        };

        let start_time = start_local.with_timezone(&Utc);
        let end_time = end_local.with_timezone(&Utc);
        let end_with_buffer = end_time + schedule.buffer;

        let available = !merged
            .iter()
            .any(|(busy_start, busy_end)| start_time < *busy_end && end_with_buffer > *busy_start);

        slots.push(AvailabilitySlot {
            start_time,
            end_time,
            available,
        });
        cursor = slot_end_naive;
    }

    slots
}
