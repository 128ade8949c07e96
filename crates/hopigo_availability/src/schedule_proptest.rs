#[cfg(test)]
mod tests {
    use crate::schedule::{generate_day_slots, ProviderSchedule};
    use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
    use proptest::prelude::*;

    fn all_days() -> Vec<Weekday> {
        vec![
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
    }

    fn schedule(
        start_hour: u32,
        end_hour: u32,
        slot_minutes: i64,
        buffer_minutes: i64,
    ) -> ProviderSchedule {
        ProviderSchedule {
            work_start: NaiveTime::from_hms_opt(start_hour, 0, 0).unwrap(),
            work_end: NaiveTime::from_hms_opt(end_hour, 0, 0).unwrap(),
            working_days: all_days(),
            slot_duration: Duration::minutes(slot_minutes),
            buffer: Duration::minutes(buffer_minutes),
            ..ProviderSchedule::default()
        }
    }

    fn busy_periods(
        base: DateTime<Utc>,
        count: usize,
        duration_hours: i64,
    ) -> Vec<(DateTime<Utc>, DateTime<Utc>)> {
        let mut periods = Vec::new();
        let mut cursor = base;
        for _ in 0..count {
            let start = cursor + Duration::hours(1);
            let end = start + Duration::hours(duration_hours.max(1));
            periods.push((start, end));
            cursor = end;
        }
        periods
    }

    proptest! {
        // Every emitted slot has the configured length and stays inside the
        // working window of its own local day.
        #[test]
        fn test_slots_have_configured_shape(
            day_offset in 0..365u64,
            start_hour in 0..12u32,
            end_hour in 13..24u32,
            slot_minutes in 15i64..120,
        ) {
            let schedule = schedule(start_hour, end_hour, slot_minutes, 0);
            let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + Days::new(day_offset);

            let slots = generate_day_slots(date, &schedule, &[]);

            for slot in &slots {
                prop_assert_eq!(slot.end_time - slot.start_time, Duration::minutes(slot_minutes));
                let local_start = slot.start_time.with_timezone(&schedule.time_zone);
                let local_end = slot.end_time.with_timezone(&schedule.time_zone);
                prop_assert_eq!(local_start.date_naive(), date);
                prop_assert!(local_start.time() >= schedule.work_start);
                prop_assert!(local_end.time() <= schedule.work_end);
            }
        }

        // Slots are ascending, contiguous, and never duplicated.
        #[test]
        fn test_slots_are_ordered_and_contiguous(
            day_offset in 0..365u64,
            slot_minutes in 15i64..120,
        ) {
            let schedule = schedule(8, 18, slot_minutes, 0);
            let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + Days::new(day_offset);

            let slots = generate_day_slots(date, &schedule, &[]);

            for pair in slots.windows(2) {
                prop_assert_eq!(pair[1].start_time, pair[0].end_time);
            }
        }

        // A slot marked available never overlaps any booked period.
        #[test]
        fn test_available_slots_avoid_booked_periods(
            day_offset in 0..365u64,
            busy_count in 1..4usize,
            busy_hours in 1..3i64,
            buffer_minutes in 0..30i64,
        ) {
            let schedule = schedule(0, 23, 60, buffer_minutes);
            let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + Days::new(day_offset);
            let base = schedule
                .time_zone
                .from_local_datetime(&date.and_time(schedule.work_start))
                .earliest()
                .unwrap()
                .with_timezone(&Utc);
            let booked = busy_periods(base, busy_count, busy_hours);

            let slots = generate_day_slots(date, &schedule, &booked);

            for slot in slots.iter().filter(|s| s.available) {
                for (busy_start, busy_end) in &booked {
                    let overlaps = slot.start_time < *busy_end
                        && slot.end_time + schedule.buffer > *busy_start;
                    prop_assert!(
                        !overlaps,
                        "available slot {} overlaps booked {} - {}",
                        slot.start_time, busy_start, busy_end
                    );
                }
            }
        }

        // Working-day filtering is total: a weekday outside the schedule
        // produces nothing, regardless of bookings.
        #[test]
        fn test_non_working_days_yield_nothing(day_offset in 0..365u64) {
            let mut schedule = schedule(9, 17, 60, 0);
            schedule.working_days = vec![Weekday::Mon];
            let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + Days::new(day_offset);

            let slots = generate_day_slots(date, &schedule, &[]);

            if date.weekday() == Weekday::Mon {
                prop_assert!(!slots.is_empty());
            } else {
                prop_assert!(slots.is_empty());
            }
        }
    }
}
