#[cfg(test)]
mod tests {
    use crate::schedule::{generate_day_slots, ProviderSchedule, ScheduleError};
    use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
    use hopigo_config::ScheduleConfig;

    fn monday() -> NaiveDate {
        // Monday, June 9, 2025
        NaiveDate::from_ymd_opt(2025, 6, 9).unwrap()
    }

    fn schedule_config() -> ScheduleConfig {
        ScheduleConfig {
            time_zone: Some("America/Aruba".to_string()),
            work_start_time: Some("09:00".to_string()),
            work_end_time: Some("17:00".to_string()),
            working_days: Some(vec![
                "Mon".to_string(),
                "Tue".to_string(),
                "Wed".to_string(),
                "Thu".to_string(),
                "Fri".to_string(),
            ]),
            slot_duration_minutes: Some(60),
            buffer_minutes: Some(0),
        }
    }

    #[test]
    fn test_full_working_day_slot_count() {
        let schedule = ProviderSchedule::from_config(&schedule_config()).unwrap();

        let slots = generate_day_slots(monday(), &schedule, &[]);

        // 09:00-17:00 with 60-minute slots
        assert_eq!(slots.len(), 8);
        assert!(slots.iter().all(|s| s.available));

        // Aruba is UTC-4 year round: 09:00 local is 13:00 UTC.
        let first = &slots[0];
        assert_eq!(first.start_time, Utc.with_ymd_and_hms(2025, 6, 9, 13, 0, 0).unwrap());
        assert_eq!(first.end_time - first.start_time, Duration::minutes(60));

        // Slots are contiguous and ascending.
        for pair in slots.windows(2) {
            assert_eq!(pair[1].start_time, pair[0].end_time);
        }
    }

    #[test]
    fn test_non_working_day_has_no_slots() {
        let schedule = ProviderSchedule::from_config(&schedule_config()).unwrap();

        // Sunday, June 8, 2025
        let sunday = NaiveDate::from_ymd_opt(2025, 6, 8).unwrap();
        assert!(generate_day_slots(sunday, &schedule, &[]).is_empty());
    }

    #[test]
    fn test_booked_period_marks_slots_unavailable() {
        let schedule = ProviderSchedule::from_config(&schedule_config()).unwrap();

        // 10:00-11:00 local = 14:00-15:00 UTC
        let booked: Vec<(DateTime<Utc>, DateTime<Utc>)> = vec![(
            Utc.with_ymd_and_hms(2025, 6, 9, 14, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 6, 9, 15, 0, 0).unwrap(),
        )];

        let slots = generate_day_slots(monday(), &schedule, &booked);

        // The collision does not remove the slot, it flags it.
        assert_eq!(slots.len(), 8);
        let unavailable: Vec<_> = slots.iter().filter(|s| !s.available).collect();
        assert_eq!(unavailable.len(), 1);
        assert_eq!(
            unavailable[0].start_time,
            Utc.with_ymd_and_hms(2025, 6, 9, 14, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_buffer_extends_collision() {
        let mut config = schedule_config();
        config.buffer_minutes = Some(30);
        let schedule = ProviderSchedule::from_config(&config).unwrap();

        // Booking at 11:00-12:00 local; with a 30-minute buffer the
        // preceding 10:00-11:00 slot would run into it as well.
        let booked = vec![(
            Utc.with_ymd_and_hms(2025, 6, 9, 15, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 6, 9, 16, 0, 0).unwrap(),
        )];

        let slots = generate_day_slots(monday(), &schedule, &booked);
        let unavailable: Vec<_> = slots.iter().filter(|s| !s.available).collect();

        assert_eq!(unavailable.len(), 2);
    }

    #[test]
    fn test_overlapping_booked_periods_are_merged() {
        let schedule = ProviderSchedule::from_config(&schedule_config()).unwrap();

        let booked = vec![
            (
                Utc.with_ymd_and_hms(2025, 6, 9, 14, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2025, 6, 9, 15, 30, 0).unwrap(),
            ),
            (
                Utc.with_ymd_and_hms(2025, 6, 9, 15, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2025, 6, 9, 16, 0, 0).unwrap(),
            ),
        ];

        let slots = generate_day_slots(monday(), &schedule, &booked);
        let unavailable = slots.iter().filter(|s| !s.available).count();

        // 10:00-11:00, 11:00-12:00 (via the merged span) both collide.
        assert_eq!(unavailable, 2);
    }

    #[test]
    fn test_partial_slot_at_end_of_day_is_not_emitted() {
        let mut config = schedule_config();
        config.work_end_time = Some("16:30".to_string());
        let schedule = ProviderSchedule::from_config(&config).unwrap();

        let slots = generate_day_slots(monday(), &schedule, &[]);

        // 09:00-16:30 fits seven whole hours; the trailing half hour is
        // dropped rather than truncated into a short slot.
        assert_eq!(slots.len(), 7);
    }

    #[test]
    fn test_from_config_rejects_bad_values() {
        let mut config = schedule_config();
        config.time_zone = Some("Mars/Olympus".to_string());
        assert!(matches!(
            ProviderSchedule::from_config(&config),
            Err(ScheduleError::UnknownTimeZone(_))
        ));

        let mut config = schedule_config();
        config.work_start_time = Some("9am".to_string());
        assert!(matches!(
            ProviderSchedule::from_config(&config),
            Err(ScheduleError::TimeParseError(_))
        ));

        let mut config = schedule_config();
        config.slot_duration_minutes = Some(0);
        assert!(matches!(
            ProviderSchedule::from_config(&config),
            Err(ScheduleError::InvalidDuration(0))
        ));
    }

    #[test]
    fn test_from_config_uses_defaults_for_unset_fields() {
        let config = ScheduleConfig {
            time_zone: None,
            work_start_time: None,
            work_end_time: None,
            working_days: None,
            slot_duration_minutes: None,
            buffer_minutes: None,
        };
        let schedule = ProviderSchedule::from_config(&config).unwrap();
        let defaults = ProviderSchedule::default();

        assert_eq!(schedule.time_zone, defaults.time_zone);
        assert_eq!(schedule.work_start, defaults.work_start);
        assert_eq!(schedule.slot_duration, defaults.slot_duration);
    }
}
