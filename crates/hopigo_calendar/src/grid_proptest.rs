#[cfg(test)]
mod tests {
    use crate::grid::{generate_grid, is_in_month, is_selectable, MonthRef};
    use chrono::{Datelike, Days, NaiveDate, Weekday};
    use proptest::prelude::*;

    proptest! {
        // The grid is always whole weeks, Sunday through Saturday.
        #[test]
        fn test_grid_shape(year in 1990..2100i32, month in 1..=12u32) {
            let grid = generate_grid(MonthRef { year, month });

            prop_assert!(!grid.is_empty());
            prop_assert_eq!(grid.len() % 7, 0);
            prop_assert_eq!(grid[0].weekday(), Weekday::Sun);
            prop_assert_eq!(grid.last().unwrap().weekday(), Weekday::Sat);
        }

        // Every date of the reference month appears exactly once, and the
        // sequence is ascending with no gaps.
        #[test]
        fn test_grid_covers_month_exactly_once(year in 1990..2100i32, month in 1..=12u32) {
            let month_ref = MonthRef { year, month };
            let grid = generate_grid(month_ref);

            for pair in grid.windows(2) {
                prop_assert_eq!(pair[1], pair[0].succ_opt().unwrap());
            }

            let first = month_ref.first_day();
            let days_in_month = month_ref.last_day().day() as usize;
            let in_month = grid.iter().filter(|d| is_in_month(**d, month_ref)).count();

            prop_assert_eq!(in_month, days_in_month);
            prop_assert!(grid.contains(&first));
            prop_assert!(grid.contains(&month_ref.last_day()));
        }

        // Overflow cells come only from the immediately adjacent months.
        #[test]
        fn test_overflow_cells_are_adjacent_months(year in 1990..2100i32, month in 1..=12u32) {
            let month_ref = MonthRef { year, month };
            let prev = month_ref.advance(-1);
            let next = month_ref.advance(1);

            for d in generate_grid(month_ref) {
                prop_assert!(
                    is_in_month(d, month_ref) || is_in_month(d, prev) || is_in_month(d, next),
                    "{} is more than one month from {:?}", d, month_ref
                );
            }
        }

        // Selectability is monotone inside the window and false outside it.
        #[test]
        fn test_selectability_is_monotone(
            offset_days in 0..365u64,
            window_days in 0..180u64,
            probe in 0..600u64,
        ) {
            let min = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + Days::new(offset_days);
            let max = min + Days::new(window_days);
            let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + Days::new(probe);

            let selectable = is_selectable(date, Some(min), Some(max));
            prop_assert_eq!(selectable, date >= min && date <= max);
        }

        // advance() round-trips and composes.
        #[test]
        fn test_advance_round_trip(year in 1990..2100i32, month in 1..=12u32, delta in -48..48i32) {
            let month_ref = MonthRef { year, month };
            let there = month_ref.advance(delta);

            prop_assert!((1..=12).contains(&there.month));
            prop_assert_eq!(there.advance(-delta), month_ref);
            prop_assert_eq!(month_ref.advance(delta + 1), there.advance(1));
        }
    }
}
