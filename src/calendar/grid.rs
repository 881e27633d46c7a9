use super::OutOfTimeError;
use super::util::{DAYS_IN_WEEK, iter_days_after, last_of_month, monday_of, sunday_of};
use time::{Date, Month};

/// The dates displayed for one month: whole Monday-to-Sunday weeks covering
/// the month, padded with days from the adjacent months
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct CalendarGrid {
    year: i32,
    month: Month,
    // Invariant: Nonempty, a multiple of DAYS_IN_WEEK long, starts on a
    // Monday, and consists of consecutive days
    dates: Vec<Date>,
}

impl CalendarGrid {
    pub(crate) fn year(&self) -> i32 {
        self.year
    }

    pub(crate) fn month(&self) -> Month {
        self.month
    }

    pub(crate) fn dates(&self) -> &[Date] {
        &self.dates
    }

    pub(crate) fn len(&self) -> usize {
        self.dates.len()
    }

    /// Iterates over the rows of the grid, each running from Monday to Sunday
    pub(crate) fn weeks(&self) -> impl Iterator<Item = &[Date]> + '_ {
        self.dates().chunks_exact(DAYS_IN_WEEK)
    }

    /// Is `date` part of the grid's month rather than padding from an
    /// adjacent month?
    pub(crate) fn in_month(&self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// Returns the calendar grid for the given month
pub(crate) fn build_calendar_grid(year: i32, month: Month) -> Result<CalendarGrid, OutOfTimeError> {
    let first = Date::from_calendar_date(year, month, 1).map_err(|_| OutOfTimeError)?;
    let start = monday_of(first)?;
    let end = sunday_of(last_of_month(first))?;
    let mut dates = vec![start];
    dates.extend(iter_days_after(start).take_while(|&d| d <= end));
    debug_assert_eq!(dates.len() % DAYS_IN_WEEK, 0);
    Ok(CalendarGrid { year, month, dates })
}

/// Converts a zero-based month index to a year and month.  Indices outside
/// `0..12` roll over into adjacent years, so that `-1` is December of the
/// previous year and `12` is January of the next.
pub(crate) fn month_from_index(month0: i32, year: i32) -> Result<(i32, Month), OutOfTimeError> {
    let year = year
        .checked_add(month0.div_euclid(12))
        .ok_or(OutOfTimeError)?;
    let number = u8::try_from(month0.rem_euclid(12) + 1).expect("month number should fit in a u8");
    let month = Month::try_from(number).expect("month number should be in 1..=12");
    Ok((year, month))
}

/// Returns the calendar grid for a zero-based month index, rolling over into
/// adjacent years as [`month_from_index`] does
#[cfg_attr(not(test), allow(dead_code))]
pub(crate) fn grid_for_month_index(month0: i32, year: i32) -> Result<CalendarGrid, OutOfTimeError> {
    let (year, month) = month_from_index(month0, year)?;
    build_calendar_grid(year, month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::util::WeekdayExt;
    use proptest::prelude::*;
    use time::{Weekday, macros::date};

    fn ends(grid: &CalendarGrid) -> (Date, Date) {
        let dates = grid.dates();
        (dates[0], dates[dates.len() - 1])
    }

    #[test]
    fn test_january_2025() {
        let grid = grid_for_month_index(0, 2025).unwrap();
        assert_eq!(grid.year(), 2025);
        assert_eq!(grid.month(), Month::January);
        assert_eq!(ends(&grid), (date!(2024 - 12 - 30), date!(2025 - 02 - 02)));
        assert_eq!(grid.len(), 35);
    }

    #[test]
    fn test_month_starting_on_monday() {
        // January 2024 begins on a Monday and ends on a Wednesday
        let grid = build_calendar_grid(2024, Month::January).unwrap();
        assert_eq!(ends(&grid), (date!(2024 - 01 - 01), date!(2024 - 02 - 04)));
        assert_eq!(grid.len(), 35);
    }

    #[test]
    fn test_month_starting_on_sunday() {
        // September 2024 begins on a Sunday, so six days of August lead it
        let grid = build_calendar_grid(2024, Month::September).unwrap();
        assert_eq!(ends(&grid), (date!(2024 - 08 - 26), date!(2024 - 10 - 06)));
        assert_eq!(grid.len(), 42);
    }

    #[test]
    fn test_exact_four_weeks() {
        // February 2021 runs from Monday the 1st to Sunday the 28th
        let grid = build_calendar_grid(2021, Month::February).unwrap();
        assert_eq!(ends(&grid), (date!(2021 - 02 - 01), date!(2021 - 02 - 28)));
        assert_eq!(grid.len(), 28);
        assert!(grid.dates().iter().all(|&d| grid.in_month(d)));
    }

    #[test]
    fn test_month_from_index() {
        assert_eq!(month_from_index(0, 2025), Ok((2025, Month::January)));
        assert_eq!(month_from_index(11, 2025), Ok((2025, Month::December)));
        assert_eq!(month_from_index(-12, 2025), Ok((2024, Month::January)));
        assert_eq!(month_from_index(-1, i32::MIN), Err(OutOfTimeError));
    }

    #[test]
    fn test_month_index_overflow() {
        let grid = grid_for_month_index(12, 2024).unwrap();
        assert_eq!((grid.year(), grid.month()), (2025, Month::January));
        let grid = grid_for_month_index(-1, 2025).unwrap();
        assert_eq!((grid.year(), grid.month()), (2024, Month::December));
        let grid = grid_for_month_index(-13, 2025).unwrap();
        assert_eq!((grid.year(), grid.month()), (2023, Month::December));
        let grid = grid_for_month_index(25, 2025).unwrap();
        assert_eq!((grid.year(), grid.month()), (2027, Month::February));
    }

    #[test]
    fn test_weeks() {
        let grid = build_calendar_grid(2025, Month::January).unwrap();
        let weeks = grid.weeks().collect::<Vec<_>>();
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0][0], date!(2024 - 12 - 30));
        assert_eq!(weeks[0][6], date!(2025 - 01 - 05));
        assert_eq!(weeks[1][0], date!(2025 - 01 - 06));
        assert_eq!(weeks[4][6], date!(2025 - 02 - 02));
        assert!(!grid.in_month(date!(2024 - 12 - 31)));
        assert!(grid.in_month(date!(2025 - 01 - 01)));
    }

    #[test]
    fn test_end_of_time() {
        // December 9999 ends on a Friday, and the following Sunday is not
        // representable
        assert_eq!(build_calendar_grid(9999, Month::December), Err(OutOfTimeError));
        assert!(build_calendar_grid(9999, Month::November).is_ok());
        assert_eq!(grid_for_month_index(0, 10000), Err(OutOfTimeError));
        assert_eq!(grid_for_month_index(0, i32::MAX), Err(OutOfTimeError));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn prop_whole_weeks(year in 1i32..9999, month0 in 0i32..12) {
            let grid = grid_for_month_index(month0, year).unwrap();
            prop_assert_eq!(grid.len() % DAYS_IN_WEEK, 0);
            let (start, end) = ends(&grid);
            prop_assert_eq!(start.weekday(), Weekday::Monday);
            prop_assert_eq!(end.weekday(), Weekday::Sunday);
        }

        #[test]
        fn prop_covers_month_once(year in 1i32..9999, month0 in 0i32..12) {
            let grid = grid_for_month_index(month0, year).unwrap();
            let first = Date::from_calendar_date(grid.year(), grid.month(), 1).unwrap();
            let last = last_of_month(first);
            let in_month = grid.dates().iter().filter(|&&d| grid.in_month(d)).count();
            prop_assert_eq!(in_month, usize::from(last.day()));
            for (a, b) in grid.dates().iter().zip(grid.dates().iter().skip(1)) {
                prop_assert_eq!(a.next_day(), Some(*b));
            }
            prop_assert!(grid.dates().contains(&first) && grid.dates().contains(&last));
        }

        #[test]
        fn prop_minimal_padding(year in 1i32..9999, month0 in 0i32..12) {
            let grid = grid_for_month_index(month0, year).unwrap();
            let first = Date::from_calendar_date(grid.year(), grid.month(), 1).unwrap();
            let leading = grid.dates().iter().take_while(|&&d| d < first).count();
            prop_assert_eq!(leading, first.weekday().index0());
            let trailing = grid.dates().iter().rev().take_while(|&&d| !grid.in_month(d)).count();
            prop_assert!(trailing < DAYS_IN_WEEK);
        }

        #[test]
        fn prop_idempotent(year in -9000i32..9000, month0 in -24i32..36) {
            prop_assert_eq!(grid_for_month_index(month0, year), grid_for_month_index(month0, year));
        }
    }
}
