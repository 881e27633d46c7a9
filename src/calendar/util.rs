use super::OutOfTimeError;
use std::iter::successors;
use time::{Date, Duration, Weekday};

pub(crate) const DAYS_IN_WEEK: usize = 7;

pub(crate) trait WeekdayExt {
    /// Position within a Monday-first week, 0 through 6
    fn index0(&self) -> usize;

    /// ISO-8601 weekday number: Monday is 1, Sunday is 7
    fn iso_number(&self) -> u8;
}

impl WeekdayExt for Weekday {
    fn index0(&self) -> usize {
        self.number_days_from_monday().into()
    }

    fn iso_number(&self) -> u8 {
        self.number_from_monday()
    }
}

/// Monday-first weekday of a Julian day number.  Julian day 0 was a Monday.
pub(super) fn iso_weekday_of_julian_day(jd: i32) -> u8 {
    u8::try_from(jd.rem_euclid(7) + 1).expect("weekday number should fit in a u8")
}

pub(super) fn iter_days_after(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.next_day()).skip(1)
}

pub(super) fn iter_days_before(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.previous_day()).skip(1)
}

/// Returns the date `n` days before or after `date`, depending on the sign of
/// `n`
pub(crate) fn add_days(date: Date, n: i64) -> Result<Date, OutOfTimeError> {
    date.checked_add(Duration::days(n)).ok_or(OutOfTimeError)
}

/// Returns the Monday on or before `date`
pub(crate) fn monday_of(date: Date) -> Result<Date, OutOfTimeError> {
    let back = date.weekday().index0();
    if back == 0 {
        return Ok(date);
    }
    iter_days_before(date).nth(back - 1).ok_or(OutOfTimeError)
}

/// Returns the Sunday on or after `date`
pub(crate) fn sunday_of(date: Date) -> Result<Date, OutOfTimeError> {
    let ahead = DAYS_IN_WEEK - 1 - date.weekday().index0();
    if ahead == 0 {
        return Ok(date);
    }
    iter_days_after(date).nth(ahead - 1).ok_or(OutOfTimeError)
}

/// Returns the last day of the month containing `date`
pub(crate) fn last_of_month(date: Date) -> Date {
    let month = date.month();
    iter_days_after(date)
        .take_while(|d| d.month() == month)
        .last()
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_sunday_is_seven() {
        assert_eq!(Weekday::Sunday.iso_number(), 7);
        assert_eq!(Weekday::Monday.iso_number(), 1);
        assert_eq!(Weekday::Sunday.index0(), 6);
    }

    #[test]
    fn test_julian_day_weekday() {
        for d in [date!(2000 - 01 - 01), date!(2023 - 01 - 01), date!(2024 - 02 - 29)] {
            assert_eq!(
                iso_weekday_of_julian_day(d.to_julian_day()),
                d.weekday().iso_number()
            );
        }
    }

    #[test]
    fn test_monday_of() {
        assert_eq!(monday_of(date!(2023 - 11 - 16)), Ok(date!(2023 - 11 - 13)));
        assert_eq!(monday_of(date!(2023 - 11 - 13)), Ok(date!(2023 - 11 - 13)));
        assert_eq!(monday_of(date!(2023 - 11 - 19)), Ok(date!(2023 - 11 - 13)));
    }

    #[test]
    fn test_sunday_of() {
        assert_eq!(sunday_of(date!(2023 - 11 - 13)), Ok(date!(2023 - 11 - 19)));
        assert_eq!(sunday_of(date!(2023 - 11 - 19)), Ok(date!(2023 - 11 - 19)));
    }

    #[test]
    fn test_last_of_month() {
        assert_eq!(last_of_month(date!(2024 - 02 - 10)), date!(2024 - 02 - 29));
        assert_eq!(last_of_month(date!(2023 - 02 - 28)), date!(2023 - 02 - 28));
        assert_eq!(last_of_month(date!(2023 - 12 - 01)), date!(2023 - 12 - 31));
    }

    #[test]
    fn test_end_of_time() {
        assert_eq!(sunday_of(Date::MAX), Err(OutOfTimeError));
        assert_eq!(add_days(Date::MAX, 1), Err(OutOfTimeError));
    }
}
