use super::OutOfTimeError;
use super::util::{WeekdayExt, iso_weekday_of_julian_day};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use time::{
    Date, Weekday,
    util::{days_in_year, weeks_in_year},
};

/// An ISO-8601 week, identified by its week-year and week number
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct WeekId {
    // The ISO week-year, which differs from the calendar year for some days
    // at the very start or end of a year
    year: i32,
    // Invariant: 1 <= week <= weeks_in_year(year)
    week: u8,
}

impl WeekId {
    pub(crate) fn new(week_year: i32, week: u8) -> Result<WeekId, InvalidWeekError> {
        if (1..=weeks_in_year(week_year)).contains(&week) {
            Ok(WeekId {
                year: week_year,
                week,
            })
        } else {
            Err(InvalidWeekError { week_year, week })
        }
    }

    pub(crate) fn week_year(&self) -> i32 {
        self.year
    }

    pub(crate) fn week(&self) -> u8 {
        self.week
    }

    pub(crate) fn monday(&self) -> Result<Date, OutOfTimeError> {
        Date::from_iso_week_date(self.year, self.week, Weekday::Monday).map_err(|_| OutOfTimeError)
    }

    pub(crate) fn contains(&self, date: Date) -> bool {
        iso_week_of(date) == *self
    }
}

impl fmt::Display for WeekId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.week_year();
        let sign = if year < 0 { "-" } else { "" };
        write!(f, "{sign}{:04}-W{:02}", year.unsigned_abs(), self.week())
    }
}

impl FromStr for WeekId {
    type Err = ParseWeekError;

    /// Parses `YYYY-Www`, or `YYYY-ww` without the `W`
    fn from_str(s: &str) -> Result<WeekId, ParseWeekError> {
        let (year, week) = s.rsplit_once('-').ok_or(ParseWeekError::Format)?;
        let week = week.strip_prefix(['W', 'w']).unwrap_or(week);
        if year.is_empty() || week.is_empty() || week.len() > 2 {
            return Err(ParseWeekError::Format);
        }
        let year = year.parse::<i32>().map_err(|_| ParseWeekError::Format)?;
        let week = week.parse::<u8>().map_err(|_| ParseWeekError::Format)?;
        Ok(WeekId::new(year, week)?)
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("ISO week-year {week_year} has no week {week}")]
pub(crate) struct InvalidWeekError {
    week_year: i32,
    week: u8,
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum ParseWeekError {
    #[error("expected a week of the form YYYY-Www")]
    Format,
    #[error(transparent)]
    Week(#[from] InvalidWeekError),
}

/// Returns the ISO week containing `date`.
///
/// The date is moved to the Thursday of its Monday-to-Sunday week; that
/// Thursday's year is the week-year, and the week number counts Thursdays
/// from the Thursday of the week containing January 4th of the week-year.
/// Everything is done on Julian day numbers, as the Thursday of a week at
/// the edge of time may not be representable as a `Date`.
pub(crate) fn iso_week_of(date: Date) -> WeekId {
    let jd = date.to_julian_day();
    let thursday = jd + 4 - i32::from(date.weekday().iso_number());
    let year = date.year();
    let jan1 = jd - i32::from(date.ordinal()) + 1;
    let next_jan1 = jan1 + i32::from(days_in_year(year));
    let (week_year, week_year_jan1) = if thursday < jan1 {
        (year - 1, jan1 - i32::from(days_in_year(year - 1)))
    } else if thursday >= next_jan1 {
        (year + 1, next_jan1)
    } else {
        (year, jan1)
    };
    let jan4 = week_year_jan1 + 3;
    let jan4_thursday = jan4 + 4 - i32::from(iso_weekday_of_julian_day(jan4));
    let days = thursday - jan4_thursday;
    // ceil((days + 1) / 7) for nonnegative `days`
    let week = (days + 7) / 7;
    WeekId {
        year: week_year,
        week: u8::try_from(week).expect("ISO week number should fit in a u8"),
    }
}
