mod grid;
mod isoweek;
mod util;
pub(crate) use self::grid::{CalendarGrid, build_calendar_grid, month_from_index};
pub(crate) use self::isoweek::{WeekId, iso_week_of};
pub(crate) use self::util::{DAYS_IN_WEEK, add_days, last_of_month};
use thiserror::Error;

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of time")]
pub(crate) struct OutOfTimeError;
