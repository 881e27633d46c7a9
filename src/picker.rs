use crate::calendar::{
    CalendarGrid, OutOfTimeError, WeekId, add_days, build_calendar_grid, iso_week_of,
    last_of_month, month_from_index,
};
use crate::locale::weekday_initials;
use crate::memo::Memo;
use crate::theme::Theme;
use std::fmt;
use time::{Date, Month, format_description::BorrowedFormatItem, macros::format_description};

pub(crate) static YMD_FMT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Mode {
    Date,
    Week,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Selection {
    Date(Date),
    Week(WeekId),
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Date(date) => {
                let s = date.format(&YMD_FMT).map_err(|_| fmt::Error)?;
                write!(f, "{s}")
            }
            Selection::Week(week) => write!(f, "{week}"),
        }
    }
}

/// Settings belonging to a single picker panel
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct PanelConfig {
    pub(crate) mode: Mode,
    pub(crate) locale: String,
    pub(crate) theme: Theme,
}

impl PanelConfig {
    pub(crate) fn new(mode: Mode, locale: String) -> Self {
        PanelConfig {
            mode,
            locale,
            theme: Theme::default(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct PickerState {
    config: PanelConfig,
    today: Date,
    // The day under the cursor.  The panel always displays the cursor's
    // month.
    cursor: Date,
    selection: Option<Selection>,
    grid: Memo<(i32, Month), CalendarGrid>,
    labels: Memo<String, [String; 7]>,
}

impl PickerState {
    pub(crate) fn new(config: PanelConfig, today: Date) -> Result<Self, OutOfTimeError> {
        let mut state = PickerState {
            config,
            today,
            cursor: today,
            selection: None,
            grid: Memo::new(),
            labels: Memo::new(),
        };
        state.set_cursor(today)?;
        Ok(state)
    }

    pub(crate) fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub(crate) fn mode(&self) -> Mode {
        self.config.mode
    }

    pub(crate) fn toggle_mode(&mut self) {
        self.config.mode = match self.mode() {
            Mode::Date => Mode::Week,
            Mode::Week => Mode::Date,
        };
        self.selection = None;
    }

    pub(crate) fn today(&self) -> Date {
        self.today
    }

    pub(crate) fn cursor(&self) -> Date {
        self.cursor
    }

    pub(crate) fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Moves the cursor to `date`.  Fails, leaving the cursor in place, if
    /// the grid for `date`'s month would extend past the end of time.
    pub(crate) fn set_cursor(&mut self, date: Date) -> Result<(), OutOfTimeError> {
        self.grid
            .try_get_or_compute((date.year(), date.month()), |&(year, month)| {
                build_calendar_grid(year, month)
            })?;
        self.cursor = date;
        Ok(())
    }

    pub(crate) fn move_days(&mut self, n: i64) -> Result<(), OutOfTimeError> {
        self.set_cursor(add_days(self.cursor, n)?)
    }

    pub(crate) fn move_weeks(&mut self, n: i64) -> Result<(), OutOfTimeError> {
        self.move_days(n.checked_mul(7).ok_or(OutOfTimeError)?)
    }

    /// Moves the cursor `n` months forwards or backwards, keeping its day of
    /// the month where possible and otherwise using the last day of the
    /// target month
    pub(crate) fn move_months(&mut self, n: i32) -> Result<(), OutOfTimeError> {
        let month0 = i32::from(u8::from(self.cursor.month()) - 1)
            .checked_add(n)
            .ok_or(OutOfTimeError)?;
        let (year, month) = month_from_index(month0, self.cursor.year())?;
        self.go_to_month(year, month)
    }

    pub(crate) fn go_to_month(&mut self, year: i32, month: Month) -> Result<(), OutOfTimeError> {
        let first = Date::from_calendar_date(year, month, 1).map_err(|_| OutOfTimeError)?;
        let last = last_of_month(first);
        let day = self.cursor.day().min(last.day());
        let date = Date::from_calendar_date(year, month, day).map_err(|_| OutOfTimeError)?;
        self.set_cursor(date)
    }

    pub(crate) fn go_to_today(&mut self) -> Result<(), OutOfTimeError> {
        self.set_cursor(self.today)
    }

    /// Selects the date or week under the cursor, depending on the mode
    pub(crate) fn select(&mut self) -> Selection {
        let selection = match self.mode() {
            Mode::Date => Selection::Date(self.cursor),
            Mode::Week => Selection::Week(iso_week_of(self.cursor)),
        };
        self.selection = Some(selection);
        selection
    }

    pub(crate) fn is_selected(&self, date: Date) -> bool {
        match self.selection {
            Some(Selection::Date(d)) => d == date,
            Some(Selection::Week(w)) => w.contains(date),
            None => false,
        }
    }

    /// Is `date` under the cursor?  In week mode, the cursor covers the
    /// whole week.
    pub(crate) fn is_cursor(&self, date: Date) -> bool {
        match self.mode() {
            Mode::Date => date == self.cursor,
            Mode::Week => iso_week_of(date) == iso_week_of(self.cursor),
        }
    }

    pub(crate) fn grid(&mut self) -> &CalendarGrid {
        self.grid
            .try_get_or_compute((self.cursor.year(), self.cursor.month()), |&(year, month)| {
                build_calendar_grid(year, month)
            })
            .expect("grid for the cursor's month should have been validated by set_cursor()")
    }

    pub(crate) fn weekday_labels(&mut self) -> &[String; 7] {
        self.labels
            .get_or_compute(self.config.locale.clone(), |locale| weekday_initials(locale))
    }
}
