use crate::calendar::{CalendarGrid, DAYS_IN_WEEK, iso_week_of};
use crate::locale::month_name;
use crate::picker::{PickerState, YMD_FMT};
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Paragraph, StatefulWidget, Widget},
};
use std::iter::once;
use time::Date;

/// Number of columns taken up by the week-number column and by each day
const CELL_WIDTH: u16 = 4;

/// Width of the panel: the week-number column plus seven days
pub(crate) const PANEL_WIDTH: u16 = CELL_WIDTH * 8;

const ACS_HLINE: char = '─';

/// A month panel for picking a date or a week.
///
/// ```text
///         ‹ January 2025 ›
/// Wk    M   T   W   T   F   S   S
/// ────────────────────────────────
///  1   30  31   1   2   3   4   5
///  …
///  4   20  21 [22] 23  24  25  26
///  …
///
///      2025-01-22 · 2025-W04
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Panel;

impl StatefulWidget for Panel {
    type State = PickerState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut PickerState) {
        let style = state.config().theme.base_style();
        let text = panel_text(state);
        let height = u16::try_from(text.height()).unwrap_or(u16::MAX);
        let [area] = Layout::horizontal([PANEL_WIDTH])
            .flex(Flex::Center)
            .areas(area);
        let [area] = Layout::vertical([height]).flex(Flex::Start).areas(area);
        Paragraph::new(text).style(style).render(area, buf);
    }
}

fn panel_text(state: &mut PickerState) -> Text<'static> {
    let theme = state.config().theme;
    let labels = state.weekday_labels().clone();
    let grid = state.grid().clone();
    let title = format!(
        "‹ {} {} ›",
        month_name(&state.config().locale, grid.month()),
        grid.year()
    );
    let mut lines = Vec::with_capacity(grid.len() / DAYS_IN_WEEK + 5);
    lines.extend([
        Line::styled(title, theme.heading_style()).centered(),
        Line::from_iter(
            once(Span::styled("Wk  ", theme.heading_style())).chain(
                labels
                    .iter()
                    .map(|l| Span::styled(format!(" {l:>2} "), theme.heading_style())),
            ),
        ),
        Line::styled(
            String::from(ACS_HLINE).repeat(PANEL_WIDTH.into()),
            theme.base_style(),
        ),
    ]);
    for week in grid.weeks() {
        let Some(&monday) = week.first() else {
            continue;
        };
        let number = Span::styled(
            format!("{:>2}  ", iso_week_of(monday).week()),
            theme.week_number_style(),
        );
        lines.push(Line::from_iter(
            once(number).chain(week.iter().map(|&d| day_span(state, &grid, d))),
        ));
    }
    lines.push(Line::raw(""));
    lines.push(status_line(state).centered());
    Text::from(lines)
}

fn day_span(state: &PickerState, grid: &CalendarGrid, date: Date) -> Span<'static> {
    let theme = &state.config().theme;
    let is_today = date == state.today();
    let s = if is_today {
        format!("[{:2}]", date.day())
    } else {
        format!(" {:2} ", date.day())
    };
    let style = if state.is_selected(date) {
        theme.selected_style()
    } else if state.is_cursor(date) {
        theme.cursor_style()
    } else if is_today {
        theme.today_style()
    } else if !grid.in_month(date) {
        theme.outside_month_style()
    } else {
        theme.base_style()
    };
    Span::styled(s, style)
}

fn status_line(state: &PickerState) -> Line<'static> {
    let cursor = state.cursor();
    let date = cursor.format(&YMD_FMT).unwrap_or_default();
    Line::styled(
        format!("{date} · {}", iso_week_of(cursor)),
        state.config().theme.base_style(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::{Mode, PanelConfig};
    use ratatui::style::Color;
    use time::macros::date;

    fn render(state: &mut PickerState, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buffer = Buffer::empty(area);
        Panel.render(area, &mut buffer, state);
        buffer
    }

    fn symbols(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn picker(mode: Mode, locale: &str, today: Date) -> PickerState {
        PickerState::new(PanelConfig::new(mode, String::from(locale)), today).unwrap()
    }

    #[test]
    fn test_january_2025() {
        let mut state = picker(Mode::Date, "en_US", date!(2025 - 01 - 22));
        let buffer = render(&mut state, 32, 11);
        assert_eq!(
            symbols(&buffer),
            [
                "        ‹ January 2025 ›        ",
                "Wk    M   T   W   T   F   S   S ",
                "────────────────────────────────",
                " 1   30  31   1   2   3   4   5 ",
                " 2    6   7   8   9  10  11  12 ",
                " 3   13  14  15  16  17  18  19 ",
                " 4   20  21 [22] 23  24  25  26 ",
                " 5   27  28  29  30  31   1   2 ",
                "                                ",
                "      2025-01-22 · 2025-W04     ",
                "                                ",
            ]
        );
        let theme = state.config().theme;
        // Padding from December
        assert_eq!(buffer[(4, 3)].fg, theme.muted);
        // Today, under the cursor
        assert_eq!(buffer[(12, 6)].bg, theme.cursor);
        // An ordinary day
        assert_eq!(buffer[(16, 6)].fg, theme.text);
        // Week number
        assert_eq!(buffer[(1, 6)].fg, theme.accent);
    }

    #[test]
    fn test_week_mode_highlights_row() {
        let mut state = picker(Mode::Week, "en_US", date!(2025 - 01 - 22));
        state.move_weeks(1).unwrap();
        state.select();
        state.move_weeks(-2).unwrap();
        let buffer = render(&mut state, 32, 11);
        let theme = state.config().theme;
        for x in 4..32 {
            assert_eq!(buffer[(x, 7)].bg, theme.selected, "x = {x}");
            assert_eq!(buffer[(x, 5)].bg, theme.cursor, "x = {x}");
            assert_eq!(buffer[(x, 4)].bg, Color::Black, "x = {x}");
        }
        assert_eq!(symbols(&buffer)[9], "      2025-01-15 · 2025-W03     ");
    }

    #[test]
    fn test_localized_header() {
        let mut state = picker(Mode::Date, "fr_FR", date!(2025 - 01 - 22));
        let buffer = render(&mut state, 32, 11);
        let lines = symbols(&buffer);
        assert_eq!(lines[0], "        ‹ janvier 2025 ›        ");
        assert_eq!(lines[1], "Wk    L   M   M   J   V   S   D ");
    }

    #[test]
    fn test_centered_in_wider_area() {
        let mut state = picker(Mode::Date, "C", date!(2021 - 02 - 10));
        let buffer = render(&mut state, 40, 10);
        let lines = symbols(&buffer);
        assert_eq!(lines[3], "     5    1   2   3   4   5   6   7     ");
        assert_eq!(lines[6], "     8   22  23  24  25  26  27  28     ");
        assert_eq!(lines[7], "                                        ");
    }
}
