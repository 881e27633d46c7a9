use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Margin, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Clear, StatefulWidget, Widget},
};
use time::Month;

const OUTER_WIDTH: u16 = 16;
const OUTER_HEIGHT: u16 = 8;
const YEAR_DIGITS: usize = 4;
const ENTER_POS: usize = 6;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct JumpTo(pub(crate) Theme);

impl StatefulWidget for JumpTo {
    type State = JumpToState;

    /*
     * ................
     * .┌── Go To… ──┐.
     * .│            │.
     * .│  -YYYY-MM  │.
     * .│            │.
     * .│  [ENTER]   │.
     * .└────────────┘.
     * ................
     */

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [outer_area] = Layout::horizontal([OUTER_WIDTH])
            .flex(Flex::Center)
            .areas(area);
        let [outer_area] = Layout::vertical([OUTER_HEIGHT])
            .flex(Flex::Center)
            .areas(outer_area);
        Clear.render(outer_area, buf);
        Block::new().style(self.0.base_style()).render(outer_area, buf);
        let block_area = outer_area.inner(Margin::new(1, 1));
        Block::bordered()
            .title(" Go To… ")
            .title_alignment(Alignment::Center)
            .render(block_area, buf);
        let text_area = block_area.inner(Margin::new(1, 1));
        state.to_text(&self.0).render(text_area, buf);
    }
}

/// Digit-by-digit entry of a year and month
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct JumpToState {
    negative: bool,
    digits: [Option<u8>; ENTER_POS],
    pos: usize,
}

impl JumpToState {
    pub(crate) fn new() -> JumpToState {
        JumpToState::default()
    }

    fn to_text(self, theme: &Theme) -> Text<'static> {
        Text::from_iter([
            Line::styled("", theme.base_style()),
            self.to_line(theme),
            Line::styled("", theme.base_style()),
            // Only the "[ENTER]" text and not its centering padding should be
            // underlined, so style a span rather than the line:
            Line::from(Span::styled(
                "[ENTER]",
                if self.pos == ENTER_POS {
                    theme.ready_enter_style()
                } else {
                    theme.base_style()
                },
            )),
        ])
        .centered()
    }

    fn to_line(self, theme: &Theme) -> Line<'static> {
        let mut spans = vec![Span::styled(
            if self.negative { "-" } else { " " },
            theme.base_style(),
        )];
        for (i, dg) in self.digits.iter().enumerate() {
            if i == YEAR_DIGITS {
                spans.push(Span::styled("-", theme.base_style()));
            }
            spans.push(match dg {
                Some(d) => Span::styled(format!("{d}"), theme.base_style()),
                None => Span::styled(
                    if i < YEAR_DIGITS { "Y" } else { "M" },
                    theme.unfilled_style(),
                ),
            });
        }
        Line::from_iter(spans)
    }

    pub(crate) fn handle_input(&mut self, input: JumpToInput) -> JumpToOutput {
        match (input, self.pos) {
            (JumpToInput::Negative, 0) => {
                self.negative = !self.negative;
                JumpToOutput::Ok
            }
            (JumpToInput::Positive, 0) => {
                self.negative = false;
                JumpToOutput::Ok
            }
            (JumpToInput::Digit(d), 0..ENTER_POS) if d < 10 => {
                self.digits[self.pos] = Some(d);
                self.pos += 1;
                JumpToOutput::Ok
            }
            (JumpToInput::Backspace, 1..) => {
                self.pos -= 1;
                self.digits[self.pos] = None;
                JumpToOutput::Ok
            }
            (JumpToInput::Enter, ENTER_POS) => match self.value() {
                Some((year, month)) => JumpToOutput::Jump(year, month),
                None => JumpToOutput::Invalid,
            },
            _ => JumpToOutput::Invalid,
        }
    }

    // Returns `None` if the entered month is not in 1..=12
    fn value(&self) -> Option<(i32, Month)> {
        let (year_digits, month_digits) = self.digits.split_at(YEAR_DIGITS);
        let mut year = 0i32;
        for d in year_digits {
            year = year * 10 + i32::from((*d)?);
        }
        if self.negative {
            year *= -1;
        }
        let mut month = 0u8;
        for d in month_digits {
            month = month * 10 + (*d)?;
        }
        let month = Month::try_from(month).ok()?;
        Some((year, month))
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum JumpToInput {
    Negative,
    Positive,
    Digit(u8),
    Backspace,
    Enter,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum JumpToOutput {
    Ok,
    Invalid,
    Jump(i32, Month),
}
