use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Clear, Paragraph, Widget},
};

/// Key bindings and what they do, in display order
static BINDINGS: &[(&str, &str)] = &[
    ("h, LEFT", "Previous day"),
    ("l, RIGHT", "Next day"),
    ("k, UP", "Previous week"),
    ("j, DOWN", "Next week"),
    ("p, PAGE UP", "Previous month"),
    ("n, PAGE DOWN", "Next month"),
    ("0, HOME", "Jump to today"),
    ("g", "Input month to jump to"),
    ("t", "Toggle date/week mode"),
    ("ENTER, SPACE", "Select and quit"),
    ("?", "Show this help"),
    ("q, ESC", "Quit without selecting"),
];

const KEY_COLUMN: usize = 16;

const DISMISS: &str = "Press the Any Key to dismiss.";

/// Overlay listing the key bindings
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Help(pub(crate) Theme);

impl Help {
    fn text(self) -> Text<'static> {
        let theme = self.0;
        let mut lines = BINDINGS
            .iter()
            .map(|&(keys, action)| {
                Line::from_iter([
                    Span::styled(
                        format!("{keys:<width$}", width = KEY_COLUMN),
                        theme.heading_style(),
                    ),
                    Span::styled(action, theme.base_style()),
                ])
            })
            .collect::<Vec<_>>();
        lines.push(Line::raw(""));
        lines.push(Line::styled(DISMISS, theme.outside_month_style()));
        Text::from(lines)
    }
}

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.text();
        let height = u16::try_from(text.height())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
            .min(area.height);
        let width = u16::try_from(text.width())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
            .min(area.width);
        let block = Block::bordered()
            .title(Line::styled(" Commands ", self.0.heading_style()))
            .title_alignment(Alignment::Center);
        let [help_area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
        let [help_area] = Layout::vertical([height])
            .flex(Flex::Center)
            .areas(help_area);
        Clear.render(help_area, buf);
        Paragraph::new(text)
            .block(block)
            .style(self.0.base_style())
            .render(help_area, buf);
    }
}
