use ratatui::style::{Color, Modifier, Style};

/// Named color tokens for one picker panel.  Each panel is handed its own
/// `Theme`, so several panels can be styled independently.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Theme {
    pub(crate) text: Color,
    pub(crate) background: Color,
    /// Days belonging to the months before and after the displayed one
    pub(crate) muted: Color,
    /// Titles, weekday labels, and week numbers
    pub(crate) accent: Color,
    pub(crate) today: Color,
    pub(crate) cursor: Color,
    pub(crate) selected: Color,
}

impl Theme {
    pub(crate) const fn base_style(&self) -> Style {
        Style::new().fg(self.text).bg(self.background)
    }

    pub(crate) const fn heading_style(&self) -> Style {
        self.base_style().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub(crate) const fn week_number_style(&self) -> Style {
        self.base_style().fg(self.accent)
    }

    pub(crate) const fn outside_month_style(&self) -> Style {
        self.base_style().fg(self.muted)
    }

    pub(crate) const fn today_style(&self) -> Style {
        self.base_style().fg(self.today).add_modifier(Modifier::BOLD)
    }

    pub(crate) const fn cursor_style(&self) -> Style {
        self.base_style().fg(self.background).bg(self.cursor)
    }

    pub(crate) const fn selected_style(&self) -> Style {
        self.base_style().fg(self.background).bg(self.selected)
    }

    pub(crate) const fn unfilled_style(&self) -> Style {
        self.base_style().fg(self.muted)
    }

    pub(crate) const fn ready_enter_style(&self) -> Style {
        self.base_style().add_modifier(Modifier::UNDERLINED)
    }
}

impl Default for Theme {
    fn default() -> Theme {
        Theme {
            text: Color::White,
            background: Color::Black,
            muted: Color::DarkGray,
            accent: Color::LightCyan,
            today: Color::LightYellow,
            cursor: Color::White,
            selected: Color::LightBlue,
        }
    }
}
