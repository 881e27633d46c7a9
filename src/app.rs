use crate::help::Help;
use crate::jumpto::{JumpTo, JumpToInput, JumpToOutput, JumpToState};
use crate::panel::Panel;
use crate::picker::{PickerState, Selection};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};
use ratatui::{
    Terminal,
    backend::Backend,
    buffer::Buffer,
    layout::Rect,
    widgets::{StatefulWidget, Widget},
};
use std::io::{self, Write};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    picker: PickerState,
    state: AppState,
}

impl App {
    pub(crate) fn new(picker: PickerState) -> App {
        App {
            picker,
            state: AppState::Picking,
        }
    }

    /// Runs the picker until the user selects a date or week, which is
    /// returned, or quits, in which case `None` is returned
    pub(crate) fn run<B: Backend>(
        mut self,
        terminal: &mut Terminal<B>,
    ) -> io::Result<Option<Selection>> {
        while !self.quitting() {
            self.draw(terminal)?;
            self.handle_input()?;
        }
        Ok(self.picker.selection())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(&mut *self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = read()?
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key or tried to move
    // past the end of time
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match &mut self.state {
            AppState::Picking => match key {
                KeyCode::Char('h') | KeyCode::Left => self.picker.move_days(-1).is_ok(),
                KeyCode::Char('l') | KeyCode::Right => self.picker.move_days(1).is_ok(),
                KeyCode::Char('k') | KeyCode::Up => self.picker.move_weeks(-1).is_ok(),
                KeyCode::Char('j') | KeyCode::Down => self.picker.move_weeks(1).is_ok(),
                KeyCode::Char('p') | KeyCode::PageUp => self.picker.move_months(-1).is_ok(),
                KeyCode::Char('n') | KeyCode::PageDown => self.picker.move_months(1).is_ok(),
                KeyCode::Char('0') | KeyCode::Home => self.picker.go_to_today().is_ok(),
                KeyCode::Char('t') => {
                    self.picker.toggle_mode();
                    true
                }
                KeyCode::Char('g') => {
                    self.state = AppState::Jumping(JumpToState::new());
                    true
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.picker.select();
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Picking;
                true
            }
            AppState::Jumping(state) => {
                if matches!(key, KeyCode::Char('q' | 'g') | KeyCode::Esc) {
                    self.state = AppState::Picking;
                    true
                } else {
                    let output = match key {
                        KeyCode::Char('-') => state.handle_input(JumpToInput::Negative),
                        KeyCode::Char('+') => state.handle_input(JumpToInput::Positive),
                        KeyCode::Char(c) => match c.to_digit(10).and_then(|d| u8::try_from(d).ok())
                        {
                            Some(d) => state.handle_input(JumpToInput::Digit(d)),
                            None => JumpToOutput::Invalid,
                        },
                        KeyCode::Backspace | KeyCode::Delete => {
                            state.handle_input(JumpToInput::Backspace)
                        }
                        KeyCode::Enter => state.handle_input(JumpToInput::Enter),
                        _ => JumpToOutput::Invalid,
                    };
                    match output {
                        JumpToOutput::Ok => true,
                        JumpToOutput::Invalid => false,
                        JumpToOutput::Jump(year, month) => {
                            self.state = AppState::Picking;
                            self.picker.go_to_month(year, month).is_ok()
                        }
                    }
                }
            }
            AppState::Quitting => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.picker.config().theme;
        buf.set_style(area, theme.base_style());
        Panel.render(area, buf, &mut self.picker);
        if self.state == AppState::Helping {
            Help(theme).render(area, buf);
        } else if let AppState::Jumping(ref mut state) = self.state {
            JumpTo(theme).render(area, buf, state);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Picking,
    Helping,
    Jumping(JumpToState),
    Quitting,
}
