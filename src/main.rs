mod app;
mod calendar;
mod help;
mod jumpto;
mod locale;
mod memo;
mod panel;
mod picker;
mod theme;
use crate::app::App;
use crate::calendar::WeekId;
use crate::locale::env_locale;
use crate::picker::{Mode, PanelConfig, PickerState, YMD_FMT};
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::process::ExitCode;
use time::{Date, OffsetDateTime};

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        mode: Mode,
        locale: Option<String>,
        start: Option<Date>,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut mode = Mode::Date;
        let mut locale = None;
        let mut start = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('w') | Arg::Long("week") => mode = Mode::Week,
                Arg::Short('l') | Arg::Long("locale") => locale = Some(parser.value()?.string()?),
                Arg::Value(value) if start.is_none() => {
                    let value = value.string()?;
                    match parse_start(&value) {
                        Ok(d) => start = Some(d),
                        Err(error) => return Err(lexopt::Error::ParsingFailed { value, error }),
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run {
            mode,
            locale,
            start,
        })
    }

    fn run(self) -> anyhow::Result<ExitCode> {
        match self {
            Command::Run {
                mode,
                locale,
                start,
            } => {
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let config = PanelConfig::new(mode, locale.unwrap_or_else(env_locale));
                let mut picker = PickerState::new(config, today)
                    .context("failed to display the current month")?;
                if let Some(date) = start {
                    picker
                        .set_cursor(date)
                        .with_context(|| format!("cannot display the month containing {date}"))?;
                }
                let selection = with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    Ok(App::new(picker).run(&mut terminal)?)
                })?;
                match selection {
                    Some(sel) => {
                        println!("{sel}");
                        Ok(ExitCode::SUCCESS)
                    }
                    None => Ok(ExitCode::FAILURE),
                }
            }
            Command::Help => {
                println!("Usage: calpick [-w|--week] [-l|--locale LOCALE] [YYYY-MM-DD | YYYY-Www]");
                println!();
                println!("Pick a date or an ISO week from a terminal calendar");
                println!();
                println!("The selection is printed on standard output.  Exits with status 1 if");
                println!("the picker is closed without selecting anything.");
                println!();
                println!("Options:");
                println!("  -l, --locale LOCALE");
                println!("                    Locale for weekday and month names [default: from");
                println!("                    LC_ALL, LC_TIME, or LANG]");
                println!("  -w, --week        Select an ISO week instead of a single date");
                println!("  -h, --help        Display this help message and exit");
                println!("  -V, --version     Show the program version and exit");
                Ok(ExitCode::SUCCESS)
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

/// Parses the date to start on, given either as a calendar date or as an ISO
/// week, in which case the week's Monday is used
fn parse_start(value: &str) -> Result<Date, Box<dyn std::error::Error + Send + Sync>> {
    if value.contains(['W', 'w']) {
        Ok(value.parse::<WeekId>()?.monday()?)
    } else {
        Ok(Date::parse(value, &YMD_FMT)?)
    }
}

fn main() -> anyhow::Result<ExitCode> {
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
