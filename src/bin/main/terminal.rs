use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use log::{debug, warn};
use wordpace_core::render::{Screen, SettingsPanel};

use super::render::{ScreenRenderer, format_setting, orp_padding, split_at_orp};

const WORD_ROW: u16 = 4;
const SETTINGS_TOP: u16 = 9;
const HELP_LINE: &str =
    "s start  space pause  x stop  up/down select  left/right edit  p rule  q quit";

/// Raw mode plus alternate screen, restored on drop.
pub(super) struct TerminalSession {
    stdout: Stdout,
}

impl TerminalSession {
    pub(super) fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        debug!("terminal session entered");
        Ok(Self { stdout })
    }

    pub(super) fn renderer(&mut self) -> TerminalRenderer<'_> {
        TerminalRenderer {
            out: &mut self.stdout,
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = execute!(self.stdout, Show, LeaveAlternateScreen) {
            warn!("failed to leave alternate screen: {err}");
        }
        if let Err(err) = disable_raw_mode() {
            warn!("failed to disable raw mode: {err}");
        }
        debug!("terminal session restored");
    }
}

pub(super) struct TerminalRenderer<'a> {
    out: &'a mut Stdout,
}

impl TerminalRenderer<'_> {
    fn header(&mut self, title: &str, right: &str) -> io::Result<()> {
        queue!(
            self.out,
            MoveTo(0, 0),
            SetAttribute(Attribute::Bold),
            Print(title),
            SetAttribute(Attribute::Reset),
            MoveTo(0, 1),
            SetForegroundColor(Color::DarkGrey),
            Print(right),
            ResetColor
        )
    }

    fn word(&mut self, width: u16, word: &str, orp_index: usize) -> io::Result<()> {
        let (before, pivot, after) = split_at_orp(word, orp_index);
        let column = orp_padding(width, before.chars().count());
        queue!(
            self.out,
            MoveTo(column, WORD_ROW),
            Print(before),
            SetForegroundColor(Color::Red),
            SetAttribute(Attribute::Bold),
            Print(pivot),
            SetAttribute(Attribute::Reset),
            ResetColor,
            Print(after)
        )
    }

    fn settings(&mut self, panel: SettingsPanel<'_>) -> io::Result<()> {
        for (row, setting) in (SETTINGS_TOP..).zip(panel.rows.iter()) {
            let selected = usize::from(row - SETTINGS_TOP) == panel.cursor;
            let marker = if selected { ">" } else { " " };
            queue!(self.out, MoveTo(0, row))?;
            if selected {
                queue!(self.out, SetAttribute(Attribute::Reverse))?;
            }
            queue!(
                self.out,
                Print(format!(
                    "{marker} {:<20}{:>12}",
                    setting.key,
                    format_setting(setting.value)
                )),
                SetAttribute(Attribute::Reset)
            )?;
        }

        let help_row = SETTINGS_TOP + panel.rows.len() as u16 + 1;
        queue!(
            self.out,
            MoveTo(0, help_row),
            SetForegroundColor(Color::DarkGrey),
            Print(HELP_LINE),
            ResetColor
        )
    }
}

impl ScreenRenderer for TerminalRenderer<'_> {
    fn render(&mut self, screen: Screen<'_>) -> io::Result<()> {
        let (width, _) = terminal::size()?;
        queue!(self.out, Clear(ClearType::All))?;

        match screen {
            Screen::Idle {
                title,
                preview,
                word_total,
                settings,
            } => {
                self.header(title, &format!("idle  {word_total} words"))?;
                queue!(self.out, MoveTo(0, WORD_ROW), Print(preview))?;
                self.settings(settings)?;
            }
            Screen::Reading {
                title,
                word,
                orp_index,
                progress,
                delay,
                state,
                settings,
            } => {
                self.header(title, &format!("{}  {progress}  {delay}", state.label()))?;
                self.word(width, word, orp_index)?;
                self.settings(settings)?;
            }
            Screen::Status {
                title,
                line1,
                line2,
            } => {
                self.header(title, "")?;
                queue!(
                    self.out,
                    MoveTo(0, WORD_ROW),
                    SetAttribute(Attribute::Bold),
                    Print(line1),
                    SetAttribute(Attribute::Reset),
                    MoveTo(0, WORD_ROW + 1),
                    Print(line2)
                )?;
            }
        }

        self.out.flush()
    }
}
