use std::{io, time::Duration};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::trace;
use wordpace_core::input::{InputEvent, InputProvider};

/// Non-blocking keyboard source backed by the crossterm event queue.
#[derive(Debug, Default)]
pub(super) struct KeyboardInput;

impl KeyboardInput {
    pub(super) const fn new() -> Self {
        Self
    }
}

impl InputProvider for KeyboardInput {
    type Error = io::Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(mapped) = map_key(key) {
                trace!("key {:?} -> {:?}", key.code, mapped);
                return Ok(Some(mapped));
            }
        }
        Ok(None)
    }
}

fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputEvent::Quit);
    }

    let event = match key.code {
        KeyCode::Char('s') | KeyCode::Enter => InputEvent::Start,
        KeyCode::Char(' ') => InputEvent::TogglePause,
        KeyCode::Char('x') => InputEvent::Stop,
        KeyCode::Down | KeyCode::Char('j') => InputEvent::NextSetting,
        KeyCode::Up | KeyCode::Char('k') => InputEvent::PreviousSetting,
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => InputEvent::Increase,
        KeyCode::Left | KeyCode::Char('-') => InputEvent::Decrease,
        KeyCode::Char('p') => InputEvent::TogglePolicy,
        KeyCode::Char('q') | KeyCode::Esc => InputEvent::Quit,
        _ => return None,
    };
    Some(event)
}
