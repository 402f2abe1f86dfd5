//! Application controller for the word pacer.
//!
//! Owns the raw text and the user-editable timing settings, forwards logical
//! input events to the [`PlaybackEngine`] and produces [`Screen`] view models.
//! The settings held here are the source of truth; every edit is pushed to
//! the engine immediately.

use alloc::string::String;

use log::{debug, info};

use crate::{
    content::{first_words_excerpt, tokenize},
    input::{InputEvent, InputProvider},
    pacing::{PunctuationPolicy, TimingConfig},
    playback::{PlaybackEngine, PlaybackState, StepResult},
    render::{Screen, SettingRowView, SettingValue, SettingsPanel},
    text_policy::{millis_label, orp_char_index, preview_compact, progress_label},
};

const DELAY_STEP_MS: u32 = 10;
const MAX_DELAY_MS: u32 = 60_000;
const MAX_CHARS_PER_UNIT: u32 = 64;
const PREVIEW_BYTES: usize = 96;
const PREVIEW_SOURCE_WORDS: usize = 16;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PacerConfig {
    pub timing: TimingConfig,
    pub policy: PunctuationPolicy,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum SettingsRow {
    BaseDelay,
    CharsPerUnit,
    UnitOffset,
    PunctuationOffset,
    Policy,
}

impl SettingsRow {
    const COUNT: u8 = 5;

    fn from_index(index: u8) -> Self {
        match index {
            0 => Self::BaseDelay,
            1 => Self::CharsPerUnit,
            2 => Self::UnitOffset,
            3 => Self::PunctuationOffset,
            _ => Self::Policy,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct StatusLine {
    line1: &'static str,
    line2: &'static str,
}

pub struct PacerApp<IN>
where
    IN: InputProvider,
{
    input: IN,
    text: String,
    timing: TimingConfig,
    policy: PunctuationPolicy,
    engine: PlaybackEngine,
    app_title: &'static str,
    settings_cursor: u8,
    pending_redraw: bool,
    status: Option<StatusLine>,
    exit_requested: bool,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");

fn rotate_cw(current: u8, total: u8) -> u8 {
    if total == 0 { 0 } else { (current + 1) % total }
}

fn rotate_ccw(current: u8, total: u8) -> u8 {
    if total == 0 {
        0
    } else if current == 0 {
        total - 1
    } else {
        current - 1
    }
}

#[cfg(test)]
mod tests;
