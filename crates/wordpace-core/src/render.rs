//! App-level view models consumed by the shell renderer.

use crate::playback::PlaybackState;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SettingValue<'a> {
    Millis(u32),
    Count(u32),
    Label(&'a str),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SettingRowView<'a> {
    pub key: &'a str,
    pub value: SettingValue<'a>,
}

/// Timing settings panel shown on every screen.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SettingsPanel<'a> {
    pub rows: &'a [SettingRowView<'a>],
    pub cursor: usize,
}

/// View model handed to the renderer after each requested frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen<'a> {
    /// Nothing playing; shows what `start` would read.
    Idle {
        title: &'a str,
        preview: &'a str,
        word_total: usize,
        settings: SettingsPanel<'a>,
    },
    /// Running, paused or finished run.
    Reading {
        title: &'a str,
        word: &'a str,
        /// Character index of the fixation letter in `word`.
        orp_index: usize,
        progress: &'a str,
        delay: &'a str,
        state: PlaybackState,
        settings: SettingsPanel<'a>,
    },
    Status {
        title: &'a str,
        line1: &'a str,
        line2: &'a str,
    },
}
