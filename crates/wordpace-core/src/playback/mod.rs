//! Playback state machine that walks a [`WordSequence`] on a timer.
//!
//! ```text
//! Idle --start--> Running --pause--> Paused --resume--> Running
//!                    |                  |
//!                    +--last word-->  Finished
//! Running | Paused | Finished --stop--> Idle
//! ```
//!
//! The engine owns exactly one [`AdvanceTimer`]. It is armed only while the
//! state is `Running`, and every transition out of `Running` cancels it.

mod timer;

pub use timer::AdvanceTimer;

use log::{debug, trace};

use crate::{
    content::WordSequence,
    pacing::{PunctuationPolicy, TimingConfig, compute_delay_ms},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlaybackState {
    Idle,
    Running,
    Paused,
    Finished,
}

impl PlaybackState {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Finished => "finished",
        }
    }

    /// Whether a run is in progress (the stop control applies).
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Running | Self::Paused)
    }
}

/// What a call to [`PlaybackEngine::tick`] did.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StepResult {
    /// No advance was due.
    Waiting,
    /// The cursor moved to the next word.
    Advanced,
    /// The last word's delay elapsed; playback is finished.
    Finished,
}

pub struct PlaybackEngine {
    words: WordSequence,
    config: TimingConfig,
    policy: PunctuationPolicy,
    state: PlaybackState,
    cursor: Option<usize>,
    timer: AdvanceTimer,
}

impl PlaybackEngine {
    pub fn new(config: TimingConfig, policy: PunctuationPolicy) -> Self {
        Self {
            words: WordSequence::new(),
            config,
            policy,
            state: PlaybackState::Idle,
            cursor: None,
            timer: AdvanceTimer::new(),
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn config(&self) -> TimingConfig {
        self.config
    }

    pub fn policy(&self) -> PunctuationPolicy {
        self.policy
    }

    pub fn words(&self) -> &WordSequence {
        &self.words
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Word on display, empty when no run is loaded.
    pub fn current_word(&self) -> &str {
        self.cursor
            .and_then(|index| self.words.get(index))
            .unwrap_or("")
    }

    /// `(1-based position, total)`, or `(0, 0)` when idle.
    pub fn progress(&self) -> (usize, usize) {
        match self.cursor {
            Some(index) => (index + 1, self.words.len()),
            None => (0, 0),
        }
    }

    /// Pending advance deadline, if any. Only `Running` has one.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.timer.deadline_ms()
    }

    /// Delay the current word gets under the active config and policy.
    pub fn current_delay_ms(&self) -> Option<u64> {
        self.cursor
            .and_then(|index| self.words.get(index))
            .map(|word| compute_delay_ms(word, &self.config, self.policy))
    }

    /// Begin a fresh run from word 0.
    ///
    /// Accepted from `Idle` or `Finished` with a non-empty sequence; returns
    /// `false` and changes nothing otherwise.
    pub fn start(&mut self, words: WordSequence, config: TimingConfig, now_ms: u64) -> bool {
        if words.is_empty() {
            debug!("playback start ignored: no words");
            return false;
        }
        if self.state.is_active() {
            debug!("playback start ignored: state={}", self.state.label());
            return false;
        }

        self.words = words;
        self.config = config;
        self.cursor = Some(0);
        self.state = PlaybackState::Running;
        debug!("playback started words={}", self.words.len());
        self.schedule_current(now_ms);
        true
    }

    /// Drive the timer. Advances at most one word per call.
    pub fn tick(&mut self, now_ms: u64) -> StepResult {
        if self.state != PlaybackState::Running || !self.timer.fire_if_due(now_ms) {
            return StepResult::Waiting;
        }

        let Some(index) = self.cursor else {
            return StepResult::Waiting;
        };

        if index + 1 >= self.words.len() {
            self.state = PlaybackState::Finished;
            debug!("playback finished at word={}", index);
            return StepResult::Finished;
        }

        self.cursor = Some(index + 1);
        self.schedule_current(now_ms);
        StepResult::Advanced
    }

    pub fn pause(&mut self) -> bool {
        if self.state != PlaybackState::Running {
            return false;
        }

        self.timer.cancel();
        self.state = PlaybackState::Paused;
        debug!("playback paused at word={:?}", self.cursor);
        true
    }

    /// Continue from `Paused` with a full delay for the current word.
    pub fn resume(&mut self, now_ms: u64) -> bool {
        if self.state != PlaybackState::Paused {
            return false;
        }

        self.state = PlaybackState::Running;
        debug!("playback resumed at word={:?}", self.cursor);
        self.schedule_current(now_ms);
        true
    }

    pub fn toggle_pause(&mut self, now_ms: u64) -> bool {
        match self.state {
            PlaybackState::Running => self.pause(),
            PlaybackState::Paused => self.resume(now_ms),
            PlaybackState::Idle | PlaybackState::Finished => false,
        }
    }

    /// Cancel the run and clear the cursor. No-op when already idle.
    pub fn stop(&mut self) -> bool {
        if self.state == PlaybackState::Idle {
            return false;
        }

        self.timer.cancel();
        self.state = PlaybackState::Idle;
        self.cursor = None;
        debug!("playback stopped");
        true
    }

    /// Replace the timing config.
    ///
    /// While running, the in-flight delay is discarded and the current word
    /// gets a fresh delay under the new values starting at `now_ms`.
    pub fn set_config(&mut self, config: TimingConfig, now_ms: u64) {
        if config == self.config {
            return;
        }

        self.config = config;
        self.reschedule_if_running(now_ms);
    }

    pub fn set_policy(&mut self, policy: PunctuationPolicy, now_ms: u64) {
        if policy == self.policy {
            return;
        }

        self.policy = policy;
        self.reschedule_if_running(now_ms);
    }

    fn reschedule_if_running(&mut self, now_ms: u64) {
        if self.state == PlaybackState::Running {
            self.schedule_current(now_ms);
        }
    }

    fn schedule_current(&mut self, now_ms: u64) {
        debug_assert_eq!(self.state, PlaybackState::Running);

        match self.current_delay_ms() {
            Some(delay_ms) => {
                self.timer.arm(now_ms, delay_ms);
                trace!("word={:?} delay_ms={}", self.cursor, delay_ms);
            }
            None => self.timer.cancel(),
        }
    }
}

impl Drop for PlaybackEngine {
    fn drop(&mut self) {
        self.timer.cancel();
    }
}
