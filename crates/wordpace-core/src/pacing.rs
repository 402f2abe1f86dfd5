//! Per-word delay rules.

use log::trace;

/// How the punctuation share of a word's delay is computed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PunctuationPolicy {
    /// Every character outside `a-z`/`A-Z` adds one punctuation offset.
    /// A word made only of periods adds nothing.
    #[default]
    NonAlphaDensity,
    /// One punctuation offset when the word ends with exactly one period.
    SentenceEnd,
}

impl PunctuationPolicy {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NonAlphaDensity => "density",
            Self::SentenceEnd => "sentence-end",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::NonAlphaDensity => Self::SentenceEnd,
            Self::SentenceEnd => Self::NonAlphaDensity,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "density" | "non-alpha" => Some(Self::NonAlphaDensity),
            "sentence-end" | "period" => Some(Self::SentenceEnd),
            _ => None,
        }
    }

    fn units(self, word: &str) -> u64 {
        match self {
            Self::NonAlphaDensity => {
                if is_only_periods(word) {
                    0
                } else {
                    word.chars().filter(|ch| !ch.is_ascii_alphabetic()).count() as u64
                }
            }
            Self::SentenceEnd => {
                let trailing = word.chars().rev().take_while(|ch| *ch == '.').count();
                u64::from(trailing == 1)
            }
        }
    }
}

/// Timing parameters for one playback run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimingConfig {
    /// Minimum time every word stays on screen.
    pub base_delay_ms: u32,
    /// Word-length divisor; zero is treated as one.
    pub chars_per_unit: u32,
    pub unit_offset_ms: u32,
    pub punctuation_offset_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            base_delay_ms: 120,
            chars_per_unit: 7,
            unit_offset_ms: 150,
            punctuation_offset_ms: 150,
        }
    }
}

impl TimingConfig {
    pub const fn new(
        base_delay_ms: u32,
        chars_per_unit: u32,
        unit_offset_ms: u32,
        punctuation_offset_ms: u32,
    ) -> Self {
        Self {
            base_delay_ms,
            chars_per_unit,
            unit_offset_ms,
            punctuation_offset_ms,
        }
    }

    pub const fn with_base_delay_ms(mut self, base_delay_ms: u32) -> Self {
        self.base_delay_ms = base_delay_ms;
        self
    }

    pub const fn with_chars_per_unit(mut self, chars_per_unit: u32) -> Self {
        self.chars_per_unit = chars_per_unit;
        self
    }

    pub const fn with_unit_offset_ms(mut self, unit_offset_ms: u32) -> Self {
        self.unit_offset_ms = unit_offset_ms;
        self
    }

    pub const fn with_punctuation_offset_ms(mut self, punctuation_offset_ms: u32) -> Self {
        self.punctuation_offset_ms = punctuation_offset_ms;
        self
    }

    /// Divisor actually used by [`compute_delay_ms`].
    pub const fn effective_chars_per_unit(&self) -> u32 {
        if self.chars_per_unit == 0 {
            1
        } else {
            self.chars_per_unit
        }
    }
}

/// Milliseconds `word` stays visible before playback advances.
///
/// `base + punctuation + floor(chars / chars_per_unit) * unit_offset`, where
/// word length counts Unicode scalar values. Never below `base_delay_ms`.
pub fn compute_delay_ms(word: &str, config: &TimingConfig, policy: PunctuationPolicy) -> u64 {
    let chars = word.chars().count() as u64;
    let length_units = chars / u64::from(config.effective_chars_per_unit());
    let length_ms = length_units.saturating_mul(u64::from(config.unit_offset_ms));
    let punctuation_ms = policy
        .units(word)
        .saturating_mul(u64::from(config.punctuation_offset_ms));

    let delay = u64::from(config.base_delay_ms)
        .saturating_add(punctuation_ms)
        .saturating_add(length_ms);

    trace!(
        "delay word_chars={} length_ms={} punctuation_ms={} total_ms={}",
        chars, length_ms, punctuation_ms, delay
    );
    delay
}

fn is_only_periods(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|byte| byte == b'.')
}
