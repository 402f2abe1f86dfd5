//! Shared text shaping and truncation policies for compact UI surfaces.

use core::{fmt::Write, str};

use heapless::String as HeaplessString;

pub const COMPACT_MAX_WORDS: usize = 7;
pub const COMPACT_MAX_CHARS: usize = 34;
pub const LABEL_BYTES: usize = 32;

pub type Label = HeaplessString<LABEL_BYTES>;

pub fn preview_compact<'a>(source: &str, out: &'a mut [u8]) -> &'a str {
    preview_limited(source, out, COMPACT_MAX_WORDS, COMPACT_MAX_CHARS)
}

/// Copy at most `max_words` words / `max_chars` chars of `source` into
/// `out`, single-spaced, appending `...` when anything was cut.
pub fn preview_limited<'a>(
    source: &str,
    out: &'a mut [u8],
    max_words: usize,
    max_chars: usize,
) -> &'a str {
    if out.is_empty() {
        return "";
    }

    let mut len = 0usize;
    let mut char_count = 0usize;
    let mut truncated = false;

    for (word_count, word) in source.split_whitespace().enumerate() {
        if word_count >= max_words {
            truncated = true;
            break;
        }

        if word_count > 0 {
            if len + 1 > out.len() || char_count >= max_chars {
                truncated = true;
                break;
            }
            out[len] = b' ';
            len += 1;
            char_count += 1;
        }

        for ch in word.chars() {
            let mut utf8 = [0u8; 4];
            let encoded = ch.encode_utf8(&mut utf8).as_bytes();
            if char_count >= max_chars || len + encoded.len() > out.len() {
                truncated = true;
                break;
            }

            out[len..len + encoded.len()].copy_from_slice(encoded);
            len += encoded.len();
            char_count += 1;
        }

        if truncated {
            break;
        }
    }

    if len == 0 {
        return "";
    }

    if truncated && len + 3 <= out.len() {
        out[len..len + 3].copy_from_slice(b"...");
        len += 3;
    }

    str::from_utf8(&out[..len]).unwrap_or("?")
}

/// `"index/total"`, e.g. `"12/340"`. Empty when there is nothing loaded.
pub fn progress_label(index: usize, total: usize) -> Label {
    let mut out = Label::new();
    if total > 0 {
        let _ = write!(out, "{}/{}", index, total);
    }
    out
}

/// `"<value> ms"`, clipped to the label capacity.
pub fn millis_label(value: u64) -> Label {
    let mut out = Label::new();
    let _ = write!(out, "{} ms", value);
    out
}

/// Character index of the optimal recognition point (fixation letter).
///
/// Punctuation is skipped when picking the letter; words without any
/// alphanumeric characters anchor on their middle character.
pub fn orp_char_index(word: &str) -> usize {
    let mut total_chars = 0usize;
    let mut letter_chars = 0usize;

    for ch in word.chars() {
        total_chars += 1;
        if ch.is_alphanumeric() {
            letter_chars += 1;
        }
    }

    if total_chars == 0 {
        return 0;
    }

    if letter_chars == 0 {
        return total_chars.saturating_sub(1) / 2;
    }

    let target_letter = core::cmp::min(orp_letter_index(letter_chars), letter_chars - 1);

    word.chars()
        .enumerate()
        .filter(|(_, ch)| ch.is_alphanumeric())
        .nth(target_letter)
        .map(|(index, _)| index)
        .unwrap_or(total_chars.saturating_sub(1) / 2)
}

fn orp_letter_index(letter_count: usize) -> usize {
    match letter_count {
        0 | 1 => 0,
        2..=5 => 1,
        6..=9 => 2,
        10..=13 => 3,
        _ => 4,
    }
}
