use std::io;

use wordpace_core::render::{Screen, SettingValue};

/// Horizontal position of the fixation letter, as a percentage of the width.
pub(super) const ORP_ANCHOR_PERCENT: usize = 42;

pub(super) trait ScreenRenderer {
    fn render(&mut self, screen: Screen<'_>) -> io::Result<()>;
}

/// Splits `word` around the character at `orp_index`.
pub(super) fn split_at_orp(word: &str, orp_index: usize) -> (&str, &str, &str) {
    let Some((start, ch)) = word.char_indices().nth(orp_index) else {
        return (word, "", "");
    };
    let end = start + ch.len_utf8();
    (&word[..start], &word[start..end], &word[end..])
}

/// Left padding so the fixation letter lands on the anchor column.
pub(super) fn orp_padding(width: u16, orp_index: usize) -> u16 {
    let anchor = usize::from(width) * ORP_ANCHOR_PERCENT / 100;
    u16::try_from(anchor.saturating_sub(orp_index)).unwrap_or(0)
}

pub(super) fn format_setting(value: SettingValue<'_>) -> String {
    match value {
        SettingValue::Millis(ms) => format!("{ms} ms"),
        SettingValue::Count(count) => count.to_string(),
        SettingValue::Label(label) => label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_around_fixation_letter() {
        assert_eq!(split_at_orp("reading", 2), ("re", "a", "ding"));
        assert_eq!(split_at_orp("a", 0), ("", "a", ""));
        assert_eq!(split_at_orp("años", 1), ("a", "ñ", "os"));
        assert_eq!(split_at_orp("", 0), ("", "", ""));
    }

    #[test]
    fn padding_anchors_letter_and_saturates() {
        assert_eq!(orp_padding(100, 2), 40);
        assert_eq!(orp_padding(10, 9), 0);
    }

    #[test]
    fn setting_values_are_formatted_for_display() {
        assert_eq!(format_setting(SettingValue::Millis(120)), "120 ms");
        assert_eq!(format_setting(SettingValue::Count(7)), "7");
        assert_eq!(format_setting(SettingValue::Label("density")), "density");
    }
}
