/// Next whitespace-delimited word starting the scan at byte offset `cursor`.
///
/// Returns the word and the byte offset just past it.
pub(super) fn next_word_at(text: &str, cursor: usize) -> Option<(&str, usize)> {
    let rest = text.get(cursor..)?;
    let start = cursor + rest.find(|ch: char| !ch.is_whitespace())?;

    let tail = &text[start..];
    let len = tail.find(char::is_whitespace).unwrap_or(tail.len());

    Some((&tail[..len], start + len))
}

/// Leading `max_words` words of `text`, trimmed, as a borrowed slice.
pub fn first_words_excerpt(text: &str, max_words: usize) -> &str {
    let text = text.trim_start();
    if text.is_empty() || max_words == 0 {
        return "";
    }

    let mut words = 0usize;
    let mut cursor = 0usize;
    while let Some((_, next_cursor)) = next_word_at(text, cursor) {
        words += 1;
        cursor = next_cursor;
        if words >= max_words {
            break;
        }
    }

    &text[..cursor]
}
