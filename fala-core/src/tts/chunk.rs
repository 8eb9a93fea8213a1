//! Splitting of long text into request-sized pieces.
//!
//! The translate endpoint rejects anything above [`MAX_CHUNK_CHARS`]
//! characters, so text is cut at the latest clause boundary that fits, then
//! at whitespace, and only as a last resort in the middle of a word.

pub const MAX_CHUNK_CHARS: usize = 100;

const BREAK_AFTER: &[char] = &['.', ',', ';', ':', '!', '?', '…', '\n'];

const MARKDOWN_MARKERS: &[char] = &['*', '_', '`', '#', '>'];

/// Split `text` into non-empty chunks of at most `max_chars` characters.
pub fn split_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut rest = text.trim();

    while !rest.is_empty() {
        let Some((window_end, _)) = rest.char_indices().nth(max_chars) else {
            chunks.push(rest.to_string());
            break;
        };

        let window = &rest[..window_end];
        let split_at = last_break(window)
            .or_else(|| last_whitespace(window))
            .unwrap_or(window_end);

        let chunk = rest[..split_at].trim();
        if !chunk.is_empty() {
            chunks.push(chunk.to_string());
        }
        rest = rest[split_at..].trim_start();
    }

    chunks
}

/// Byte offset just past the last clause-ending character in `window`.
fn last_break(window: &str) -> Option<usize> {
    window
        .char_indices()
        .filter(|(_, c)| BREAK_AFTER.contains(c))
        .last()
        .map(|(i, c)| i + c.len_utf8())
}

fn last_whitespace(window: &str) -> Option<usize> {
    window
        .char_indices()
        .filter(|(i, c)| *i > 0 && c.is_whitespace())
        .last()
        .map(|(i, _)| i)
}

/// Flatten newlines and drop markdown emphasis/heading markers and list bullets.
pub fn clean_text(text: &str) -> String {
    text.lines()
        .map(strip_bullet)
        .map(|line| {
            line.chars()
                .filter(|c| !MARKDOWN_MARKERS.contains(c))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Removes a leading `- ` bullet; hyphens inside words and minus signs stay.
fn strip_bullet(line: &str) -> &str {
    let trimmed = line.trim_start();
    match trimmed.strip_prefix('-') {
        Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest,
        _ => line,
    }
}
