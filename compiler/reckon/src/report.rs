//! Rendering of evaluation errors against the source text.

use reckon_parser::EvalError;

/// 1-based line and 0-based column (in characters) of a byte offset.
///
/// Offsets past the end are clamped to the end of the text.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let before = &source[..offset];
    let line_start = before.rfind(['\r', '\n']).map_or(0, |i| i + 1);
    let line = 1 + before.matches('\n').count();
    let column = source[line_start..offset].chars().count();
    (line, column)
}

/// Wrap `text` in double quotes, escaping only `"`, CR, LF, backspace, NUL,
/// tab and form feed. Everything else, backslashes included, is kept as-is.
pub fn quote_esc(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            '\u{8}' => out.push_str("\\b"),
            '\0' => out.push_str("\\0"),
            '\t' => out.push_str("\\t"),
            '\u{c}' => out.push_str("\\f"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// The full line of `source` containing `offset`, without its terminator
fn line_at(source: &str, offset: usize) -> &str {
    let offset = offset.min(source.len());
    let start = source[..offset].rfind(['\r', '\n']).map_or(0, |i| i + 1);
    let end = source[offset..]
        .find(['\r', '\n'])
        .map_or(source.len(), |i| offset + i);
    &source[start..end]
}

/// Render an error as a located message followed by the offending line and a
/// caret under the failing position:
///
/// ```text
/// text|1 col 4| RecursiveDescent: expected sub expression in "42*()"
///   42*()
///       ^--- here
/// ```
///
/// Errors without a position render as the caption and message alone.
pub fn render_snippet(source: &str, err: &EvalError, caption: &str) -> String {
    let prefix = if caption.is_empty() {
        String::new()
    } else {
        format!("{caption} ")
    };

    let Some(offset) = err.offset(source.len()) else {
        return format!("{prefix}{err}");
    };

    let (line, column) = line_col(source, offset);
    format!(
        "text|{line} col {column}| {prefix}{err} in {}\n  {}\n  {}^--- here",
        quote_esc(source),
        line_at(source, offset),
        " ".repeat(column),
    )
}
