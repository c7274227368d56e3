//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Pad to `width` display columns (wide glyphs such as emoji count double).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// Keep the first `max_chars` characters of an entry and append `...` when
/// something was cut. Newlines are flattened so a row stays on one line.
pub fn preview(text: &str, max_chars: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    if flat.chars().count() > max_chars {
        let mut s: String = flat.chars().take(max_chars).collect();
        s.push_str("...");
        s
    } else {
        flat
    }
}

/// Truncate to at most `width` display columns, ending with `…` when cut.
pub fn fit_width(s: &str, width: usize) -> String {
    if UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let cw = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + cw + 1 > width {
            break;
        }
        out.push(c);
        used += cw;
    }
    out.push('…');
    out
}

/// `42.5` → `42.50%`
pub fn percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Round to two decimal places (the precision stored in the log).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
