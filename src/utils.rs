use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shortens `s` to at most `max_width` display columns, ending in "..." when
/// anything was cut.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push_str("...");
    out
}

pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}
