use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cuts `s` to at most `max_width` display columns, ending in "..." when cut.
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

/// Rows a single logical line occupies once wrapped at `max_width` columns.
/// Character wrapping; word wrapping in ratatui can only need the same or more.
pub fn wrapped_line_count(line: &str, max_width: usize) -> usize {
    if max_width == 0 {
        return 1;
    }
    let width = line.width();
    if width == 0 {
        1
    } else {
        width.div_ceil(max_width)
    }
}

pub fn calculate_max_scroll(content_height: usize, visible_height: usize) -> u16 {
    content_height.saturating_sub(visible_height).min(u16::MAX as usize) as u16
}

/// Smallest change to `scroll` that keeps rows `start..end` on screen,
/// preferring the top of the range when it does not fit.
pub fn scroll_to_keep_visible(start: usize, end: usize, scroll: u16, visible_height: usize) -> u16 {
    let scroll = scroll as usize;
    let new_scroll = if start < scroll {
        start
    } else if end > scroll + visible_height {
        end.saturating_sub(visible_height).min(start)
    } else {
        scroll
    };
    new_scroll.min(u16::MAX as usize) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_no_truncation() {
        assert_eq!(truncate_string("Short string", 20), "Short string");
    }

    #[test]
    fn test_truncate_string_with_truncation() {
        let result = truncate_string("This is a very long string that should be truncated", 20);
        assert_eq!(result, "This is a very lo...");
        assert!(result.width() <= 20);
    }

    #[test]
    fn test_truncate_string_wide_chars() {
        let result = truncate_string("日本語のテキストです", 9);
        assert_eq!(result, "日本語...");
        assert!(result.width() <= 9);
    }

    #[test]
    fn test_truncate_string_empty() {
        assert_eq!(truncate_string("", 20), "");
    }

    #[test]
    fn test_wrapped_line_count() {
        assert_eq!(wrapped_line_count("", 10), 1);
        assert_eq!(wrapped_line_count("0123456789", 10), 1);
        assert_eq!(wrapped_line_count("0123456789a", 10), 2);
        assert_eq!(wrapped_line_count("abc", 0), 1);
    }

    #[test]
    fn test_calculate_max_scroll() {
        assert_eq!(calculate_max_scroll(5, 10), 0);
        assert_eq!(calculate_max_scroll(25, 10), 15);
    }

    #[test]
    fn test_scroll_to_keep_visible() {
        // already visible
        assert_eq!(scroll_to_keep_visible(2, 5, 0, 10), 0);
        // above the viewport
        assert_eq!(scroll_to_keep_visible(3, 6, 8, 10), 3);
        // below the viewport
        assert_eq!(scroll_to_keep_visible(12, 16, 0, 10), 6);
        // taller than the viewport: show its top
        assert_eq!(scroll_to_keep_visible(12, 30, 0, 10), 12);
    }
}
