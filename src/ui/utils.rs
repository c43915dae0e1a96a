use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate to `max_width` display columns, appending "…" if truncated 🛡️
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// A `width` x `height` rect centered in `area`, clipped to it
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Largest `w:h` box that fits in `area`, in cells. Terminal cells are about
/// twice as tall as wide, so one row counts as two units of height.
pub fn fit_aspect(area: Rect, ratio: (u16, u16)) -> Rect {
    let (rw, rh) = (ratio.0.max(1) as u32, ratio.1.max(1) as u32);
    let avail_w = area.width as u32;
    let avail_h = area.height as u32 * 2;

    let (w, h) = if avail_w * rh <= avail_h * rw {
        (avail_w, avail_w * rh / rw)
    } else {
        (avail_h * rw / rh, avail_h)
    };
    centered_rect(w as u16, (h / 2) as u16, area)
}

pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_by_display_width() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 6), "hello…");
        assert_eq!(truncate("日本語テキスト", 5), "日本…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_centered_rect_clips() {
        let area = Rect::new(10, 5, 20, 10);
        assert_eq!(centered_rect(10, 4, area), Rect::new(15, 8, 10, 4));
        assert_eq!(centered_rect(50, 50, area), area);
    }

    #[test]
    fn test_fit_aspect_portrait_is_narrow() {
        let area = Rect::new(0, 0, 80, 20);
        let r = fit_aspect(area, (9, 16));
        assert_eq!(r.height, 20);
        assert_eq!(r.width, 22);
        assert!(r.x > 0);
    }

    #[test]
    fn test_contains() {
        let area = Rect::new(2, 2, 3, 3);
        assert!(contains(area, 2, 2));
        assert!(contains(area, 4, 4));
        assert!(!contains(area, 5, 4));
    }
}
