//! ANSI styling helpers.

use crate::keypad::Rgb;

const RESET: &str = "\x1b[0m";

/// Error color: orange/red-ish.
pub const ERROR_COLOR: Rgb = Rgb::new(0.9, 0.45, 0.3);

/// Muted color for the history line.
pub const MUTED_COLOR: Rgb = Rgb::new(0.8, 0.8, 0.8);

/// Wrap text in bold truecolor escapes.
pub fn paint(text: &str, fg: Rgb, bg: Option<Rgb>) -> String {
    let [r, g, b] = fg.to_rgb8();
    let mut out = format!("\x1b[1;38;2;{r};{g};{b}m");
    if let Some(bg) = bg {
        let [r, g, b] = bg.to_rgb8();
        out.push_str(&format!("\x1b[48;2;{r};{g};{b}m"));
    }
    out.push_str(text);
    out.push_str(RESET);
    out
}

/// Number of terminal columns taken by `text`.
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Pad `text` on the left to `width` columns.
pub fn align_right(text: &str, columns: usize) -> String {
    let pad = columns.saturating_sub(width(text));
    format!("{}{text}", " ".repeat(pad))
}

/// Center `text` in `columns`, extra space going to the right.
pub fn center(text: &str, columns: usize) -> String {
    let pad = columns.saturating_sub(width(text));
    let left = pad / 2;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(pad - left))
}

/// Cut `text` to `columns`, ending with an ellipsis when shortened.
pub fn truncate_tail(text: &str, columns: usize) -> String {
    if width(text) <= columns {
        return text.to_string();
    }
    if columns == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(columns - 1).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment() {
        assert_eq!(align_right("12", 5), "   12");
        assert_eq!(align_right("123456", 3), "123456");
        assert_eq!(center("AC", 6), "  AC  ");
        assert_eq!(center("+/-", 6), " +/-  ");
        assert_eq!(center("×", 3), " × ");
    }

    #[test]
    fn test_truncate_tail() {
        assert_eq!(truncate_tail("1,234 +", 10), "1,234 +");
        assert_eq!(truncate_tail("123,456 × 789 =", 8), "123,456…");
        assert_eq!(truncate_tail("abc", 0), "");
    }

    #[test]
    fn test_paint() {
        let painted = paint("7", Rgb::new(1.0, 1.0, 1.0), Some(Rgb::new(0.0, 0.0, 0.0)));
        assert_eq!(painted, "\x1b[1;38;2;255;255;255m\x1b[48;2;0;0;0m7\x1b[0m");
    }
}
