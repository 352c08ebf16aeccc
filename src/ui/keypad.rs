//! Keypad rendering.

use super::style;
use crate::keypad::{CalculatorButton, LAYOUT};

/// Columns per key.
const KEY_WIDTH: usize = 6;

/// Columns between keys.
const GAP: usize = 1;

/// Total keypad width: four keys and three gaps.
pub const KEYPAD_WIDTH: usize = 4 * KEY_WIDTH + 3 * GAP;

/// Render the keypad, one text line per row.
pub fn render_keypad(colored: bool) -> String {
    let mut out = String::new();
    for row in LAYOUT {
        let keys: Vec<String> = row.iter().map(|&button| render_key(button, colored)).collect();
        out.push_str(&keys.join(&" ".repeat(GAP)));
        out.push('\n');
    }
    out
}

/// Render a single key, padded to its width.
fn render_key(button: CalculatorButton, colored: bool) -> String {
    let width = if button.is_wide() {
        2 * KEY_WIDTH + GAP
    } else {
        KEY_WIDTH
    };

    if colored {
        let cap = style::center(button.label(), width);
        style::paint(&cap, button.foreground(), Some(button.background()))
    } else {
        style::center(&format!("[{}]", button.label()), width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_keypad() {
        let keypad = render_keypad(false);
        let lines: Vec<&str> = keypad.lines().collect();
        assert_eq!(lines.len(), 5);
        for line in &lines {
            assert_eq!(style::width(line), KEYPAD_WIDTH);
        }
        assert!(lines[0].starts_with(" [AC] "));
        assert!(lines[0].contains("[+/-]"));
        assert!(lines[1].contains("[×]"));
        assert!(lines[4].starts_with("     [0]     "));
        assert!(lines[4].ends_with("[=]  "));
    }

    #[test]
    fn test_colored_keys_use_button_colors() {
        let keypad = render_keypad(true);
        let [r, g, b] = CalculatorButton::Clear.background().to_rgb8();
        assert!(keypad.contains(&format!("48;2;{r};{g};{b}m")));
        assert_eq!(keypad.matches("\x1b[0m").count(), 19);
    }
}
