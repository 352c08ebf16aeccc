//! Display panel rendering.
//!
//! Renders the history trace and the main display as a framed box:
//! - The history as a muted line, truncated at the tail
//! - The display right-aligned below it, in the error color after `÷ 0`

use super::keypad::KEYPAD_WIDTH;
use super::style::{self, ERROR_COLOR, MUTED_COLOR};
use crate::calculator::CalculatorState;
use crate::keypad::Rgb;

const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

/// Render the display panel for a calculator state.
///
/// The panel is as wide as the keypad, growing if the display is longer.
/// The display is never truncated.
pub fn render_panel(state: &CalculatorState, colored: bool) -> String {
    let inner = KEYPAD_WIDTH.max(style::width(&state.display));

    let history = style::align_right(&style::truncate_tail(&state.history, inner), inner);
    let display = style::align_right(&state.display, inner);

    let (history, display) = if colored {
        let display_color = if state.is_error() { ERROR_COLOR } else { WHITE };
        (
            style::paint(&history, MUTED_COLOR, None),
            style::paint(&display, display_color, None),
        )
    } else {
        (history, display)
    };

    let border = "─".repeat(inner + 2);
    format!("┌{border}┐\n│ {history} │\n│ {display} │\n└{border}┘\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{Calculator, Input, Operation};

    #[test]
    fn test_initial_panel() {
        let panel = render_panel(&CalculatorState::default(), false);
        let lines: Vec<&str> = panel.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].ends_with(" 0 │"));
        assert_eq!(style::width(lines[1]), KEYPAD_WIDTH + 4);
        assert_eq!(lines[1].trim_matches(|c: char| c == '│' || c == ' '), "");
    }

    #[test]
    fn test_panel_shows_history_and_display() {
        let mut calc = Calculator::new();
        calc.feed([
            Input::Digit(1),
            Input::Digit(2),
            Input::Operator(Operation::Add),
            Input::Digit(3),
            Input::Equals,
        ]);
        let panel = render_panel(calc.state(), false);
        let lines: Vec<&str> = panel.lines().collect();
        assert!(lines[1].ends_with("12 + 3 = │"));
        assert!(lines[2].ends_with(" 15 │"));
    }

    #[test]
    fn test_long_display_widens_panel() {
        let state = CalculatorState {
            display: "0.30000000000000004000000000".to_string(),
            ..CalculatorState::default()
        };
        let panel = render_panel(&state, false);
        for line in panel.lines() {
            assert_eq!(style::width(line), style::width(&state.display) + 4);
        }
    }

    #[test]
    fn test_error_display_is_colored() {
        let state = CalculatorState {
            display: "Error".to_string(),
            ..CalculatorState::default()
        };
        let panel = render_panel(&state, true);
        let [r, g, b] = ERROR_COLOR.to_rgb8();
        assert!(panel.contains(&format!("38;2;{r};{g};{b}m")));
        assert!(panel.contains("Error"));
    }
}
