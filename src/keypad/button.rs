use crate::calculator::{Input, Operation};
use serde::Serialize;

/// An RGB color with channels in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Convert to 8-bit channels.
    pub fn to_rgb8(self) -> [u8; 3] {
        [self.r, self.g, self.b].map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    /// Hex notation, e.g. `#ff4d4d`.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

/// A key on the calculator keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum CalculatorButton {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Decimal,
    Equals,
    Plus,
    Minus,
    Multiply,
    Divide,
    Clear,
    Negative,
    Percent,
}

/// Keypad rows from top to bottom.
pub const LAYOUT: [&[CalculatorButton]; 5] = {
    use CalculatorButton::*;
    [
        &[Clear, Negative, Percent, Divide],
        &[Seven, Eight, Nine, Multiply],
        &[Four, Five, Six, Minus],
        &[One, Two, Three, Plus],
        &[Zero, Decimal, Equals],
    ]
};

impl CalculatorButton {
    /// Create a digit button. Returns `None` for values above 9.
    pub fn digit(value: u8) -> Option<Self> {
        const DIGITS: [CalculatorButton; 10] = [
            CalculatorButton::Zero,
            CalculatorButton::One,
            CalculatorButton::Two,
            CalculatorButton::Three,
            CalculatorButton::Four,
            CalculatorButton::Five,
            CalculatorButton::Six,
            CalculatorButton::Seven,
            CalculatorButton::Eight,
            CalculatorButton::Nine,
        ];
        DIGITS.get(usize::from(value)).copied()
    }

    /// Text printed on the key cap.
    pub fn label(self) -> &'static str {
        match self {
            Self::Zero => "0",
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Decimal => ".",
            Self::Equals => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Clear => "AC",
            Self::Negative => "+/-",
            Self::Percent => "%",
        }
    }

    /// Get the engine input this key dispatches.
    pub fn input(self) -> Input {
        match self {
            Self::Zero => Input::Digit(0),
            Self::One => Input::Digit(1),
            Self::Two => Input::Digit(2),
            Self::Three => Input::Digit(3),
            Self::Four => Input::Digit(4),
            Self::Five => Input::Digit(5),
            Self::Six => Input::Digit(6),
            Self::Seven => Input::Digit(7),
            Self::Eight => Input::Digit(8),
            Self::Nine => Input::Digit(9),
            Self::Decimal => Input::Decimal,
            Self::Equals => Input::Equals,
            Self::Plus => Input::Operator(Operation::Add),
            Self::Minus => Input::Operator(Operation::Subtract),
            Self::Multiply => Input::Operator(Operation::Multiply),
            Self::Divide => Input::Operator(Operation::Divide),
            Self::Clear => Input::Clear,
            Self::Negative => Input::ToggleSign,
            Self::Percent => Input::Percent,
        }
    }

    pub fn background(self) -> Rgb {
        match self {
            Self::Clear => Rgb::new(1.0, 0.3, 0.3),
            Self::Negative => Rgb::new(1.0, 0.6, 0.0),
            Self::Percent => Rgb::new(1.0, 0.8, 0.0),
            Self::Divide => Rgb::new(0.4, 0.8, 1.0),
            Self::Multiply => Rgb::new(0.6, 0.4, 1.0),
            Self::Minus => Rgb::new(1.0, 0.4, 0.7),
            Self::Plus => Rgb::new(0.3, 0.9, 0.5),
            Self::Equals => Rgb::new(0.2, 0.7, 1.0),
            _ => Rgb::new(0.15, 0.15, 0.25),
        }
    }

    pub fn foreground(self) -> Rgb {
        WHITE
    }

    /// Whether this key spans two keypad columns.
    pub fn is_wide(self) -> bool {
        self == Self::Zero
    }

}

impl From<CalculatorButton> for Input {
    fn from(button: CalculatorButton) -> Self {
        button.input()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_covers_every_button_once() {
        let buttons: Vec<CalculatorButton> = LAYOUT.iter().flat_map(|row| row.iter().copied()).collect();
        assert_eq!(buttons.len(), 19);
        for (i, button) in buttons.iter().enumerate() {
            assert!(!buttons[i + 1..].contains(button), "{button:?} appears twice");
        }
    }

    #[test]
    fn test_layout_rows() {
        assert_eq!(LAYOUT[0], &[
            CalculatorButton::Clear,
            CalculatorButton::Negative,
            CalculatorButton::Percent,
            CalculatorButton::Divide
        ]);
        assert_eq!(LAYOUT[4].len(), 3);
        assert!(LAYOUT[4][0].is_wide());
    }

    #[test]
    fn test_digit_constructor() {
        assert_eq!(CalculatorButton::digit(0), Some(CalculatorButton::Zero));
        assert_eq!(CalculatorButton::digit(7), Some(CalculatorButton::Seven));
        assert_eq!(CalculatorButton::digit(10), None);
        for d in 0..10 {
            let button = CalculatorButton::digit(d).unwrap();
            assert_eq!(button.input(), Input::Digit(d));
            assert_eq!(button.label(), d.to_string());
            assert_eq!(Input::from(button), Input::Digit(d));
        }
    }

    #[test]
    fn test_inputs() {
        assert_eq!(CalculatorButton::Plus.input(), Input::Operator(Operation::Add));
        assert_eq!(CalculatorButton::Minus.input(), Input::Operator(Operation::Subtract));
        assert_eq!(CalculatorButton::Multiply.input(), Input::Operator(Operation::Multiply));
        assert_eq!(CalculatorButton::Divide.input(), Input::Operator(Operation::Divide));
        assert_eq!(CalculatorButton::Negative.input(), Input::ToggleSign);
        assert_eq!(CalculatorButton::Clear.input(), Input::Clear);
        assert_eq!(CalculatorButton::Percent.input(), Input::Percent);
        assert_eq!(Input::from(CalculatorButton::Decimal), Input::Decimal);
    }

    #[test]
    fn test_colors() {
        assert_eq!(CalculatorButton::Clear.background().to_hex(), "#ff4d4d");
        assert_eq!(CalculatorButton::Decimal.background().to_rgb8(), [38, 38, 64]);
        assert_eq!(CalculatorButton::Five.background(), CalculatorButton::Decimal.background());
        assert_ne!(CalculatorButton::Equals.background(), CalculatorButton::Divide.background());
        assert_eq!(CalculatorButton::Percent.foreground().to_hex(), "#ffffff");
    }
}
