//! The calculator keypad.
//!
//! Each [`CalculatorButton`] knows its label, colors and the engine input it
//! dispatches. [`LAYOUT`] lists the rows as they appear on screen.

mod button;
mod parse;

pub use button::{CalculatorButton, LAYOUT, Rgb};
pub use parse::{KeyParseError, parse_keys};
