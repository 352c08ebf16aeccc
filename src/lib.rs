//! A keypad calculator.
//!
//! - [`calculator`]: the input-driven state machine and number formatting
//! - [`keypad`]: the buttons, their colors and layout, and key-sequence parsing
//! - [`config`]: user configuration
//! - [`ui`]: terminal rendering of the display panel and keypad

pub mod calculator;
pub mod config;
pub mod keypad;
pub mod ui;

pub use calculator::{Calculator, CalculatorState, Input, Operation};
pub use keypad::{CalculatorButton, parse_keys};
