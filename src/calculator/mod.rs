//! Calculator module implementing the keypad calculator.
//!
//! This module provides functionality to:
//! - Drive the calculator state machine one input at a time
//! - Format results for the display and the history trace
//! - Copy results to the clipboard

mod clipboard;
mod engine;
pub mod format;
mod input;

pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use engine::{
    Calculator, CalculatorState, DEFAULT_HISTORY_FRACTION_DIGITS, DEFAULT_MAX_DIGITS,
    ERROR_DISPLAY, EngineSettings,
};
pub use input::{Input, Operation};
