//! The calculator state machine.
//!
//! Every input is applied to a single [`CalculatorState`] record. Operators
//! chain strictly left to right: pressing an operator while another one is
//! pending evaluates the pending one first. Division by zero shows
//! [`ERROR_DISPLAY`] instead of failing.

use serde::Serialize;
use tracing::{debug, trace};

use super::format;
use super::input::{Input, Operation};

/// Display text shown after a division by zero.
pub const ERROR_DISPLAY: &str = "Error";

/// Default cap on the number of digits typed into the display.
pub const DEFAULT_MAX_DIGITS: usize = 9;

/// Default number of fraction digits shown in the history trace.
pub const DEFAULT_HISTORY_FRACTION_DIGITS: usize = 8;

/// Tunables for the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineSettings {
    /// Maximum digits accepted while composing a number.
    pub max_digits: usize,
    /// Maximum fraction digits of numbers in the history trace.
    pub history_fraction_digits: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            max_digits: DEFAULT_MAX_DIGITS,
            history_fraction_digits: DEFAULT_HISTORY_FRACTION_DIGITS,
        }
    }
}

/// The full calculator state.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CalculatorState {
    /// Text currently shown.
    pub display: String,
    /// Numeric value of the display, or the last computed result.
    pub current_number: f64,
    /// Left operand captured when an operator was pressed.
    pub previous_number: f64,
    /// Pending binary operation, if any.
    pub operation: Option<Operation>,
    /// Whether digits extend the display instead of replacing it.
    pub is_typing_number: bool,
    /// Trace of the pending or just-completed expression.
    pub history: String,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            current_number: 0.0,
            previous_number: 0.0,
            operation: None,
            is_typing_number: false,
            history: String::new(),
        }
    }
}

impl CalculatorState {
    /// Whether the display shows the division-by-zero sentinel.
    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }
}

/// A calculator session.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    state: CalculatorState,
    settings: EngineSettings,
}

impl Calculator {
    /// Create a calculator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with custom settings.
    pub fn with_settings(settings: EngineSettings) -> Self {
        Self {
            state: CalculatorState::default(),
            settings,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn settings(&self) -> EngineSettings {
        self.settings
    }

    pub fn display(&self) -> &str {
        &self.state.display
    }

    pub fn history(&self) -> &str {
        &self.state.history
    }

    /// Apply one input and return the resulting state.
    pub fn handle_input(&mut self, input: Input) -> &CalculatorState {
        trace!(?input, "handling input");
        match input {
            Input::Digit(digit) => self.press_digit(digit),
            Input::Decimal => self.press_decimal(),
            Input::Operator(op) => self.press_operator(op),
            Input::Equals => self.press_equals(),
            Input::Clear => self.clear(),
            Input::ToggleSign => self.toggle_sign(),
            Input::Percent => self.percent(),
        }
        &self.state
    }

    /// Apply a sequence of inputs in order.
    pub fn feed<I>(&mut self, inputs: I) -> &CalculatorState
    where
        I: IntoIterator<Item = Input>,
    {
        for input in inputs {
            self.handle_input(input);
        }
        &self.state
    }

    pub fn press_digit(&mut self, digit: u8) {
        if digit > 9 {
            debug!(digit, "ignoring out-of-range digit");
            return;
        }
        let digit = char::from(b'0' + digit);
        let state = &mut self.state;

        if state.is_typing_number {
            let typed = state.display.chars().filter(char::is_ascii_digit).count();
            if typed >= self.settings.max_digits {
                debug!(display = %state.display, "digit cap reached");
            } else if state.display == "0" {
                state.display = digit.to_string();
            } else {
                state.display.push(digit);
            }
        } else {
            state.display = digit.to_string();
            state.is_typing_number = true;
        }

        state.current_number = parse_display(&state.display);
        if state.operation.is_none() {
            state.history.clear();
        }
    }

    pub fn press_decimal(&mut self) {
        let state = &mut self.state;
        if state.display.contains('.') {
            debug!(display = %state.display, "display already has a decimal point");
            return;
        }
        state.display.push('.');
        state.is_typing_number = true;
    }

    pub fn press_operator(&mut self, op: Operation) {
        if self.state.operation.is_some() {
            self.press_equals();
        }
        let state = &mut self.state;
        state.previous_number = state.current_number;
        state.operation = Some(op);
        state.is_typing_number = false;
        state.history = format!(
            "{} {}",
            format::grouped(state.previous_number, self.settings.history_fraction_digits),
            op.symbol()
        );
    }

    pub fn press_equals(&mut self) {
        let fraction_digits = self.settings.history_fraction_digits;
        let state = &mut self.state;

        let result = match state.operation {
            Some(op) => match op.apply(state.previous_number, state.current_number) {
                Some(result) => result,
                None => {
                    debug!(dividend = state.previous_number, "division by zero");
                    state.display = ERROR_DISPLAY.to_string();
                    state.operation = None;
                    state.is_typing_number = false;
                    return;
                }
            },
            None => state.current_number,
        };

        state.display = if result.fract() == 0.0 {
            format::integer(result)
        } else {
            format::natural(result)
        };

        if let Some(op) = state.operation {
            state.history = format!(
                "{} {} {} =",
                format::grouped(state.previous_number, fraction_digits),
                op.symbol(),
                format::grouped(state.current_number, fraction_digits)
            );
        }

        state.current_number = result;
        state.operation = None;
        state.is_typing_number = false;
    }

    pub fn clear(&mut self) {
        self.state = CalculatorState::default();
    }

    pub fn toggle_sign(&mut self) {
        let state = &mut self.state;
        state.current_number = -state.current_number;
        if state.display.starts_with('-') {
            state.display.remove(0);
        } else {
            state.display.insert(0, '-');
        }
    }

    pub fn percent(&mut self) {
        let state = &mut self.state;
        state.current_number /= 100.0;
        state.display = format::natural(state.current_number);
    }
}

/// Parse the display text, falling back to zero.
fn parse_display(display: &str) -> f64 {
    display.parse().unwrap_or(0.0)
}
