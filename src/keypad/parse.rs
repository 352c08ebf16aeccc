//! Parsing typed key sequences into keypad buttons.
//!
//! Lets the terminal front end accept input such as `12.5 * 4 =` or
//! `50 % +/-` and replay it on the keypad.

use super::CalculatorButton;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// Matches one key token at the start of the input.
    /// `+/-` and `AC` come first so they win over `+` and `C`.
    static ref KEY_TOKEN: Regex = Regex::new(
        r"^(?i:\+/-|ac|[0-9.=+\-*/x×÷%c~n])"
    ).unwrap();
}

/// Error produced for input that is not a keypad key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    #[error("unrecognized key {key:?} at offset {offset}")]
    UnknownKey { key: String, offset: usize },
}

/// Parse a key sequence into buttons.
///
/// Whitespace is skipped. Accepted keys:
/// - digits and `.`
/// - `+`, `-`, `*`/`x`/`×`, `/`/`÷`
/// - `=`, `%`
/// - `AC` or `C` to clear
/// - `+/-`, `~` or `n` to toggle the sign
pub fn parse_keys(input: &str) -> Result<Vec<CalculatorButton>, KeyParseError> {
    let mut buttons = Vec::new();
    let mut offset = 0;

    while offset < input.len() {
        let rest = &input[offset..];

        let skipped = rest.len() - rest.trim_start().len();
        if skipped > 0 {
            offset += skipped;
            continue;
        }

        let matched = KEY_TOKEN
            .find(rest)
            .and_then(|token| Some((button_for_token(token.as_str())?, token.end())));
        let Some((button, len)) = matched else {
            let key = rest.chars().next().map(String::from).unwrap_or_default();
            return Err(KeyParseError::UnknownKey { key, offset });
        };

        buttons.push(button);
        offset += len;
    }

    Ok(buttons)
}

/// Map a token accepted by [`KEY_TOKEN`] to its button.
fn button_for_token(token: &str) -> Option<CalculatorButton> {
    let button = match token.to_ascii_lowercase().as_str() {
        "+/-" | "~" | "n" => CalculatorButton::Negative,
        "ac" | "c" => CalculatorButton::Clear,
        "." => CalculatorButton::Decimal,
        "=" => CalculatorButton::Equals,
        "+" => CalculatorButton::Plus,
        "-" => CalculatorButton::Minus,
        "*" | "x" | "×" => CalculatorButton::Multiply,
        "/" | "÷" => CalculatorButton::Divide,
        "%" => CalculatorButton::Percent,
        other => {
            let digit = other.parse::<u8>().ok()?;
            return CalculatorButton::digit(digit);
        }
    };
    Some(button)
}
