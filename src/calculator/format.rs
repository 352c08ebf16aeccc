//! Number formatting for the display and the history trace.
//!
//! Three renderings are used by the engine:
//! - [`integer`] for integral results of `=`
//! - [`natural`] for every other displayed value
//! - [`grouped`] for numbers shown in the history trace

/// Magnitude at which [`natural`] switches to exponent notation (2^53).
const EXPONENT_UPPER: f64 = 9_007_199_254_740_992.0;

/// Magnitude below which [`natural`] switches to exponent notation.
const EXPONENT_LOWER: f64 = 1e-4;

/// Most fraction digits [`grouped`] will render. An f64 carries at most 17
/// significant decimal digits.
pub const MAX_FRACTION_DIGITS: usize = 17;

/// Format an integral value with no fraction digits.
pub fn integer(value: f64) -> String {
    format!("{value:.0}")
}

/// Format a value as its shortest round-trip decimal string.
///
/// Finite values always carry a fraction part (`1.0`, `0.5`). Very large and
/// very small magnitudes use a signed two-digit exponent (`1e+16`, `1e-05`).
pub fn natural(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(EXPONENT_LOWER..EXPONENT_UPPER).contains(&magnitude) {
        return exponent_form(value);
    }

    let plain = value.to_string();
    if plain.contains('.') {
        plain
    } else {
        format!("{plain}.0")
    }
}

fn exponent_form(value: f64) -> String {
    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
        }
        None => formatted,
    }
}

/// Format a value for the history trace.
///
/// Rounds to at most `max_fraction_digits` (capped at
/// [`MAX_FRACTION_DIGITS`]), trims trailing zeros and adds thousand
/// separators to the integer part.
pub fn grouped(value: f64, max_fraction_digits: usize) -> String {
    if !value.is_finite() {
        return natural(value);
    }

    let precision = max_fraction_digits.min(MAX_FRACTION_DIGITS);
    let fixed = format!("{:.*}", precision, value.abs());
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };

    let (int_part, fraction) = match trimmed.split_once('.') {
        Some((int_part, fraction)) => (int_part, Some(fraction)),
        None => (trimmed, None),
    };

    let mut result = String::new();
    if value.is_sign_negative() {
        result.push('-');
    }
    result.push_str(&with_separators(int_part));
    if let Some(fraction) = fraction {
        result.push('.');
        result.push_str(fraction);
    }
    result
}

/// Insert a comma every three digits of an unsigned integer string.
///
/// Works on the digit text rather than an `i64`, so integer parts beyond the
/// `i64` range group correctly.
fn with_separators(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
