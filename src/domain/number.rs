//! Operand parsing and result formatting.
//!
//! Operands live as text until a result is needed. The binary path parses them
//! as `f32`. The unary path parses them as [`Decimal`] when the numeral fits the
//! decimal type exactly, and as `f64` otherwise. Sign toggling never converts at
//! all: it rewrites the numeral text.
//!
//! Every path formats results with the same rule: a value with a non-zero
//! fractional part prints as a decimal numeral, an integral value prints with no
//! fractional part or separator.

use super::error::{CalcError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Largest number of decimal places unary results are shown with.
///
/// The decimal series for `sin` and `cos` can be off by a unit in the 28th
/// place; three guard digits keep that error out of the display.
pub const MAX_UNARY_PRECISION: u32 = 25;

/// A unary-path operand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// The numeral is represented exactly by [`Decimal`].
    Exact(Decimal),
    /// The numeral is too large or too finely fractional for [`Decimal`].
    Wide(f64),
}

/// Parses an operand for the binary (`f32`) path.
///
/// # Errors
///
/// Returns [`CalcError::Parse`] for blank text, malformed numerals, and
/// non-finite spellings such as `inf` or `NaN`.
pub fn parse_float(text: &str) -> Result<f32> {
    let trimmed = text.trim();
    match trimmed.parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::Parse(text.to_string())),
    }
}

/// Validates a keypad numeral and rewrites it in display form.
///
/// Accepts the partial numerals keypad entry can produce, such as `"0."`,
/// `"-.5"` or `"-05"`, with any number of digits. Leading integer zeros and
/// trailing fraction zeros are dropped, and every spelling of zero becomes
/// `"0"`.
///
/// # Errors
///
/// Returns [`CalcError::Parse`] if `text` is not an optionally negative run of
/// digits with at most one decimal point.
pub fn canonical_numeral(text: &str) -> Result<String> {
    let trimmed = text.trim();
    let (negative, body) = trimmed
        .strip_prefix('-')
        .map_or((false, trimmed), |rest| (true, rest));
    let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) || (int_part.is_empty() && frac_part.is_empty()) {
        return Err(CalcError::Parse(text.to_string()));
    }

    let int_part = int_part.trim_start_matches('0');
    let frac_part = frac_part.trim_end_matches('0');
    if int_part.is_empty() && frac_part.is_empty() {
        return Ok("0".to_string());
    }

    let mut numeral = String::with_capacity(int_part.len() + frac_part.len() + 3);
    if negative {
        numeral.push('-');
    }
    numeral.push_str(if int_part.is_empty() { "0" } else { int_part });
    if !frac_part.is_empty() {
        numeral.push('.');
        numeral.push_str(frac_part);
    }
    Ok(numeral)
}

/// Negates a keypad numeral without converting it to a number.
///
/// # Errors
///
/// Returns [`CalcError::Parse`] under the same rules as [`canonical_numeral`].
pub fn negate_numeral(text: &str) -> Result<String> {
    let numeral = canonical_numeral(text)?;
    Ok(match numeral.strip_prefix('-') {
        Some(magnitude) => magnitude.to_string(),
        None if numeral == "0" => numeral,
        None => format!("-{numeral}"),
    })
}

/// Parses an operand for the unary path.
///
/// # Errors
///
/// - [`CalcError::Parse`] if `text` is not a keypad numeral
/// - [`CalcError::Undefined`] if the numeral is too large even for `f64`
pub fn parse_operand(text: &str) -> Result<Operand> {
    let numeral = canonical_numeral(text)?;

    if let Ok(value) = Decimal::from_str(&numeral) {
        if format_decimal(value) == numeral {
            return Ok(Operand::Exact(value));
        }
    }

    match numeral.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Operand::Wide(value)),
        Ok(_) => Err(CalcError::Undefined(format!("{numeral} is out of range"))),
        Err(_) => Err(CalcError::Parse(text.to_string())),
    }
}

/// Formats a binary-path result.
///
/// Negative zero prints as `"0"`.
#[must_use]
pub fn format_float(value: f32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Formats an `f64` result with its shortest round-tripping digits.
///
/// Negative zero prints as `"0"`.
#[must_use]
pub fn format_wide(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Formats a decimal-path result, dropping trailing zeros.
///
/// Negative zero prints as `"0"`.
#[must_use]
pub fn format_decimal(value: Decimal) -> String {
    if value.is_zero() {
        return "0".to_string();
    }
    if value.fract().is_zero() {
        value.trunc().normalize().to_string()
    } else {
        value.normalize().to_string()
    }
}

/// Rounds `value` to `places` decimal places, midpoint away from zero.
///
/// `places` is capped at [`MAX_UNARY_PRECISION`].
#[must_use]
pub fn round_to(value: Decimal, places: u32) -> Decimal {
    value.round_dp_with_strategy(
        places.min(MAX_UNARY_PRECISION),
        RoundingStrategy::MidpointAwayFromZero,
    )
}
