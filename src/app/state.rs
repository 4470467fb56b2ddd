//! Calculator state and its keystroke transitions.
//!
//! This module defines [`CalculatorState`], the single source of truth for what
//! the two-line display shows: the operand being typed, the left-hand operand
//! waiting for an operator's right-hand side, and the pending operator itself.
//!
//! # Transitions
//!
//! Each keystroke maps to one method. Entry methods (`append_digit_or_point`,
//! `delete_last_character`, `toggle_sign`, `clear`) cannot fail. Computing
//! methods (`choose_operator`, `compute_binary`, `compute_unary`) return a
//! [`Result`] so the event handler can decide between entering the Error phase
//! and ignoring the keystroke; see [`crate::app::handler`].
//!
//! # Example
//!
//! ```rust
//! use keypad::app::CalculatorState;
//!
//! let mut state = CalculatorState::default();
//! state.append_digit_or_point("6");
//! state.choose_operator("+")?;
//! state.append_digit_or_point("4");
//! assert_eq!(state.previous_display(), "6 +");
//! state.compute_binary()?;
//! assert_eq!(state.current_display(), "10");
//! # Ok::<(), keypad::CalcError>(())
//! ```

use super::phase::Phase;
use crate::domain::error::Result;
use crate::domain::number::{self, Operand, MAX_UNARY_PRECISION};
use crate::domain::{registry, BinaryOp};

/// Text shown in place of the current operand after a fault.
pub const ERROR_MARKER: &str = "Error";

/// Central calculator state.
///
/// Mutated only through its transition methods, normally via
/// [`crate::app::handle_event`]. `pending_operator` is set only while
/// `previous_operand` is non-empty, and `current_operand` never holds more than
/// one decimal point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorState {
    /// Operand being typed, or the last computed result. Empty means nothing
    /// has been entered yet.
    pub current_operand: String,

    /// Left-hand operand committed by choosing an operator.
    pub previous_operand: String,

    /// Operator waiting for the right-hand operand.
    pub pending_operator: Option<BinaryOp>,

    /// Decimal places unary results are rounded to.
    ///
    /// Not touched by `clear`.
    pub unary_precision: u32,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(MAX_UNARY_PRECISION)
    }
}

impl CalculatorState {
    /// Creates an idle state whose unary results are rounded to
    /// `unary_precision` decimal places.
    #[must_use]
    pub fn new(unary_precision: u32) -> Self {
        Self {
            current_operand: String::new(),
            previous_operand: String::new(),
            pending_operator: None,
            unary_precision: unary_precision.min(MAX_UNARY_PRECISION),
        }
    }

    /// Returns `true` while the current operand holds the error marker.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.current_operand == ERROR_MARKER
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_error() {
            Phase::Error
        } else if !self.previous_operand.is_empty() || self.pending_operator.is_some() {
            if self.current_operand.is_empty() {
                Phase::OperatorChosen
            } else {
                Phase::EnteringRightOperand
            }
        } else if self.current_operand.is_empty() {
            Phase::Idle
        } else {
            Phase::EnteringLeftOperand
        }
    }

    /// Appends a digit (`"0"`-`"9"`) or decimal point (`"."`).
    ///
    /// Entry rules:
    /// - a second `"0"` after a lone `"0"` is ignored
    /// - `"."` on an empty operand produces `"0."`
    /// - `"."` is ignored once the operand has a decimal point
    /// - a non-zero digit replaces a lone `"0"`
    ///
    /// Entry after a fault clears the error marker first. Any other token is
    /// ignored.
    pub fn append_digit_or_point(&mut self, token: &str) {
        if self.is_error() {
            self.clear();
        }

        match token {
            "." => {
                if self.current_operand.is_empty() {
                    self.current_operand.push_str("0.");
                } else if !self.current_operand.contains('.') {
                    self.current_operand.push('.');
                }
            }
            "0" if self.current_operand == "0" => {}
            digit if is_digit(digit) => {
                if self.current_operand == "0" {
                    self.current_operand.clear();
                }
                self.current_operand.push_str(digit);
            }
            other => {
                tracing::trace!(token = %other, "ignoring non-digit entry");
            }
        }
    }

    /// Commits the current operand as the left-hand side of `token`.
    ///
    /// - With no current operand but a pending one, only the operator is replaced.
    /// - With neither, nothing happens.
    /// - With both, the pending computation runs first and its result becomes
    ///   the new left-hand operand.
    ///
    /// Nothing happens while the error marker is shown.
    ///
    /// # Errors
    ///
    /// - [`crate::CalcError::Unsupported`] if `token` is not a binary operator
    /// - the faults of [`Self::compute_binary`] when chaining
    pub fn choose_operator(&mut self, token: &str) -> Result<()> {
        let op = registry::binary(token)?;

        if self.is_error() {
            tracing::trace!(operator = %op, "ignoring operator while in error");
            return Ok(());
        }

        if self.current_operand.is_empty() {
            if !self.previous_operand.is_empty() {
                tracing::debug!(operator = %op, "replacing pending operator");
                self.pending_operator = Some(op);
            }
            return Ok(());
        }

        if !self.previous_operand.is_empty() {
            self.compute_binary()?;
        }

        self.pending_operator = Some(op);
        self.previous_operand = std::mem::take(&mut self.current_operand);
        Ok(())
    }

    /// Applies the pending operator to the previous and current operands.
    ///
    /// Does nothing if either operand is empty or no operator is pending. On
    /// success the formatted result becomes the current operand and the
    /// previous operand and operator are cleared.
    ///
    /// # Errors
    ///
    /// - [`crate::CalcError::Parse`] if either operand is not a number
    /// - [`crate::CalcError::DivisionByZero`] for `÷ 0`
    /// - [`crate::CalcError::Undefined`] if the result overflows
    pub fn compute_binary(&mut self) -> Result<()> {
        if self.current_operand.is_empty() || self.previous_operand.is_empty() {
            return Ok(());
        }
        let Some(op) = self.pending_operator else {
            return Ok(());
        };

        let lhs = number::parse_float(&self.previous_operand)?;
        let rhs = number::parse_float(&self.current_operand)?;
        let value = op.apply(lhs, rhs)?;

        tracing::debug!(lhs, rhs, operator = %op, value, "binary computed");

        self.current_operand = number::format_float(value);
        self.previous_operand.clear();
        self.pending_operator = None;
        Ok(())
    }

    /// Applies the unary function `token` to the current operand alone.
    ///
    /// Evaluated in decimal arithmetic and rounded to `unary_precision` places,
    /// or in `f64` when the operand does not fit the decimal type.
    /// Does nothing if the current operand is blank. On success the previous
    /// operand and pending operator are discarded.
    ///
    /// # Errors
    ///
    /// - [`crate::CalcError::Unsupported`] if `token` is not a unary function
    /// - [`crate::CalcError::Parse`] if the current operand is not a number
    /// - [`crate::CalcError::Undefined`] for results outside the function's domain
    pub fn compute_unary(&mut self, token: &str) -> Result<()> {
        if self.current_operand.trim().is_empty() {
            return Ok(());
        }

        let op = registry::unary(token)?;
        let operand = number::parse_operand(&self.current_operand)?;
        let value = match op.evaluate(operand)? {
            Operand::Exact(value) => {
                number::format_decimal(number::round_to(value, self.unary_precision))
            }
            Operand::Wide(value) => number::format_wide(value),
        };

        tracing::debug!(?operand, function = op.token(), %value, "unary computed");

        self.current_operand = value;
        self.previous_operand.clear();
        self.pending_operator = None;
        Ok(())
    }

    /// Removes the last character of the current operand.
    ///
    /// Clears the error marker as a whole rather than truncating it.
    pub fn delete_last_character(&mut self) {
        if self.is_error() {
            self.clear();
            return;
        }
        self.current_operand.pop();
    }

    /// Negates the current operand.
    ///
    /// Rewrites the numeral text, so operands of any length keep every digit.
    /// Ignored if the operand is blank or not a number.
    pub fn toggle_sign(&mut self) {
        if self.current_operand.trim().is_empty() {
            return;
        }

        match number::negate_numeral(&self.current_operand) {
            Ok(numeral) => self.current_operand = numeral,
            Err(e) => tracing::trace!(error = %e, "sign toggle ignored"),
        }
    }

    /// Resets the operands and pending operator.
    pub fn clear(&mut self) {
        self.current_operand.clear();
        self.previous_operand.clear();
        self.pending_operator = None;
    }

    /// Replaces the whole state with the error marker.
    pub fn fault(&mut self) {
        self.clear();
        self.current_operand.push_str(ERROR_MARKER);
    }

    /// Text for the current-operand line.
    #[must_use]
    pub fn current_display(&self) -> &str {
        &self.current_operand
    }

    /// Text for the previous-operand line: operand, a space, then the operator.
    #[must_use]
    pub fn previous_display(&self) -> String {
        let operator = self.pending_operator.map_or("", BinaryOp::token);
        format!("{} {operator}", self.previous_operand)
    }
}

fn is_digit(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CalcError;

    fn state_with(current: &str) -> CalculatorState {
        CalculatorState {
            current_operand: current.to_string(),
            ..CalculatorState::default()
        }
    }

    fn type_keys(state: &mut CalculatorState, keys: &str) {
        for c in keys.chars() {
            state.append_digit_or_point(&c.to_string());
        }
    }

    #[test]
    fn test_leading_zero_suppression() {
        let mut state = state_with("0");
        state.append_digit_or_point("0");
        assert_eq!(state.current_operand, "0");

        state.append_digit_or_point("7");
        assert_eq!(state.current_operand, "7");
    }

    #[test]
    fn test_point_rules() {
        let mut state = CalculatorState::default();
        state.append_digit_or_point(".");
        assert_eq!(state.current_operand, "0.");

        type_keys(&mut state, "5.2.");
        assert_eq!(state.current_operand, "0.52");

        let mut state = state_with("0");
        state.append_digit_or_point(".");
        assert_eq!(state.current_operand, "0.");
        state.append_digit_or_point("0");
        assert_eq!(state.current_operand, "0.0");
    }

    #[test]
    fn test_non_digit_entry_ignored() {
        let mut state = state_with("12");
        state.append_digit_or_point("a");
        state.append_digit_or_point("12");
        state.append_digit_or_point("");
        assert_eq!(state.current_operand, "12");
    }

    #[test]
    fn test_digit_after_error_starts_fresh() {
        let mut state = CalculatorState::default();
        state.fault();
        state.append_digit_or_point("3");
        assert_eq!(state.current_operand, "3");
        assert_eq!(state.phase(), Phase::EnteringLeftOperand);
    }

    #[test]
    fn test_operator_substitution() {
        let mut state = state_with("8");
        state.choose_operator("+").unwrap();
        state.choose_operator("×").unwrap();
        assert_eq!(state.previous_operand, "8");
        assert_eq!(state.pending_operator, Some(BinaryOp::Multiply));
        assert_eq!(state.phase(), Phase::OperatorChosen);
    }

    #[test]
    fn test_operator_on_idle_is_noop() {
        let mut state = CalculatorState::default();
        state.choose_operator("+").unwrap();
        assert_eq!(state, CalculatorState::default());
    }

    #[test]
    fn test_operator_chains_pending_computation() {
        let mut state = state_with("6");
        state.choose_operator("+").unwrap();
        type_keys(&mut state, "4");
        state.choose_operator("×").unwrap();

        assert_eq!(state.previous_operand, "10");
        assert_eq!(state.pending_operator, Some(BinaryOp::Multiply));
        assert!(state.current_operand.is_empty());
        assert_eq!(state.previous_display(), "10 ×");
    }

    #[test]
    fn test_unknown_operator_is_unsupported() {
        let mut state = state_with("6");
        assert!(matches!(
            state.choose_operator("%"),
            Err(CalcError::Unsupported(_))
        ));
        assert!(matches!(
            state.choose_operator("√"),
            Err(CalcError::Unsupported(_))
        ));
        assert_eq!(state, state_with("6"));
    }

    #[test]
    fn test_compute_binary() {
        let mut state = state_with("7");
        state.choose_operator("÷").unwrap();
        type_keys(&mut state, "2");
        state.compute_binary().unwrap();
        assert_eq!(state.current_operand, "3.5");
        assert_eq!(state.previous_display(), " ");
        assert_eq!(state.phase(), Phase::EnteringLeftOperand);
    }

    #[test]
    fn test_compute_binary_needs_both_operands() {
        let mut state = state_with("7");
        state.compute_binary().unwrap();
        assert_eq!(state.current_operand, "7");

        state.choose_operator("-").unwrap();
        state.compute_binary().unwrap();
        assert_eq!(state.previous_display(), "7 -");
        assert!(state.current_operand.is_empty());
    }

    #[test]
    fn test_compute_binary_faults() {
        let mut state = state_with("1");
        state.choose_operator("÷").unwrap();
        type_keys(&mut state, "0.");
        assert!(matches!(state.compute_binary(), Err(CalcError::DivisionByZero)));

        let mut state = state_with("1");
        state.choose_operator("+").unwrap();
        state.current_operand = "-".to_string();
        assert!(matches!(state.compute_binary(), Err(CalcError::Parse(_))));
    }

    #[test]
    fn test_compute_unary_discards_pending_operator() {
        let mut state = CalculatorState::new(10);
        type_keys(&mut state, "5");
        state.choose_operator("+").unwrap();
        type_keys(&mut state, "9");
        state.compute_unary("√").unwrap();
        assert_eq!(state.current_operand, "3");
        assert_eq!(state.previous_display(), " ");
    }

    #[test]
    fn test_compute_unary_respects_precision() {
        let mut state = CalculatorState::new(4);
        type_keys(&mut state, "2");
        state.compute_unary("√").unwrap();
        assert_eq!(state.current_operand, "1.4142");
    }

    #[test]
    fn test_trig_at_default_precision_is_exact() {
        for (function, degrees, expected) in [
            ("sin", "30", "0.5"),
            ("cos", "90", "0"),
            ("sin", "180", "0"),
            ("cos", "270", "0"),
            ("cos", "60", "0.5"),
        ] {
            let mut state = state_with(degrees);
            state.compute_unary(function).unwrap();
            assert_eq!(state.current_operand, expected, "{function} {degrees}");
        }
    }

    #[test]
    fn test_compute_unary_beyond_decimal_range() {
        let mut state = state_with("100000003318135351409612647563264");
        state.compute_unary("√").unwrap();
        assert!(state.current_operand.starts_with("1000000016"), "{}", state.current_operand);

        let mut state = state_with("1234567890123456789012345678901");
        state.compute_unary("√").unwrap();
        assert!(state.current_operand.starts_with("1111111106111"), "{}", state.current_operand);

        let mut state = state_with("0.0000000000000000000000000000004");
        state.compute_unary("√").unwrap();
        assert!(state.current_operand.starts_with("0.000000000000000632455"), "{}", state.current_operand);
    }

    #[test]
    fn test_compute_unary_edge_cases() {
        let mut state = CalculatorState::default();
        state.compute_unary("√").unwrap();
        assert!(state.current_operand.is_empty());

        let mut state = state_with("4");
        assert!(matches!(
            state.compute_unary("tan"),
            Err(CalcError::Unsupported(_))
        ));
        assert_eq!(state.current_operand, "4");

        let mut state = state_with("-4");
        assert!(matches!(
            state.compute_unary("√"),
            Err(CalcError::Undefined(_))
        ));
    }

    #[test]
    fn test_delete_last_character() {
        let mut state = state_with("123");
        state.delete_last_character();
        assert_eq!(state.current_operand, "12");

        let mut state = CalculatorState::default();
        state.delete_last_character();
        assert_eq!(state, CalculatorState::default());

        let mut state = CalculatorState::default();
        state.fault();
        state.delete_last_character();
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn test_toggle_sign() {
        let mut state = state_with("5");
        state.toggle_sign();
        assert_eq!(state.current_operand, "-5");
        state.toggle_sign();
        assert_eq!(state.current_operand, "5");

        let mut state = state_with("0.50");
        state.toggle_sign();
        assert_eq!(state.current_operand, "-0.5");

        let mut state = state_with("0");
        state.toggle_sign();
        assert_eq!(state.current_operand, "0");

        let mut state = state_with("100000003318135351409612647563264");
        state.toggle_sign();
        assert_eq!(state.current_operand, "-100000003318135351409612647563264");
    }

    #[test]
    fn test_toggle_sign_ignores_non_numbers() {
        let mut state = CalculatorState::default();
        state.toggle_sign();
        assert!(state.current_operand.is_empty());

        let mut state = CalculatorState::default();
        state.fault();
        state.toggle_sign();
        assert!(state.is_error());
    }

    #[test]
    fn test_clear_keeps_precision() {
        let mut state = CalculatorState::new(6);
        type_keys(&mut state, "42");
        state.choose_operator("+").unwrap();
        state.clear();
        assert_eq!(state.current_display(), "");
        assert_eq!(state.previous_display(), " ");
        assert_eq!(state.unary_precision, 6);
    }

    #[test]
    fn test_operator_ignored_in_error() {
        let mut state = CalculatorState::default();
        state.fault();
        state.choose_operator("+").unwrap();
        assert!(state.is_error());
        assert_eq!(state.previous_display(), " ");
    }
}
