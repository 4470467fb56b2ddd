//! Operation rules applied by the calculator engine.
//!
//! An [`Operation`] is an immutable, stateless rule identified by its keypad
//! token. Binary rules (`+`, `-`, `×`, `÷`) run on `f32`, the fast path used for
//! chained keypad arithmetic. Unary rules (`√`, `sin`, `cos`) run on
//! [`Decimal`] so transcendental results keep 28 significant digits instead of
//! compounding float rounding error. Operands the decimal type cannot hold fall
//! back to `f64`.
//!
//! Arity is guarded at lookup: [`crate::domain::registry::binary`] and
//! [`crate::domain::registry::unary`] return [`CalcError::Unsupported`] for a
//! token of the other kind.

use super::error::{CalcError, Result};
use super::number::Operand;
use rust_decimal::{Decimal, MathematicalOps};
use std::fmt;

/// Degrees in a full turn, used to reduce trigonometric arguments exactly.
const FULL_TURN_DEGREES: i64 = 360;

/// Degrees in a half turn (π radians).
const HALF_TURN_DEGREES: i64 = 180;

/// Two-operand arithmetic rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Single-operand function rule. Trigonometric functions take degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    SquareRoot,
    Sine,
    Cosine,
}

/// A registered operation, tagged by arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Binary(BinaryOp),
    Unary(UnaryOp),
}

impl BinaryOp {
    /// Keypad token for this operator, as shown on the previous-operand line.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Applies the operator to `(lhs, rhs)`.
    ///
    /// # Errors
    ///
    /// - [`CalcError::DivisionByZero`] when dividing by zero
    /// - [`CalcError::Undefined`] when the result overflows `f32`
    pub fn apply(self, lhs: f32, rhs: f32) -> Result<f32> {
        let value = match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                lhs / rhs
            }
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(CalcError::Undefined(format!("{lhs} {} {rhs}", self.token())))
        }
    }
}

impl UnaryOp {
    /// Keypad token for this function.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::SquareRoot => "√",
            Self::Sine => "sin",
            Self::Cosine => "cos",
        }
    }

    /// Applies the function to a parsed operand, keeping its representation.
    ///
    /// # Errors
    ///
    /// The errors of [`Self::apply`] and [`Self::apply_wide`].
    pub fn evaluate(self, operand: Operand) -> Result<Operand> {
        match operand {
            Operand::Exact(value) => self.apply(value).map(Operand::Exact),
            Operand::Wide(value) => self.apply_wide(value).map(Operand::Wide),
        }
    }

    /// Applies the function to `operand`.
    ///
    /// Sine and cosine interpret `operand` as degrees. The argument is reduced
    /// modulo 360 in decimal arithmetic before conversion to radians, so whole
    /// turns add no error.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::Undefined`] for the square root of a negative number
    /// or when the series evaluation overflows.
    pub fn apply(self, operand: Decimal) -> Result<Decimal> {
        let undefined = || CalcError::Undefined(format!("{}({operand})", self.token()));

        match self {
            Self::SquareRoot => operand.sqrt().ok_or_else(undefined),
            Self::Sine => to_radians(operand)
                .and_then(|radians| radians.checked_sin())
                .ok_or_else(undefined),
            Self::Cosine => to_radians(operand)
                .and_then(|radians| radians.checked_cos())
                .ok_or_else(undefined),
        }
    }

    /// Applies the function to an operand outside the decimal range.
    ///
    /// Trigonometric arguments are reduced modulo 360 before conversion.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::Undefined`] for the square root of a negative number
    /// or a non-finite result.
    pub fn apply_wide(self, operand: f64) -> Result<f64> {
        let value = match self {
            Self::SquareRoot if operand < 0.0 => f64::NAN,
            Self::SquareRoot => operand.sqrt(),
            Self::Sine => (operand % 360.0).to_radians().sin(),
            Self::Cosine => (operand % 360.0).to_radians().cos(),
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(CalcError::Undefined(format!("{}({operand})", self.token())))
        }
    }
}

fn to_radians(degrees: Decimal) -> Option<Decimal> {
    let reduced = degrees.checked_rem(Decimal::from(FULL_TURN_DEGREES))?;
    reduced
        .checked_mul(Decimal::PI)?
        .checked_div(Decimal::from(HALF_TURN_DEGREES))
}

impl Operation {
    /// Keypad token identifying this operation.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Binary(op) => op.token(),
            Self::Unary(op) => op.token(),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
