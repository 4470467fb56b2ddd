//! Error types for the calculator engine.
//!
//! This module defines the centralized error type [`CalcError`] and a type alias
//! [`Result`] used by the operation registry, the numeric helpers, and the
//! configuration loader. The engine's public commands never return these errors:
//! faults are folded into the `"Error"` display marker and everything else is a
//! silent no-op (see [`CalcError::is_fault`]).

use thiserror::Error;

/// The main error type for calculator operations.
///
/// # Examples
///
/// ```
/// use keypad::CalcError;
///
/// let err = CalcError::DivisionByZero;
/// assert!(err.is_fault());
///
/// let err = CalcError::Unsupported("unknown token: %".to_string());
/// assert!(!err.is_fault());
/// ```
#[derive(Debug, Error)]
pub enum CalcError {
    /// An operand string does not represent a valid number.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Right-hand operand of a division is zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// The result falls outside what the numeric type can represent.
    ///
    /// Square root of a negative number, or an overflow to a non-finite value.
    #[error("Undefined result: {0}")]
    Undefined(String),

    /// An operation was invoked through the wrong arity, or the token is unknown.
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading a configuration file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file is not valid TOML for [`crate::Config`].
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl CalcError {
    /// Returns `true` if this error puts the engine into the Error phase.
    ///
    /// Parse failures, division by zero and undefined results are user-visible
    /// faults. Unsupported operations are programming errors the engine treats
    /// as no-ops.
    #[must_use]
    pub const fn is_fault(&self) -> bool {
        matches!(
            self,
            Self::Parse(_) | Self::DivisionByZero | Self::Undefined(_)
        )
    }
}

/// A specialized `Result` type for calculator operations.
pub type Result<T> = std::result::Result<T, CalcError>;
