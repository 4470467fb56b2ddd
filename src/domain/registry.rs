//! Operation registry: the single mapping from keypad token to rule.
//!
//! The engine asks the registry for an operation only at the moment a result is
//! needed. Lookups of unknown tokens return [`CalcError::Unsupported`], which the
//! engine treats as a no-op rather than a fault.
//!
//! ```
//! use keypad::domain::registry;
//! use keypad::domain::{BinaryOp, Operation};
//!
//! assert_eq!(registry::lookup("÷").unwrap(), Operation::Binary(BinaryOp::Divide));
//! assert!(registry::lookup("%").is_err());
//! ```

use super::error::{CalcError, Result};
use super::operation::{BinaryOp, Operation, UnaryOp};

/// Every registered operation, binary rules first.
static OPERATIONS: [Operation; 7] = [
    Operation::Binary(BinaryOp::Add),
    Operation::Binary(BinaryOp::Subtract),
    Operation::Binary(BinaryOp::Multiply),
    Operation::Binary(BinaryOp::Divide),
    Operation::Unary(UnaryOp::SquareRoot),
    Operation::Unary(UnaryOp::Sine),
    Operation::Unary(UnaryOp::Cosine),
];

/// Returns the operation registered under `token`.
///
/// # Errors
///
/// Returns [`CalcError::Unsupported`] if no operation uses `token`.
pub fn lookup(token: &str) -> Result<Operation> {
    OPERATIONS
        .iter()
        .copied()
        .find(|op| op.token() == token)
        .ok_or_else(|| CalcError::Unsupported(format!("unknown token: {token}")))
}

/// Returns the binary operator registered under `token`.
///
/// # Errors
///
/// Returns [`CalcError::Unsupported`] for unknown tokens and for unary functions.
pub fn binary(token: &str) -> Result<BinaryOp> {
    match lookup(token)? {
        Operation::Binary(op) => Ok(op),
        Operation::Unary(op) => Err(CalcError::Unsupported(format!(
            "{} is not a binary operator",
            op.token()
        ))),
    }
}

/// Returns the unary function registered under `token`.
///
/// # Errors
///
/// Returns [`CalcError::Unsupported`] for unknown tokens and for binary operators.
pub fn unary(token: &str) -> Result<UnaryOp> {
    match lookup(token)? {
        Operation::Unary(op) => Ok(op),
        Operation::Binary(op) => Err(CalcError::Unsupported(format!(
            "{} is not a unary function",
            op.token()
        ))),
    }
}

/// Tokens of all registered operations, in registration order.
pub fn tokens() -> impl Iterator<Item = &'static str> {
    OPERATIONS.iter().map(|op| op.token())
}
