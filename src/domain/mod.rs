//! Domain layer: operations and numeric rules.
//!
//! This module holds everything that is a pure function of its inputs, with no
//! knowledge of keystrokes or display state.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`operation`]: Binary and unary rules tagged by arity
//! - [`registry`]: Token to operation lookup
//! - [`number`]: Operand parsing and result formatting
//!
//! # Examples
//!
//! ```
//! use keypad::domain::{registry, Result};
//!
//! fn add(lhs: f32, rhs: f32) -> Result<f32> {
//!     registry::binary("+")?.apply(lhs, rhs)
//! }
//!
//! assert_eq!(add(6.0, 4.0).unwrap(), 10.0);
//! ```

pub mod error;
pub mod number;
pub mod operation;
pub mod registry;

pub use error::{CalcError, Result};
pub use number::Operand;
pub use operation::{BinaryOp, Operation, UnaryOp};
