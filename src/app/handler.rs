//! Keystroke dispatch and fault recovery.
//!
//! This module implements the event handler that turns one user action into one
//! state transition. It is the boundary where [`CalcError`]s stop: faults put the
//! state into the Error phase, unsupported operations are dropped, and nothing
//! propagates to the caller.
//!
//! # Architecture
//!
//! ```text
//! Key label → Event::from_key → handle_event → CalculatorState method
//!                                    │
//!                                    ├─ Ok            → state updated
//!                                    ├─ fault         → "Error" marker
//!                                    └─ unsupported   → no-op
//! ```
//!
//! # Example
//!
//! ```rust
//! use keypad::app::{handle_event, CalculatorState, Event};
//!
//! let mut state = CalculatorState::default();
//! for key in ["1", "÷", "0", "="] {
//!     let event = Event::from_key(key).expect("keypad label");
//!     handle_event(&mut state, &event);
//! }
//! assert_eq!(state.current_display(), "Error");
//! ```

use super::state::CalculatorState;
use crate::domain::error::{CalcError, Result};

/// One user action on the keypad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Digit `"0"`-`"9"` or decimal point `"."`.
    AppendDigitOrPoint(String),
    /// Binary operator token: `+`, `-`, `×`, `÷`.
    ChooseOperator(String),
    /// The `=` key.
    ComputeBinary,
    /// Unary function token: `√`, `sin`, `cos`.
    ComputeUnary(String),
    DeleteLastCharacter,
    ToggleSign,
    Clear,
}

impl Event {
    /// Maps a keypad button label to its event.
    ///
    /// Recognized labels: digits, `.`, the binary operator and unary function
    /// tokens, `=`, `C`, `DEL` and `+/-`. Returns `None` for anything else.
    #[must_use]
    pub fn from_key(label: &str) -> Option<Self> {
        let event = match label {
            "=" => Self::ComputeBinary,
            "C" => Self::Clear,
            "DEL" => Self::DeleteLastCharacter,
            "+/-" => Self::ToggleSign,
            "." => Self::AppendDigitOrPoint(label.to_string()),
            "+" | "-" | "×" | "÷" => Self::ChooseOperator(label.to_string()),
            "√" | "sin" | "cos" => Self::ComputeUnary(label.to_string()),
            digit if digit.len() == 1 && digit.chars().all(|c| c.is_ascii_digit()) => {
                Self::AppendDigitOrPoint(digit.to_string())
            }
            _ => return None,
        };
        Some(event)
    }
}

/// Applies `event` to `state`.
///
/// # Returns
///
/// `true` if either display line changed, so the host knows to repaint.
///
/// # Tracing
///
/// Each call runs inside a debug-level `handle_event` span carrying the event.
pub fn handle_event(state: &mut CalculatorState, event: &Event) -> bool {
    let _span = tracing::debug_span!("handle_event", event = ?event).entered();

    let before = (state.current_display().to_string(), state.previous_display());

    let outcome = match event {
        Event::AppendDigitOrPoint(token) => {
            state.append_digit_or_point(token);
            Ok(())
        }
        Event::ChooseOperator(token) => state.choose_operator(token),
        Event::ComputeBinary => state.compute_binary(),
        Event::ComputeUnary(token) => state.compute_unary(token),
        Event::DeleteLastCharacter => {
            state.delete_last_character();
            Ok(())
        }
        Event::ToggleSign => {
            state.toggle_sign();
            Ok(())
        }
        Event::Clear => {
            state.clear();
            Ok(())
        }
    };

    recover(state, outcome);

    let changed = before.0 != state.current_display() || before.1 != state.previous_display();
    tracing::trace!(
        current = %state.current_display(),
        previous = %state.previous_display(),
        changed,
        "display updated"
    );
    changed
}

fn recover(state: &mut CalculatorState, outcome: Result<()>) {
    match outcome {
        Ok(()) => {}
        Err(e) if e.is_fault() => {
            tracing::debug!(error = %e, "computation failed, entering error state");
            state.fault();
        }
        Err(e @ CalcError::Unsupported(_)) => {
            tracing::trace!(error = %e, "unsupported operation ignored");
        }
        Err(e) => {
            tracing::error!(error = %e, "unexpected error during dispatch");
        }
    }
}
