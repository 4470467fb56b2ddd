//! Two-line display view model.
//!
//! A [`Display`] is an immutable snapshot of what the host should paint after a
//! command: the current-operand line and the previous-operand line. Hosts that
//! prefer pulling strings one at a time can use
//! [`crate::Calculator::current_display`] and
//! [`crate::Calculator::previous_display`] instead.

use super::state::CalculatorState;

/// Snapshot of both display lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Display {
    /// Operand being typed, the last result, or `"Error"`.
    pub current: String,

    /// Pending left-hand operand and operator, separated by a space.
    pub previous: String,
}

impl Display {
    #[must_use]
    pub fn from_state(state: &CalculatorState) -> Self {
        Self {
            current: state.current_display().to_string(),
            previous: state.previous_display(),
        }
    }
}
