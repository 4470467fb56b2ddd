//! The calculator engine facade.
//!
//! [`Calculator`] owns exactly one [`CalculatorState`] for its lifetime and is
//! the whole boundary a presentation layer needs: seven inbound commands, two
//! outbound display queries. The host constructs one at startup (usually via
//! [`crate::initialize`]) and keeps it; there is no global instance.
//!
//! Every command is infallible from the caller's point of view. Faults show up
//! as the `"Error"` display value; unsupported tokens are ignored.
//!
//! ```rust
//! use keypad::Calculator;
//!
//! let mut calc = Calculator::default();
//! calc.append_digit_or_point("6");
//! calc.choose_operator("+");
//! calc.append_digit_or_point("4");
//! calc.compute_binary();
//! assert_eq!(calc.current_display(), "10");
//! assert_eq!(calc.previous_display(), " ");
//! ```

use super::display::Display;
use super::handler::{handle_event, Event};
use super::phase::Phase;
use super::state::CalculatorState;

/// Keypad calculator engine.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculatorState,
}

impl Calculator {
    /// Creates an idle engine rounding unary results to `unary_precision`
    /// decimal places (at most 25).
    #[must_use]
    pub fn new(unary_precision: u32) -> Self {
        Self {
            state: CalculatorState::new(unary_precision),
        }
    }

    /// Applies one event. Returns `true` if the display changed.
    pub fn dispatch(&mut self, event: &Event) -> bool {
        handle_event(&mut self.state, event)
    }

    /// Applies the event bound to a keypad label.
    ///
    /// Returns `false` without touching the state for unknown labels.
    pub fn press(&mut self, label: &str) -> bool {
        Event::from_key(label).is_some_and(|event| self.dispatch(&event))
    }

    /// Types a digit or the decimal point into the current operand.
    pub fn append_digit_or_point(&mut self, token: &str) {
        self.dispatch(&Event::AppendDigitOrPoint(token.to_string()));
    }

    /// Commits the current operand with a binary operator, chaining any pending one.
    pub fn choose_operator(&mut self, token: &str) {
        self.dispatch(&Event::ChooseOperator(token.to_string()));
    }

    /// The `=` key.
    pub fn compute_binary(&mut self) {
        self.dispatch(&Event::ComputeBinary);
    }

    /// Applies `√`, `sin` or `cos` to the current operand.
    pub fn compute_unary(&mut self, token: &str) {
        self.dispatch(&Event::ComputeUnary(token.to_string()));
    }

    /// Backspace. Clears the error marker as a whole.
    pub fn delete_last_character(&mut self) {
        self.dispatch(&Event::DeleteLastCharacter);
    }

    /// Negates the current operand.
    pub fn toggle_sign(&mut self) {
        self.dispatch(&Event::ToggleSign);
    }

    /// Resets both display lines.
    pub fn clear(&mut self) {
        self.dispatch(&Event::Clear);
    }

    /// Text for the current-operand line.
    #[must_use]
    pub fn current_display(&self) -> &str {
        self.state.current_display()
    }

    /// Text for the previous-operand line, such as `"12 ×"`.
    #[must_use]
    pub fn previous_display(&self) -> String {
        self.state.previous_display()
    }

    /// Both display lines at once.
    #[must_use]
    pub fn display(&self) -> Display {
        Display::from_state(&self.state)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Read-only view of the underlying state.
    #[must_use]
    pub const fn state(&self) -> &CalculatorState {
        &self.state
    }
}
