//! Derived state-machine phase of the calculator.
//!
//! The engine stores only three text fields; the phase is computed from them on
//! demand. It exists so hosts and tests can reason about the state machine
//! without re-deriving it from the raw fields.
//!
//! ```text
//!            digit            operator            digit
//!   Idle ───────────▶ Left ───────────▶ Chosen ───────────▶ Right
//!    ▲                 ▲                  │ operator (swap)   │
//!    │                 │                  └───────◀───────────┘ operator (chain)
//!    │                 └────────────── = (ok) ────────────────┘
//!    └─ clear / DEL ─ Error ◀───── = (parse failure / ÷ 0) ───┘
//! ```

/// Phase of the keypad state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing entered, no operator pending.
    Idle,

    /// Typing the left-hand operand, or holding a computed result.
    EnteringLeftOperand,

    /// An operator is pending and the right-hand operand is still empty.
    ///
    /// Choosing another operator here only replaces the pending one.
    OperatorChosen,

    /// An operator is pending and the right-hand operand is being typed.
    EnteringRightOperand,

    /// The current operand holds the `"Error"` marker.
    ///
    /// Left by `clear`, by delete (which clears the marker as a whole), or by
    /// the next digit entry.
    Error,
}
