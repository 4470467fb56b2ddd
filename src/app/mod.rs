//! Application layer: the calculator engine.
//!
//! This module sits between the presentation layer (out of crate) and the
//! domain rules. It owns the mutable state and the transitions keystrokes
//! trigger, and consults the operation registry only when a result is needed.
//!
//! # Architecture
//!
//! ```text
//! Key press → Event → handle_event → CalculatorState transition → Display
//!                          │                    │
//!                          └── fault recovery ◀─┘  (domain::registry, domain::number)
//! ```
//!
//! # Modules
//!
//! - [`display`]: Two-line display snapshot
//! - [`engine`]: [`Calculator`] facade owning one state
//! - [`handler`]: Event dispatch and error recovery
//! - [`phase`]: Derived state-machine phase
//! - [`state`]: Calculator state and transition rules
//!
//! # Example
//!
//! ```rust
//! use keypad::app::{handle_event, CalculatorState, Event};
//!
//! let mut state = CalculatorState::default();
//! let changed = handle_event(&mut state, &Event::AppendDigitOrPoint(".".into()));
//! assert!(changed);
//! assert_eq!(state.current_display(), "0.");
//! ```

pub mod display;
pub mod engine;
pub mod handler;
pub mod phase;
pub mod state;

pub use display::Display;
pub use engine::Calculator;
pub use handler::{handle_event, Event};
pub use phase::Phase;
pub use state::{CalculatorState, ERROR_MARKER};
