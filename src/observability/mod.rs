//! Tracing subscriber setup for hosts embedding the engine.
//!
//! The engine only emits `tracing` events and spans; it never installs a
//! subscriber on its own. Hosts that want the output call [`init_tracing`] once
//! at startup.
//!
//! # Configuration
//!
//! Filter directives are resolved in this order:
//! 1. `trace_level` from [`crate::Config`]
//! 2. Default: `"info"`
//!
//! Useful directives: `keypad=debug` shows every computation and fault,
//! `keypad=trace` adds each keystroke and display refresh.
//!
//! # Usage
//!
//! ```rust
//! use keypad::observability::init_tracing;
//! use keypad::Config;
//!
//! let config = Config {
//!     trace_level: Some("keypad=debug".to_string()),
//!     ..Default::default()
//! };
//! init_tracing(&config);
//!
//! tracing::debug!("engine ready");
//! ```

mod init;

pub use init::init_tracing;
