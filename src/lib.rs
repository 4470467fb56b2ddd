//! Keypad: the engine behind a two-line keypad calculator.
//!
//! A presentation layer forwards each button press as one command and re-reads
//! two strings afterwards: the "current" line (the operand being typed, or the
//! last result) and the "previous" line (the pending operand and operator).
//! This crate implements everything between those two points:
//! - Digit and decimal-point entry with leading-zero suppression
//! - Pending binary operators (`+`, `-`, `×`, `÷`) with chaining and substitution
//! - Unary functions (`√`, `sin`, `cos` in degrees) in 28-digit decimal arithmetic,
//!   shown to at most 25 places
//! - Sign toggle, single-character delete and clear
//! - Fault recovery into an `"Error"` display value

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Presentation layer (host, not in this crate)       │  ← Buttons, window
//! └─────────────────────────────────────────────────────┘
//!                        │ commands ↓   ↑ display strings
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Calculator facade                                │
//! │  - Event dispatch and fault recovery                │
//! │  - Display snapshot                                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Operation registry (token → rule)                │
//! │  - Binary f32 rules, unary Decimal rules            │
//! │  - Parsing and result formatting                    │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber setup                         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Calculator state machine with event dispatch
//! - [`domain`]: Operations, registry, numeric helpers, errors
//! - [`observability`]: Tracing subscriber initialization
//!
//! # Configuration
//!
//! The engine reads a small TOML file or a host-supplied key/value map:
//!
//! ```toml
//! unary_precision = 12
//! trace_level = "keypad=debug"
//! ```
//!
//! # Example
//!
//! ```rust
//! use keypad::{initialize, Config};
//!
//! let mut calc = initialize(&Config::default());
//!
//! calc.append_digit_or_point("2");
//! calc.compute_unary("√");
//! assert!(calc.current_display().starts_with("1.41421356237309504880"));
//!
//! calc.clear();
//! for key in ["1", "÷", "0", "="] {
//!     calc.press(key);
//! }
//! assert_eq!(calc.current_display(), "Error");
//! assert_eq!(calc.previous_display(), " ");
//! ```
//!
//! # Numeric Model
//!
//! Binary operators parse operands as `f32` and format results with the
//! shortest round-tripping representation, so `0.1 + 0.2` shows `0.3`. Unary
//! functions parse as [`rust_decimal::Decimal`] and round to
//! [`Config::unary_precision`] places, at most 25 so the last-place error of
//! the `sin`/`cos` series never shows. Operands too long for the decimal type
//! fall back to `f64`. Sign toggling edits the numeral text and never loses
//! digits. Integral results of every path show
//! no fractional part: `6 + 4` shows `10`, not `10.0`.
//!
//! # Threading
//!
//! Single-threaded and synchronous: each command completes before returning and
//! the engine holds no locks. A host that needs to share it across threads
//! wraps it in its own `Mutex`.

pub mod app;
pub mod domain;
pub mod observability;

pub use app::{handle_event, Calculator, CalculatorState, Display, Event, Phase};
pub use domain::{CalcError, Result};

use domain::number::MAX_UNARY_PRECISION;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Engine configuration.
///
/// # Example
///
/// ```toml
/// unary_precision = 12
/// trace_level = "keypad=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Decimal places unary results (`√`, `sin`, `cos`) are rounded to.
    ///
    /// At most 25, which leaves three guard digits below the decimal
    /// type's 28-place scale. Default: 25
    pub unary_precision: u32,

    /// Tracing filter directives for [`observability::init_tracing`].
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive such as `keypad=debug`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unary_precision: MAX_UNARY_PRECISION,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a host-supplied key/value map.
    ///
    /// # Parsing Rules
    ///
    /// - `unary_precision`: String → `u32`, clamped to 25 (falls back to 25 on parse error)
    /// - `trace_level`: String → `Option<String>` (blank values ignored)
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use keypad::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("unary_precision".to_string(), "10".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.unary_precision, 10);
    /// assert_eq!(config.trace_level, None);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let unary_precision = config
            .get("unary_precision")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .map_or(MAX_UNARY_PRECISION, |p| p.min(MAX_UNARY_PRECISION));

        let trace_level = config
            .get("trace_level")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(String::from);

        Self {
            unary_precision,
            trace_level,
        }
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content cannot be parsed or has unknown keys
    /// - A value fails [`Config::validate`]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::Config`] if `unary_precision` exceeds 25.
    pub fn validate(&self) -> Result<()> {
        if self.unary_precision > MAX_UNARY_PRECISION {
            return Err(CalcError::Config(format!(
                "unary_precision must be at most {MAX_UNARY_PRECISION}, got {}",
                self.unary_precision
            )));
        }
        Ok(())
    }
}

/// Creates the engine a host keeps for its lifetime.
///
/// Does not install a tracing subscriber; call
/// [`observability::init_tracing`] first if the host wants output.
///
/// # Example
///
/// ```rust
/// use keypad::{initialize, Config, Phase};
///
/// let calc = initialize(&Config::default());
/// assert_eq!(calc.phase(), Phase::Idle);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> Calculator {
    tracing::debug!(
        unary_precision = config.unary_precision,
        "initializing calculator engine"
    );

    Calculator::new(config.unary_precision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_map_defaults() {
        let config = Config::from_map(&BTreeMap::new());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_from_map_clamps_and_ignores_garbage() {
        let mut map = BTreeMap::new();
        map.insert("unary_precision".to_string(), "64".to_string());
        map.insert("trace_level".to_string(), "  ".to_string());
        let config = Config::from_map(&map);
        assert_eq!(config.unary_precision, 25);
        assert_eq!(config.trace_level, None);

        map.insert("unary_precision".to_string(), "many".to_string());
        map.insert("trace_level".to_string(), "debug".to_string());
        let config = Config::from_map(&map);
        assert_eq!(config.unary_precision, 25);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "unary_precision = 6").unwrap();
        writeln!(file, "trace_level = \"keypad=trace\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.unary_precision, 6);
        assert_eq!(config.trace_level.as_deref(), Some("keypad=trace"));
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "trace_level = \"warn\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.unary_precision, 25);
    }

    #[test]
    fn test_from_file_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "unary_precision = 28").unwrap();
        assert!(matches!(
            Config::from_file(file.path()),
            Err(CalcError::Config(_))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "precision = 4").unwrap();
        assert!(matches!(
            Config::from_file(file.path()),
            Err(CalcError::Toml(_))
        ));

        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::from_file(dir.path().join("missing.toml")),
            Err(CalcError::Io(_))
        ));
    }

    #[test]
    fn test_initialize_uses_precision() {
        let config = Config {
            unary_precision: 3,
            ..Config::default()
        };
        let mut calc = initialize(&config);
        calc.append_digit_or_point("2");
        calc.compute_unary("√");
        assert_eq!(calc.current_display(), "1.414");
    }
}
