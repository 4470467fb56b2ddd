//! Tracing initialization and subscriber setup.

use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when the configuration sets none.
const DEFAULT_LEVEL: &str = "info";

/// Installs a stderr subscriber filtered by the configured trace level.
///
/// Idempotent: only the first call in a process takes effect, later calls (or
/// a subscriber installed by the host) are left alone. An unparsable
/// `trace_level` falls back to `"info"`.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_target(true).with_writer(std::io::stderr));

    let _ = subscriber.try_init();
}
