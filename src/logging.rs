//! Structured logging setup.
//!
//! Library code only emits `tracing` events; a subscriber is installed by the
//! binary through [`init_logging`]. Without one, events are dropped.
//!
//! `RUST_LOG` takes precedence over the configured level when set.

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable consulted when neither the CLI nor the config file sets a level
pub const LOG_LEVEL_ENV: &str = "CONSTITUTION_LOG_LEVEL";

static INIT: Once = Once::new();

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to display
    pub level: Level,
    /// Include the module target in each line
    pub include_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            include_target: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }
}

/// Installs the global subscriber, writing to stderr. Later calls are no-ops.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(config.level).into())
            .from_env_lossy();

        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(config.include_target)
                    .with_writer(std::io::stderr),
            )
            .init();
    });
}

/// Parses a level name case-insensitively
pub fn parse_level(level_str: &str) -> Option<Level> {
    match level_str.trim().to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// Picks the effective level.
///
/// Order: explicit level, `verbose`, `quiet`, config file level,
/// [`LOG_LEVEL_ENV`], then `INFO`.
pub fn resolve_level(
    explicit: Option<&str>,
    verbose: bool,
    quiet: bool,
    config_level: Option<&str>,
) -> Level {
    let env_level = env::var(LOG_LEVEL_ENV).ok();
    resolve_level_with_env(explicit, verbose, quiet, config_level, env_level.as_deref())
}

fn resolve_level_with_env(
    explicit: Option<&str>,
    verbose: bool,
    quiet: bool,
    config_level: Option<&str>,
    env_level: Option<&str>,
) -> Level {
    if let Some(level) = explicit.and_then(parse_level) {
        return level;
    }
    if verbose {
        return Level::DEBUG;
    }
    if quiet {
        return Level::ERROR;
    }
    config_level
        .and_then(parse_level)
        .or_else(|| env_level.and_then(parse_level))
        .unwrap_or(Level::INFO)
}
