//! Logging setup for binaries embedding unalias
//!
//! This module is only available with the `logging` feature. Library users
//! who already install a subscriber can ignore it: unalias only emits
//! `tracing` events.
//!
//! The chosen [`LogLevel`] applies to the unalias targets alone. Everything
//! else stays at `warn`, so per-specifier `trace!` output from the resolver
//! can be turned on without drowning in the host's own events.

use std::sync::Once;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Targets the level applies to.
pub const LOG_TARGETS: &[&str] = &["unalias", "unalias_config"];

/// Verbosity of unalias's own events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Silent,
    Error,
    Warn,
    #[default]
    Info,
    /// Resolver construction, config loading and per-file rewrite counts
    Debug,
    /// Every resolved specifier
    Trace,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            LogLevel::Silent => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Level for targets outside [`LOG_TARGETS`]. Never chattier than `warn`.
    fn host_level(self) -> &'static str {
        match self {
            LogLevel::Silent => "off",
            LogLevel::Error => "error",
            _ => "warn",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "off" => Ok(LogLevel::Silent),
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!("Invalid log level: {}", other)),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter directives for `level`, e.g. `warn,unalias=trace,unalias_config=trace`
pub fn filter_directives(level: LogLevel) -> String {
    std::iter::once(level.host_level().to_string())
        .chain(
            LOG_TARGETS
                .iter()
                .map(|target| format!("{target}={}", level.as_str())),
        )
        .collect::<Vec<_>>()
        .join(",")
}

/// An [`EnvFilter`] scoped to the unalias targets
pub fn alias_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::builder().parse_lossy(filter_directives(level))
}

/// Install a global subscriber logging unalias events at `level`.
///
/// Directives in `RUST_LOG` are added on top. Only the first call in a
/// process takes effect.
///
/// # Example
///
/// ```rust,no_run
/// use unalias::logging::{init_logging, LogLevel};
///
/// init_logging(LogLevel::Trace);
/// ```
pub fn init_logging(level: LogLevel) {
    INIT.call_once(|| {
        let mut filter = alias_filter(level);
        if let Ok(env) = std::env::var(EnvFilter::DEFAULT_ENV) {
            for directive in env
                .split(',')
                .filter_map(|d| d.trim().parse::<Directive>().ok())
            {
                filter = filter.add_directive(directive);
            }
        }
        install(filter);
    });
}

/// Install a global subscriber configured from `RUST_LOG`.
///
/// Falls back to [`alias_filter`] at info when `RUST_LOG` is unset or invalid.
pub fn init_logging_from_env() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| alias_filter(LogLevel::Info));
        install(filter);
    });
}

fn install(filter: EnvFilter) {
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().without_time())
        .init();
}
