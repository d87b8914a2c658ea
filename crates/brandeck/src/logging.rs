//! Logging setup on top of `tracing` and `tracing-subscriber`.
//!
//! # Log Levels
//!
//! - `error`: failures surfaced to the user
//! - `warn`: AI request failures, ignored config (default)
//! - `info`: AI request progress, viewer startup
//! - `debug`: slide changes and overlay transitions
//! - `trace`: suppressed input events

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub with_ansi: bool,
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            with_ansi: true,
            with_target: false,
        }
    }
}

impl LogConfig {
    /// Map the CLI flags onto a level. `quiet` wins over any `-v`.
    ///
    /// - 0 (no `-v`): warn
    /// - 1 (`-v`): info
    /// - 2 (`-vv`): debug
    /// - 3+ (`-vvv`): trace
    #[must_use]
    pub fn from_flags(verbosity: u8, quiet: bool) -> Self {
        let level = if quiet {
            Level::ERROR
        } else {
            match verbosity {
                0 => Level::WARN,
                1 => Level::INFO,
                2 => Level::DEBUG,
                _ => Level::TRACE,
            }
        };
        Self {
            level,
            with_target: verbosity >= 2,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }
}

/// Install the global subscriber. Logs go to stderr so command output on
/// stdout stays pipeable.
pub fn init_logging(config: &LogConfig) {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(config.with_target)
        .without_time();

    // try_init: a second call (tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(build_env_filter(config.level))
        .with(layer)
        .try_init();
}

/// `RUST_LOG` overrides the flag-derived level when set.
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directive(level)))
}

fn filter_directive(level: Level) -> String {
    // Dependencies (winit, wgpu, ureq) stay at warn unless we are quieter
    let ours = level.as_str().to_lowercase();
    let deps = if level < Level::WARN { ours.as_str() } else { "warn" };
    format!("{deps},brandeck={ours}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(LogConfig::from_flags(0, false).level, Level::WARN);
        assert_eq!(LogConfig::from_flags(1, false).level, Level::INFO);
        assert_eq!(LogConfig::from_flags(2, false).level, Level::DEBUG);
        assert_eq!(LogConfig::from_flags(7, false).level, Level::TRACE);
    }

    #[test]
    fn test_quiet_wins() {
        assert_eq!(LogConfig::from_flags(3, true).level, Level::ERROR);
    }

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(Level::DEBUG), "warn,brandeck=debug");
        assert_eq!(filter_directive(Level::ERROR), "error,brandeck=error");
    }
}
