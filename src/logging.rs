//! Logging initialization for `preflight`.
//!
//! Structured logging via `tracing` with human-readable and JSON output
//! formats. Verbosity is gated by the runtime mode, decided once at
//! startup: production keeps only errors so internals never leak into
//! operator consoles, development shows everything. `PREFLIGHT_LOG_LEVEL`
//! overrides the mode-derived default.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::config::schema::Mode;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable format with optional ANSI colors.
    #[default]
    Human,
    /// Newline-delimited JSON for machine consumption.
    Json,
}

/// Maps a runtime mode to a tracing directive string.
///
/// - production → `"error"` (info/warn/debug suppressed entirely)
/// - development → `"debug"`
/// - anything else → `"info"`
#[must_use]
pub const fn mode_to_directive(mode: Mode) -> &'static str {
    match mode {
        Mode::Production => "error",
        Mode::Development => "debug",
        Mode::Other => "info",
    }
}

/// Initializes the global tracing subscriber.
///
/// The default filter comes from [`mode_to_directive`]; if
/// `PREFLIGHT_LOG_LEVEL` is set it takes precedence.
///
/// Uses `try_init()` so calling this more than once (e.g. in tests) is safe.
pub fn init_logging(format: LogFormat, mode: Mode) {
    let default_directive = mode_to_directive(mode);

    let filter = EnvFilter::try_from_env("PREFLIGHT_LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let use_ansi = std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();

    match format {
        LogFormat::Human => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(use_ansi)
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogFormat::Json => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_default_is_human() {
        assert_eq!(LogFormat::default(), LogFormat::Human);
    }

    #[test]
    fn production_keeps_errors_only() {
        assert_eq!(mode_to_directive(Mode::Production), "error");
    }

    #[test]
    fn development_is_verbose() {
        assert_eq!(mode_to_directive(Mode::Development), "debug");
    }

    #[test]
    fn other_modes_keep_info() {
        assert_eq!(mode_to_directive(Mode::Other), "info");
    }

    #[test]
    fn init_logging_does_not_panic() {
        // try_init is idempotent, repeated calls simply return Err and are ignored
        init_logging(LogFormat::Human, Mode::Development);
        init_logging(LogFormat::Json, Mode::Production);
    }
}
