//! Error types and validation finding types for `preflight`.
//!
//! Validation findings are plain data, not errors: a failed check never
//! propagates as a Rust error. The error enum here covers the crate's
//! infrastructure concerns (I/O, JSON) and maps to process exit codes.

use serde::Serialize;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for the `preflight` binary.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (missing required settings, fatal misconfiguration)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `preflight` operations.
#[derive(Debug, Error)]
pub enum PreflightError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PreflightError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => ExitCode::IO_ERROR,
            Self::Json(_) => ExitCode::CONFIG_ERROR,
        }
    }
}

// ============================================================================
// Validation Types
// ============================================================================

/// Severity of a single validation finding.
///
/// `Critical` and `Missing` can halt startup (see
/// [`crate::config::validation::ValidationReport::outcome`]); `Warning`
/// and `Info` never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Security-grade misconfiguration (weak or default secrets).
    Critical,
    /// Required setting absent from the environment. Always fatal.
    Missing,
    /// Suspicious but non-fatal value.
    Warning,
    /// Advisory, reported in development mode only.
    Info,
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Name of the setting that produced the finding.
    pub setting: String,
    /// Human-readable description of the issue.
    pub message: String,
    /// Severity level of the finding.
    pub severity: Severity,
}

impl Finding {
    /// Creates a finding for the given setting.
    #[must_use]
    pub fn new(severity: Severity, setting: &str, message: impl Into<String>) -> Self {
        Self {
            setting: setting.to_string(),
            message: message.into(),
            severity,
        }
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Critical => "critical",
            Severity::Missing => "missing",
            Severity::Warning => "warning",
            Severity::Info => "info",
        };
        write!(f, "{}: {} ({})", prefix, self.message, self.setting)
    }
}

/// Result type alias for `preflight` operations.
pub type Result<T> = std::result::Result<T, PreflightError>;

// ============================================================================
// Tests
// ============================================================================
