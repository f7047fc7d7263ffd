//! Startup configuration validation.
//!
//! This module implements the per-setting checks run before the server is
//! allowed to start. Validation collects ALL findings (doesn't stop at the
//! first) so an operator can fix the whole environment in one pass.
//!
//! The validator is pure: it reads the snapshot, accumulates findings, and
//! returns a report. Emission and process termination live elsewhere
//! ([`crate::config::report`] and the binary entry point).

use serde::Serialize;

use crate::config::schema::{
    DEFAULT_JWT_SECRET, EXAMPLE_SECRET_FRAGMENT, EnvSnapshot, MIN_JWT_SECRET_LEN, Mode,
    OPTIONAL_SETTINGS, PLACEHOLDER_BOT_TOKEN_FRAGMENT, REQUIRED_SETTINGS,
};
use crate::error::{Finding, Severity};

// ============================================================================
// Public API
// ============================================================================

/// Terminal result of a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The process must not start. The caller owns the actual exit.
    Halt,
    /// Startup may continue, possibly with warnings already reported.
    Proceed,
}

/// Result of one validation run over an environment snapshot.
///
/// Findings are kept in four ordered lists, one per severity, matching the
/// order the checks ran in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Mode the run was evaluated under.
    #[serde(with = "mode_as_str")]
    pub mode: Mode,

    /// Security-grade misconfiguration (fatal in production).
    pub criticals: Vec<Finding>,

    /// Required settings absent from the environment (fatal in any mode).
    pub missing: Vec<Finding>,

    /// Suspicious but non-fatal values.
    pub warnings: Vec<Finding>,

    /// Development-mode advisories about absent optional settings.
    pub infos: Vec<Finding>,
}

impl ValidationReport {
    /// Computes the terminal outcome of this run.
    ///
    /// Missing findings halt in any mode; critical findings halt only in
    /// production. Warnings and infos never halt.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if !self.missing.is_empty() {
            return Outcome::Halt;
        }
        if !self.criticals.is_empty() && self.mode.is_production() {
            return Outcome::Halt;
        }
        Outcome::Proceed
    }

    /// Returns `true` when the run produced no finding of any severity.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.criticals.is_empty()
            && self.missing.is_empty()
            && self.warnings.is_empty()
            && self.infos.is_empty()
    }
}

mod mode_as_str {
    use serde::Serializer;

    use crate::config::schema::Mode;

    pub fn serialize<S: Serializer>(mode: &Mode, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(mode)
    }
}

/// Startup configuration validator.
///
/// Runs the fixed battery of per-setting checks against an environment
/// snapshot. Each call is independent and idempotent: the same snapshot
/// always yields the same report.
#[derive(Debug, Default)]
pub struct Validator {
    criticals: Vec<Finding>,
    missing: Vec<Finding>,
    warnings: Vec<Finding>,
    infos: Vec<Finding>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the environment snapshot and returns the report.
    ///
    /// Checks run in a fixed order so findings group predictably in the
    /// report; ordering does not affect the outcome.
    pub fn validate(&mut self, env: &EnvSnapshot, mode: Mode) -> ValidationReport {
        self.criticals.clear();
        self.missing.clear();
        self.warnings.clear();
        self.infos.clear();

        self.check_required(env);
        self.check_jwt_secret(env);
        self.check_bot_token(env);
        self.check_port(env);
        self.check_rate_limits(env);
        self.check_chat_id(env);
        self.check_origins(env);

        if mode.is_development() {
            self.check_optional(env);
        }

        ValidationReport {
            mode,
            criticals: std::mem::take(&mut self.criticals),
            missing: std::mem::take(&mut self.missing),
            warnings: std::mem::take(&mut self.warnings),
            infos: std::mem::take(&mut self.infos),
        }
    }

    // ========================================================================
    // Presence
    // ========================================================================

    /// Records a missing finding for each absent required setting, in
    /// table order.
    fn check_required(&mut self, env: &EnvSnapshot) {
        for &name in REQUIRED_SETTINGS {
            if !env.contains(name) {
                self.missing.push(Finding::new(Severity::Missing, name, name));
            }
        }
    }

    // ========================================================================
    // Secret Strength
    // ========================================================================

    /// Flags weak, default, or example `JWT_SECRET` values as critical.
    fn check_jwt_secret(&mut self, env: &EnvSnapshot) {
        let Some(secret) = env.get("JWT_SECRET") else {
            return;
        };

        if secret.len() < MIN_JWT_SECRET_LEN {
            self.critical(
                "JWT_SECRET",
                "JWT_SECRET must be at least 32 characters long for security",
            );
        }

        if secret == DEFAULT_JWT_SECRET {
            self.critical(
                "JWT_SECRET",
                "JWT_SECRET is using default value - CHANGE IT IMMEDIATELY!",
            );
        }

        if secret.contains(EXAMPLE_SECRET_FRAGMENT) {
            self.critical("JWT_SECRET", "JWT_SECRET appears to be using example value");
        }
    }

    // ========================================================================
    // Placeholder Detection
    // ========================================================================

    /// Warns when the Telegram bot token still carries the example fragment.
    fn check_bot_token(&mut self, env: &EnvSnapshot) {
        if let Some(token) = env.get("TELEGRAM_BOT_TOKEN")
            && token.contains(PLACEHOLDER_BOT_TOKEN_FRAGMENT)
        {
            self.warn(
                "TELEGRAM_BOT_TOKEN",
                "TELEGRAM_BOT_TOKEN appears to be using a placeholder value",
            );
        }
    }

    // ========================================================================
    // Numeric Ranges
    // ========================================================================

    /// Warns on an unparseable or out-of-range port. Advisory only: the
    /// value is handed to a separate binder, which does its own checking.
    fn check_port(&mut self, env: &EnvSnapshot) {
        let Some(port) = env.get("PORT") else {
            return;
        };

        match port.parse::<u32>() {
            Ok(n) if (1..=65535).contains(&n) => {}
            _ => self.warn(
                "PORT",
                format!("PORT '{port}' is not a valid port number (expected 1-65535)"),
            ),
        }
    }

    /// Warns on implausible rate-limit settings.
    fn check_rate_limits(&mut self, env: &EnvSnapshot) {
        if let Some(window) = env.get("RATE_LIMIT_WINDOW_MS")
            && !window.parse::<u64>().is_ok_and(|ms| ms >= 1000)
        {
            self.warn(
                "RATE_LIMIT_WINDOW_MS",
                format!("RATE_LIMIT_WINDOW_MS '{window}' should be an integer of at least 1000"),
            );
        }

        if let Some(max) = env.get("RATE_LIMIT_MAX_REQUESTS")
            && !max.parse::<u64>().is_ok_and(|n| n >= 1)
        {
            self.warn(
                "RATE_LIMIT_MAX_REQUESTS",
                format!("RATE_LIMIT_MAX_REQUESTS '{max}' should be a positive integer"),
            );
        }
    }

    // ========================================================================
    // Formats
    // ========================================================================

    /// Warns when the Telegram chat id is not a decimal integer
    /// (optionally negative, as group chat ids are).
    fn check_chat_id(&mut self, env: &EnvSnapshot) {
        if let Some(chat_id) = env.get("TELEGRAM_CHAT_ID")
            && !is_decimal_id(chat_id)
        {
            self.warn(
                "TELEGRAM_CHAT_ID",
                format!("TELEGRAM_CHAT_ID '{chat_id}' does not look like a numeric chat id"),
            );
        }
    }

    /// Warns on each comma-separated origin that is not an http(s) URL.
    fn check_origins(&mut self, env: &EnvSnapshot) {
        let Some(origins) = env.get("ALLOWED_ORIGINS") else {
            return;
        };

        for origin in origins.split(',') {
            let origin = origin.trim();
            if origin.is_empty() {
                continue;
            }
            if !origin.starts_with("http://") && !origin.starts_with("https://") {
                self.warn(
                    "ALLOWED_ORIGINS",
                    format!("ALLOWED_ORIGINS entry '{origin}' should start with http:// or https://"),
                );
            }
        }
    }

    // ========================================================================
    // Optional Settings (development only)
    // ========================================================================

    /// Records an advisory for each optional setting absent from the
    /// snapshot, in table order.
    fn check_optional(&mut self, env: &EnvSnapshot) {
        for &name in OPTIONAL_SETTINGS {
            if !env.contains(name) {
                self.infos.push(Finding::new(Severity::Info, name, name));
            }
        }
    }

    // ========================================================================
    // Helper Methods
    // ========================================================================

    fn critical(&mut self, setting: &str, message: impl Into<String>) {
        self.criticals
            .push(Finding::new(Severity::Critical, setting, message));
    }

    fn warn(&mut self, setting: &str, message: impl Into<String>) {
        self.warnings
            .push(Finding::new(Severity::Warning, setting, message));
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Whole-string match for `-?[0-9]+`.
fn is_decimal_id(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

// ============================================================================
// Tests
// ============================================================================
