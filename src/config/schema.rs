//! Setting tables, sentinels, and the environment snapshot type.
//!
//! The validator works against a fixed, known set of named settings rather
//! than an arbitrary schema. The tables here are the single source of truth
//! for which settings exist and how they are classified.

use std::collections::HashMap;

// ============================================================================
// Setting Tables
// ============================================================================

/// Settings that must be present for the process to run, in report order.
pub const REQUIRED_SETTINGS: &[&str] =
    &["PORT", "JWT_SECRET", "TELEGRAM_BOT_TOKEN", "TELEGRAM_CHAT_ID"];

/// Settings reported as informational when absent, in report order.
/// Only surfaced in development mode.
pub const OPTIONAL_SETTINGS: &[&str] = &[
    "NODE_ENV",
    "MONGODB_URI",
    "SMTP_HOST",
    "SMTP_PORT",
    "SMTP_USER",
    "SMTP_PASS",
    "RATE_LIMIT_WINDOW_MS",
    "RATE_LIMIT_MAX_REQUESTS",
    "ALLOWED_ORIGINS",
    "ENCRYPTION_KEY",
];

/// Minimum acceptable `JWT_SECRET` length.
pub const MIN_JWT_SECRET_LEN: usize = 32;

/// The placeholder secret shipped in the default configuration. Deployments
/// that never rotated it are flagged as critical.
pub const DEFAULT_JWT_SECRET: &str = "change-this-default-secret-before-deploying";

/// Fragment that betrays a copy-pasted example secret.
pub const EXAMPLE_SECRET_FRAGMENT: &str = "your_super_secret";

/// Fragment that betrays a copy-pasted example bot token.
pub const PLACEHOLDER_BOT_TOKEN_FRAGMENT: &str = "your_bot_token";

// ============================================================================
// Runtime Mode
// ============================================================================

/// Runtime mode the process was started in.
///
/// Parsed from the mode string (typically `NODE_ENV`); unrecognized values
/// map to [`Mode::Other`] rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Development mode: verbose reporting, optional-setting advisories.
    #[default]
    Development,
    /// Production mode: critical findings are fatal, logging is terse.
    Production,
    /// Any other mode string (e.g. "test", "staging").
    Other,
}

impl Mode {
    /// Returns `true` for production mode.
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Returns `true` for development mode.
    #[must_use]
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

impl std::str::FromStr for Mode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "development" => Self::Development,
            "production" => Self::Production,
            _ => Self::Other,
        })
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Other => "other",
        };
        f.write_str(s)
    }
}

// ============================================================================
// Environment Snapshot
// ============================================================================

/// Immutable snapshot of the environment variables under validation.
///
/// Captured once before validation so the checks see a consistent view and
/// repeated runs over the same snapshot are idempotent. An empty-string
/// value is treated the same as an absent variable.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Captures the current process environment.
    #[must_use]
    pub fn from_env() -> Self {
        std::env::vars().collect()
    }

    /// Returns the value of `name`, or `None` when absent or empty.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Returns `true` when `name` has a non-empty value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parses_known_strings() {
        assert_eq!("development".parse::<Mode>().unwrap(), Mode::Development);
        assert_eq!("production".parse::<Mode>().unwrap(), Mode::Production);
        assert_eq!("staging".parse::<Mode>().unwrap(), Mode::Other);
        assert_eq!("PRODUCTION".parse::<Mode>().unwrap(), Mode::Other);
    }

    #[test]
    fn test_mode_default_is_development() {
        assert_eq!(Mode::default(), Mode::Development);
    }

    #[test]
    fn test_snapshot_treats_empty_as_absent() {
        let env: EnvSnapshot = [("PORT", "3000"), ("JWT_SECRET", "")].into_iter().collect();
        assert_eq!(env.get("PORT"), Some("3000"));
        assert_eq!(env.get("JWT_SECRET"), None);
        assert!(!env.contains("JWT_SECRET"));
        assert!(!env.contains("TELEGRAM_BOT_TOKEN"));
    }

    #[test]
    fn test_default_secret_is_not_the_example_fragment() {
        // The equality and substring checks must stay independent.
        assert!(!DEFAULT_JWT_SECRET.contains(EXAMPLE_SECRET_FRAGMENT));
        assert!(DEFAULT_JWT_SECRET.len() >= MIN_JWT_SECRET_LEN);
    }

    #[test]
    fn test_required_settings_order() {
        assert_eq!(
            REQUIRED_SETTINGS,
            &["PORT", "JWT_SECRET", "TELEGRAM_BOT_TOKEN", "TELEGRAM_CHAT_ID"]
        );
    }
}
