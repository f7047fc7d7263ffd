//! Ad-hoc single-value type checking.
//!
//! Standalone helper, independent of the startup validation flow: callers
//! hand it a raw value (usually fresh from the environment) and a declared
//! kind, and get a yes/no answer. Pure, non-logging, never panics.

use url::Url;

/// Primitive kinds a value can be checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueKind {
    /// Integer, with leading-digit parse semantics.
    Number,
    /// Exactly `"true"` or `"false"`.
    Boolean,
    /// Absolute URL with an authority component.
    Url,
    /// Structural email check (`local@domain.tld`), not full RFC validation.
    Email,
    /// Any non-empty text value.
    #[default]
    String,
}

/// Returns `true` when `value` conforms to `kind`.
///
/// An absent or empty value is `false` for every kind.
#[must_use]
pub fn check_type(value: Option<&str>, kind: ValueKind) -> bool {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return false;
    };

    match kind {
        ValueKind::Number => has_leading_integer(value),
        ValueKind::Boolean => value == "true" || value == "false",
        ValueKind::Url => Url::parse(value).is_ok_and(|url| url.has_authority()),
        ValueKind::Email => is_structural_email(value),
        ValueKind::String => true,
    }
}

/// Leading-integer parse semantics: optional sign followed by at least one
/// digit, ignoring leading whitespace. Trailing garbage is accepted, the
/// way `parseInt`-style parsers behave.
fn has_leading_integer(value: &str) -> bool {
    let trimmed = value.trim_start();
    let digits = trimmed
        .strip_prefix(['-', '+'])
        .unwrap_or(trimmed);
    digits.bytes().next().is_some_and(|b| b.is_ascii_digit())
}

/// Whole-string match for `[^\s@]+@[^\s@]+\.[^\s@]+`.
///
/// Exactly one `@`, no whitespace, and a dot in the domain with at least
/// one character on each side.
fn is_structural_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = value.splitn(3, '@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

// ============================================================================
// Tests
// ============================================================================
