//! Emission of validation findings through the reporting sink.
//!
//! Findings are written grouped by severity, each group with its own
//! marker, so an operator can fix the environment without reading source.
//! Nothing here touches the process lifecycle: converting a
//! [`Outcome::Halt`] into an exit is the binary's job, and it must happen
//! exactly once.

use crate::config::validation::{Outcome, ValidationReport};
use crate::error::Result;

/// Emits the report as grouped human-readable lines via `tracing`.
///
/// Ordering: criticals (with a fatal notice in production), missing
/// settings with remediation guidance, warnings, the success
/// acknowledgment, then development-mode advisories.
pub fn emit(report: &ValidationReport) {
    if !report.criticals.is_empty() {
        for finding in &report.criticals {
            tracing::error!(setting = %finding.setting, "SECURITY ALERT: {}", finding.message);
        }
        if report.mode.is_production() {
            tracing::error!("critical security misconfiguration in production, refusing to start");
            return;
        }
    }

    if !report.missing.is_empty() {
        for finding in &report.missing {
            tracing::error!(setting = %finding.setting, "required setting is not set");
        }
        tracing::error!(
            count = report.missing.len(),
            "missing required settings, check your environment or .env file"
        );
        return;
    }

    for finding in &report.warnings {
        tracing::warn!(setting = %finding.setting, "{}", finding.message);
    }

    tracing::info!(mode = %report.mode, "configuration check passed");

    for finding in &report.infos {
        tracing::info!(setting = %finding.setting, "optional setting is not set");
    }
}

/// Writes the report to stdout as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization or the stdout write fails.
pub fn emit_json(report: &ValidationReport) -> Result<()> {
    use std::io::Write;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, report)?;
    writeln!(stdout)?;
    Ok(())
}

/// Convenience wrapper: emits the report and returns its outcome.
#[must_use]
pub fn emit_and_conclude(report: &ValidationReport) -> Outcome {
    emit(report);
    report.outcome()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{EnvSnapshot, Mode};
    use crate::config::validation::Validator;

    #[test]
    fn test_emit_does_not_panic_without_subscriber() {
        let env: EnvSnapshot = [("JWT_SECRET", "short")].into_iter().collect();
        let report = Validator::new().validate(&env, Mode::Development);
        emit(&report);
    }

    #[test]
    fn test_emit_and_conclude_matches_outcome() {
        let report = Validator::new().validate(&EnvSnapshot::default(), Mode::Other);
        assert_eq!(emit_and_conclude(&report), Outcome::Halt);
        assert_eq!(report.outcome(), Outcome::Halt);
    }

    #[test]
    fn test_emit_json_round_trips() {
        let env: EnvSnapshot = [("PORT", "99999")].into_iter().collect();
        let report = Validator::new().validate(&env, Mode::Production);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["mode"], "production");
        assert!(json["missing"].as_array().is_some_and(|m| !m.is_empty()));
        assert!(
            json["warnings"]
                .as_array()
                .unwrap()
                .iter()
                .any(|w| w["setting"] == "PORT")
        );
    }
}
