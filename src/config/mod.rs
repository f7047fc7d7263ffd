//! Startup configuration validation.
//!
//! Split into the fixed setting tables ([`schema`]), the check battery
//! ([`validation`]), and finding emission ([`report`]).

pub mod report;
pub mod schema;
pub mod validation;

pub use schema::{EnvSnapshot, Mode, OPTIONAL_SETTINGS, REQUIRED_SETTINGS};
pub use validation::{Outcome, ValidationReport, Validator};
