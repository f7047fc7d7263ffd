//! `preflight` - startup configuration validation and bootstrap helpers
//!
//! Validates environment-sourced process configuration before a server
//! starts, with JSON-file persistence and mode-gated leveled logging as
//! supporting services.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod store;
pub mod typecheck;
