//! CLI argument definitions.
//!
//! All Clap derive structs for `preflight` command-line parsing.

use clap::{Parser, ValueEnum};

use crate::config::schema::Mode;

/// Validate startup configuration before the server boots.
#[derive(Parser, Debug)]
#[command(name = "preflight", author, version, about)]
pub struct Cli {
    /// Runtime mode the server will start in.
    #[arg(long, env = "NODE_ENV", default_value = "development")]
    pub mode: Mode,

    /// Report output format.
    #[arg(long, value_enum, default_value = "human")]
    pub output: OutputFormat,

    /// Suppress all non-error output.
    #[arg(short, long)]
    pub quiet: bool,
}

/// How the validation report is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Grouped human-readable lines on stderr.
    #[default]
    Human,
    /// Machine-readable JSON report on stdout.
    Json,
}
