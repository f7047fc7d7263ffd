//! `preflight` — validate startup configuration before the server boots.

use clap::Parser;

use preflight::cli::{Cli, OutputFormat};
use preflight::config::report;
use preflight::config::schema::EnvSnapshot;
use preflight::config::validation::{Outcome, Validator};
use preflight::error::ExitCode;
use preflight::logging::{LogFormat, init_logging};

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        let format = match cli.output {
            OutputFormat::Human => LogFormat::Human,
            OutputFormat::Json => LogFormat::Json,
        };
        init_logging(format, cli.mode);
    }

    let env = EnvSnapshot::from_env();
    let validation = Validator::new().validate(&env, cli.mode);

    let outcome = match cli.output {
        OutputFormat::Human => report::emit_and_conclude(&validation),
        OutputFormat::Json => match report::emit_json(&validation) {
            Ok(()) => validation.outcome(),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(e.exit_code());
            }
        },
    };

    // The one place a Halt outcome becomes a process exit.
    if outcome == Outcome::Halt {
        std::process::exit(ExitCode::CONFIG_ERROR);
    }
}
