//! # Pipegen CLI
//!
//! Task scaffolding for data-pipeline projects.
//!
//! `main` parses arguments, installs the tracing subscriber, loads
//! [`AppConfig`], runs one command, and turns a [`CliError`] into a stderr
//! report plus exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  3   | Resource not found      |
//! |  4   | Configuration error     |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // A missing .env file is not an error.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also land here and print to stdout.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("pipegen: could not set up logging: {e:#}");
        return ExitCode::from(1);
    }
    debug!(?cli.global, "arguments parsed");

    let mut reporter = Reporter {
        verbose: cli.global.verbose > 0,
        no_color: cli.global.no_color,
    };

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => return reporter.fail(err),
    };
    reporter.no_color |= config.output.no_color;

    let output = OutputManager::new(&cli.global, &config);
    match run(cli, &config, &output) {
        Ok(()) => {
            info!("done");
            ExitCode::SUCCESS
        }
        Err(err) => reporter.fail(err),
    }
}

/// `init` writes the config file, so it never reads one.
fn load_config(cli: &Cli) -> CliResult<AppConfig> {
    if matches!(cli.command, Commands::Init(_)) {
        return Ok(AppConfig::default());
    }
    AppConfig::load(cli.global.config.as_deref()).map_err(|e| CliError::ConfigError {
        message: e.to_string(),
        source: Some(e.into()),
    })
}

#[instrument(skip_all)]
fn run(cli: Cli, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let config_file = cli.global.config.as_deref();
    match cli.command {
        Commands::Task(args) => commands::task::execute(args, config, output),
        Commands::Models(args) => commands::models::execute(args, config, output),
        Commands::Templates(args) => commands::templates::execute(args, config, output),
        Commands::Init(args) => commands::init::execute(args, config_file, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, config, config_file, output),
    }
}

/// How errors are written to stderr.
struct Reporter {
    verbose: bool,
    no_color: bool,
}

impl Reporter {
    fn fail(&self, err: CliError) -> ExitCode {
        err.log();
        let colored = !self.no_color && std::io::stderr().is_terminal();
        eprint!("{}", err.report(self.verbose, colored));
        ExitCode::from(err.exit_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn cli_has_author() {
        let cmd = Cli::command();
        assert!(cmd.get_author().is_some());
    }
}
