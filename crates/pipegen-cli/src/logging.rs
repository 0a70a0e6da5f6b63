//! Tracing setup for the binary.
//!
//! The library crates only emit events; this is the one place a subscriber
//! is installed. `-q` gives `error`, no flag `warn`, then `-v` `info`,
//! `-vv` `debug`, `-vvv` and beyond `trace`. A set `RUST_LOG` replaces the
//! derived filter entirely.

use std::io::{self, IsTerminal as _};

use anyhow::Context as _;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Targets that follow the `-v` / `-q` level. Everything else stays off.
const TARGETS: [&str; 3] = ["pipegen", "pipegen_core", "pipegen_adapters"];

/// Install the global subscriber, writing to stderr.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::new(filter_directives(level_for(args))),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!args.no_color && io::stderr().is_terminal())
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .context("a tracing subscriber is already installed")
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    match (args.quiet, args.verbose) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::INFO,
        (false, 2) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    }
}

fn filter_directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    TARGETS
        .map(|target| format!("{target}={level}"))
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn args(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn warn_without_flags() {
        assert_eq!(level_for(&args(0, false)), LevelFilter::WARN);
    }

    #[test]
    fn each_v_raises_the_level() {
        assert_eq!(level_for(&args(1, false)), LevelFilter::INFO);
        assert_eq!(level_for(&args(2, false)), LevelFilter::DEBUG);
        assert_eq!(level_for(&args(3, false)), LevelFilter::TRACE);
        assert_eq!(level_for(&args(9, false)), LevelFilter::TRACE);
    }

    #[test]
    fn quiet_beats_verbose() {
        assert_eq!(level_for(&args(0, true)), LevelFilter::ERROR);
        assert_eq!(level_for(&args(2, true)), LevelFilter::ERROR);
    }

    #[test]
    fn directives_name_all_three_crates() {
        assert_eq!(
            filter_directives(LevelFilter::DEBUG),
            "pipegen=debug,pipegen_core=debug,pipegen_adapters=debug"
        );
    }
}
