//! `pipegen config`: read configuration values.

use std::path::Path;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config: &AppConfig,
    config_file: Option<&Path>,
    output: &OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = config.get(&key).ok_or_else(|| CliError::InvalidInput {
                message: format!(
                    "unknown config key '{key}' (known keys: {})",
                    AppConfig::KEYS.join(", ")
                ),
            })?;
            output.raw(&value)?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(config)?;
            } else {
                output.header("Current Configuration:")?;
                let serialised =
                    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
                        message: format!("Failed to serialise config: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                output.raw(&serialised)?;
            }
        }

        ConfigCommands::Path => {
            output.raw(&AppConfig::active_path(config_file).display().to_string())?;
        }
    }

    Ok(())
}
