//! CLI error type, exit codes, and the stderr report.

use std::error::Error as _;

use owo_colors::OwoColorize;
use thiserror::Error;

use pipegen_core::error::{ErrorCategory as CoreCategory, PipegenError};

use crate::config::ENV_PREFIX;

/// Appended to non-verbose reports.
const RERUN_HINT: &str = "Re-run with -v to see what caused this.";

#[derive(Clone, Copy)]
enum Style {
    Error,
    Heading,
    Muted,
}

pub type CliResult<T> = Result<T, CliError>;

/// Everything a command can fail with.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input clap accepted but the command rejected.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// The configuration could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Raised by the scaffold or template services.
    #[error(transparent)]
    Core(#[from] PipegenError),

    /// Writing CLI-owned files or the terminal failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<pipegen_core::domain::DomainError> for CliError {
    fn from(err: pipegen_core::domain::DomainError) -> Self {
        CliError::Core(err.into())
    }
}

impl CliError {
    /// Hints shown under the error message.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { .. } => vec!["Run the command with --help to see accepted values".into()],

            Self::ConfigError { .. } => vec![
                "`pipegen config path` shows which file is read".into(),
                "`pipegen init --force` rewrites it with defaults".into(),
                format!("Settings can also come from {ENV_PREFIX}__<SECTION>__<KEY> variables"),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { .. } => vec!["Check that the path is writable".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => core.category().into(),
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.category().exit_code()
    }

    /// Render the report printed on stderr.
    ///
    /// `colored == false` yields plain text with no ANSI escapes. Without
    /// `verbose` the cause chain is hidden and a hint to pass `-v` is added.
    pub fn report(&self, verbose: bool, colored: bool) -> String {
        let paint = |text: &str, style: Style| -> String {
            if !colored {
                return text.to_owned();
            }
            match style {
                Style::Error => text.red().bold().to_string(),
                Style::Heading => text.yellow().bold().to_string(),
                Style::Muted => text.dimmed().to_string(),
            }
        };

        let mut lines = vec![
            String::new(),
            format!("{} {self}", paint("error:", Style::Error)),
        ];

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                lines.push(paint(&format!("  caused by: {err}"), Style::Muted));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            lines.push(String::new());
            lines.push(paint("Suggestions:", Style::Heading));
            lines.extend(suggestions.iter().map(|s| format!("  - {s}")));
        }

        if !verbose {
            lines.push(String::new());
            lines.push(paint(RERUN_HINT, Style::Muted));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// Emit the error as a tracing event before it is reported.
    pub fn log(&self) {
        let category = self.category();
        match category {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(?category, "{self}")
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(?category, "{self}")
            }
        }

        if let Self::Core(core) = self {
            tracing::debug!(retryable = core.is_retryable(), "core error");
        }
        if let Some(source) = self.source() {
            tracing::debug!(%source, "caused by");
        }
    }
}

/// Coarse classification that decides the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Configuration,
    Internal,
}

impl ErrorCategory {
    /// 2 user, 3 not found, 4 configuration, 1 anything else.
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::UserError => 2,
            Self::NotFound => 3,
            Self::Configuration => 4,
            Self::Internal => 1,
        }
    }
}

impl From<CoreCategory> for ErrorCategory {
    fn from(category: CoreCategory) -> Self {
        match category {
            CoreCategory::Validation => Self::UserError,
            CoreCategory::NotFound => Self::NotFound,
            CoreCategory::Internal => Self::Internal,
        }
    }
}

/// Attach a message to an `io::Result` while turning it into a [`CliError`].
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipegen_core::application::ApplicationError;
    use pipegen_core::domain::DomainError;
    use std::io;
    use std::path::PathBuf;

    fn core(err: impl Into<PipegenError>) -> CliError {
        CliError::Core(err.into())
    }

    #[test]
    fn invalid_identifier_is_a_user_error() {
        let err = core(DomainError::InvalidIdentifier {
            value: "userEvents".into(),
            reason: "must start with an uppercase letter".into(),
        });
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn ambiguous_archetype_is_a_user_error() {
        assert_eq!(CliError::from(DomainError::AmbiguousArchetype).exit_code(), 2);
    }

    #[test]
    fn unknown_dependency_is_not_found() {
        let err = core(ApplicationError::UnknownDependency {
            name: "RawLogs".into(),
            expected: PathBuf::from("data_models/raw_logs.py"),
        });
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn target_exists_is_a_user_error() {
        let err = core(ApplicationError::TargetExists {
            path: PathBuf::from("tasks/user_events.py"),
        });
        assert_eq!(err.exit_code(), 2);
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    #[test]
    fn core_errors_display_without_prefix() {
        let err = core(DomainError::AmbiguousArchetype);
        assert_eq!(
            err.to_string(),
            "task type cannot be determined: --source and --simple used together"
        );
    }

    #[test]
    fn plain_report_lists_suggestions_and_hint() {
        let err = core(ApplicationError::TargetExists {
            path: PathBuf::from("/tmp/x.py"),
        });
        let s = err.report(false, false);
        assert!(s.contains("error: Target file already exists"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains(RERUN_HINT));
        assert!(!s.contains('\u{1b}'));
    }

    #[test]
    fn verbose_report_shows_cause_without_hint() {
        let err = CliError::IoError {
            message: "writing config".into(),
            source: io::Error::other("disk full"),
        };
        let s = err.report(true, false);
        assert!(s.contains("caused by: disk full"));
        assert!(!s.contains(RERUN_HINT));
    }

    #[test]
    fn core_categories_map_to_cli_categories() {
        assert_eq!(ErrorCategory::from(CoreCategory::Validation), ErrorCategory::UserError);
        assert_eq!(ErrorCategory::from(CoreCategory::NotFound), ErrorCategory::NotFound);
        assert_eq!(ErrorCategory::from(CoreCategory::Internal), ErrorCategory::Internal);
    }

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(
            cli,
            Err(CliError::IoError { ref message, .. }) if message == "reading config"
        ));
    }
}
