//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not naming
//! rules. Naming errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A declared dependency has no data-model definition in the project.
    #[error("Unknown dependency '{name}': {expected} does not exist")]
    UnknownDependency { name: String, expected: PathBuf },

    /// The target file exists and overwriting was not authorised.
    #[error("Target file already exists: {path}")]
    TargetExists { path: PathBuf },

    /// The project root is missing or not a directory.
    #[error("Project directory not found: {path}")]
    ProjectNotFound { path: PathBuf },

    /// No template registered under the requested key.
    #[error("Template resolution failed: {reason}")]
    TemplateResolution { reason: String },

    /// Template rendering failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Template store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownDependency { name, expected } => vec![
                format!("Define the data model '{name}' first"),
                format!("Expected file: {}", expected.display()),
                "Dependencies are CamelCase class names, e.g. RawLogs".into(),
                "Try: pipegen models to list the data models in this project".into(),
            ],
            Self::TargetExists { path } => vec![
                format!("File already exists: {}", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Use --dry-run to preview the generated code instead".into(),
            ],
            Self::ProjectNotFound { path } => vec![
                format!("No project directory at: {}", path.display()),
                "Pass the project root with --project-dir".into(),
            ],
            Self::TemplateResolution { reason } => vec![
                format!("Resolution failed: {reason}"),
                "Try: pipegen templates to see available templates".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::StoreLockError => vec![
                "The template store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::RenderingFailed { .. } => vec![
                "Check the template syntax".into(),
                "Custom templates may only use the documented variables".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownDependency { .. }
            | Self::ProjectNotFound { .. }
            | Self::TemplateResolution { .. } => ErrorCategory::NotFound,
            Self::TargetExists { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::StoreLockError | Self::RenderingFailed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}
