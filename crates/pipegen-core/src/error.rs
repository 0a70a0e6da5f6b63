//! Unified error handling for Pipegen Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Pipegen Core operations.
///
/// This enum wraps all possible errors that can occur when using pipegen-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipegenError {
    /// Errors from the domain layer (naming and archetype rules).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (validation, templates, I/O).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl PipegenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Pipegen".into(),
                "Please report this issue at: https://github.com/pipegen/pipegen/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::StoreLockError))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type PipegenResult<T> = Result<T, PipegenError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> PipegenResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> PipegenResult<T> {
        self.map_err(|e| PipegenError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn domain_errors_keep_their_message() {
        let err: PipegenError = DomainError::AmbiguousArchetype.into();
        assert!(err.to_string().contains("--source and --simple"));
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn unknown_dependency_is_not_found_and_names_the_class() {
        let err: PipegenError = ApplicationError::UnknownDependency {
            name: "RawLogs".into(),
            expected: PathBuf::from("p/data_models/raw_logs.py"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.to_string().contains("RawLogs"));
        assert!(err.suggestions().iter().any(|s| s.contains("raw_logs.py")));
    }

    #[test]
    fn target_exists_suggests_force() {
        let err: PipegenError = ApplicationError::TargetExists {
            path: PathBuf::from("tasks/x.py"),
        }
        .into();
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
    }

    #[test]
    fn only_lock_errors_are_retryable() {
        assert!(PipegenError::from(ApplicationError::StoreLockError).is_retryable());
        assert!(!PipegenError::from(DomainError::AmbiguousArchetype).is_retryable());
    }

    #[test]
    fn context_wraps_foreign_errors_as_internal() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        let err = result.context("reading templates").unwrap_err();
        assert!(matches!(err, PipegenError::Internal { .. }));
        assert!(err.to_string().contains("reading templates: boom"));
    }
}
