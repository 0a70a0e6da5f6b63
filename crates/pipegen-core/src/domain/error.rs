// ============================================================================
// domain/error.rs - NAMING AND ARCHETYPE ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside `PipegenError`)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("invalid identifier '{value}': {reason}")]
    InvalidIdentifier { value: String, reason: String },

    #[error("unknown archetype '{0}'")]
    UnknownArchetype(String),

    #[error("task type cannot be determined: --source and --simple used together")]
    AmbiguousArchetype,
}

impl DomainError {
    pub(crate) fn invalid_identifier(value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidIdentifier { value, .. } => vec![
                format!("'{value}' is not a CamelCase class name"),
                "Start with an uppercase letter and use only letters and digits".into(),
                "Examples: UserEvents, RawLogs, Word2Vec".into(),
            ],
            Self::UnknownArchetype(tag) => vec![
                format!("'{tag}' is not a task archetype"),
                "Supported archetypes: source, simple-task, task".into(),
            ],
            Self::AmbiguousArchetype => vec![
                "Pass at most one of --source and --simple".into(),
                "Omit both to generate a plain Task".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidIdentifier { .. } | Self::AmbiguousArchetype => ErrorCategory::Validation,
            Self::UnknownArchetype(_) => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
