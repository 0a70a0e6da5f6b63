use std::path::{Path, PathBuf};

/// Result of one successful scaffold request.
///
/// This is the output of the write policy. It contains no business logic,
/// only data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedArtifact {
    /// Content was written to `path`.
    Written { path: PathBuf, bytes: usize },
    /// Dry run: nothing touched the filesystem. `path` is where the file
    /// would have gone.
    Previewed { path: PathBuf, content: String },
}

impl GeneratedArtifact {
    pub fn path(&self) -> &Path {
        match self {
            Self::Written { path, .. } | Self::Previewed { path, .. } => path,
        }
    }

    /// Rendered text, only available for previews.
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Previewed { content, .. } => Some(content),
            Self::Written { .. } => None,
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written { .. })
    }
}
