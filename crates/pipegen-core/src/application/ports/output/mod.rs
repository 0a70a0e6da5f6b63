//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `pipegen-adapters` crate provides implementations.

use crate::domain::{RenderContext, Template, TemplateKey};
use crate::error::PipegenResult;
use std::path::{Path, PathBuf};

/// Port for filesystem operations.
///
/// Implemented by:
/// - `pipegen_adapters::filesystem::LocalFilesystem` (production)
/// - `pipegen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> PipegenResult<()>;

    /// Write content to a file, all or nothing.
    ///
    /// With `overwrite == false` the write must fail with
    /// `ApplicationError::TargetExists` if `path` exists at the moment of the
    /// write, not just at some earlier check.
    fn write_file(&self, path: &Path, content: &str, overwrite: bool) -> PipegenResult<()>;

    /// Regular files directly inside `dir`, sorted. Missing `dir` is empty.
    fn list_files(&self, dir: &Path) -> PipegenResult<Vec<PathBuf>>;
}

/// Port for template storage and retrieval.
///
/// Implemented by:
/// - `pipegen_adapters::template_store::InMemoryStore` (built-in templates,
///   optionally overlaid with a user template directory)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Get a specific template by key.
    fn get(&self, key: &TemplateKey) -> PipegenResult<Template>;

    /// List all available templates.
    fn list(&self) -> PipegenResult<Vec<Template>>;

    /// Insert or replace a template.
    fn insert(&self, template: Template) -> PipegenResult<()>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `pipegen_adapters::renderer::TeraRenderer`
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render a template body with the given context.
    ///
    /// The engine must support variable substitution and iteration over
    /// `dependencies` / `imports`.
    fn render(&self, template: &Template, context: &RenderContext) -> PipegenResult<String>;
}
