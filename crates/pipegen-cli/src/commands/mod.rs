//! Command handlers, one module per subcommand.
//!
//! Handlers translate parsed arguments into core calls and render the
//! result. Adapter wiring shared between handlers lives here.

use std::path::{Path, PathBuf};

use tracing::debug;

use pipegen_adapters::{InMemoryStore, LocalFilesystem, TeraRenderer};
use pipegen_core::application::ScaffoldService;

use crate::{config::AppConfig, error::CliResult};

pub mod completions;
pub mod config;
pub mod init;
pub mod models;
pub mod task;
pub mod templates;

/// Built-in templates, overlaid with `dir` when given.
pub fn template_store(dir: Option<&Path>) -> CliResult<InMemoryStore> {
    let store = match dir {
        Some(dir) => {
            debug!(dir = %dir.display(), "Using template overrides");
            InMemoryStore::with_overrides(dir)?
        }
        None => InMemoryStore::with_builtin()?,
    };
    Ok(store)
}

/// Production wiring of the scaffold service.
pub fn scaffold_service(templates: Option<&Path>) -> CliResult<ScaffoldService> {
    Ok(ScaffoldService::new(
        Box::new(template_store(templates)?),
        Box::new(TeraRenderer::new()),
        Box::new(LocalFilesystem::new()),
    ))
}

/// Wiring for read-only project queries. No templates are loaded, so a
/// broken template directory cannot fail them.
pub fn project_service() -> ScaffoldService {
    ScaffoldService::new(
        Box::new(InMemoryStore::new()),
        Box::new(TeraRenderer::new()),
        Box::new(LocalFilesystem::new()),
    )
}

/// `--project-dir`, else the configured default, else the current directory.
pub fn project_directory(flag: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    flag.or_else(|| config.defaults.project_directory.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// `--templates`, else the configured template directory.
pub fn templates_directory(flag: Option<PathBuf>, config: &AppConfig) -> Option<PathBuf> {
    flag.or_else(|| config.templates.local_path.clone())
}
