//! Filesystem-based template loader.
//!
//! Discovers `*.j2` files under a user template directory and turns them into
//! domain [`Template`]s. The key is the path relative to the directory, so a
//! file named `task.py.j2` at the top level replaces the built-in `Task`
//! template.
//!
//! ```text
//! my-templates/
//! ├── task.py.j2          ← overrides the Task archetype
//! ├── source.py.j2        ← overrides the Source archetype
//! ├── README.md           ← ignored (not *.j2)
//! └── extra/
//!     └── report.py.j2    ← key "extra/report.py.j2", listed but unused
//! ```
//!
//! Files that cannot be read or do not parse are skipped with a `WARN` log;
//! one bad template never blocks the others.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use pipegen_core::{
    application::ApplicationError,
    domain::{Template, TemplateKey, TemplateOrigin},
    error::PipegenResult,
};

use crate::renderer::TeraRenderer;

/// Template file extension.
pub const TEMPLATE_EXTENSION: &str = "j2";

/// Loads [`Template`] objects from a directory tree.
pub struct DirectoryTemplateLoader {
    templates_dir: PathBuf,
}

impl DirectoryTemplateLoader {
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
        }
    }

    /// Load every valid template under the directory, sorted by key.
    ///
    /// # Errors
    ///
    /// `TemplateResolution` if the directory does not exist, `FilesystemError`
    /// if it cannot be walked.
    #[instrument(skip(self), fields(dir = %self.templates_dir.display()))]
    pub fn load_all(&self) -> PipegenResult<Vec<Template>> {
        if !self.templates_dir.is_dir() {
            return Err(ApplicationError::TemplateResolution {
                reason: format!(
                    "templates directory not found: {}",
                    self.templates_dir.display()
                ),
            }
            .into());
        }

        let checker = TeraRenderer::new();
        let mut templates = Vec::new();

        for entry in WalkDir::new(&self.templates_dir)
            .min_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                path: self.templates_dir.clone(),
                reason: format!("directory walk error: {e}"),
            })?;

            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(TEMPLATE_EXTENSION)
            {
                continue;
            }

            let template = match self.load_file(path) {
                Ok(template) => template,
                Err(reason) => {
                    warn!(path = %path.display(), %reason, "Skipping template file");
                    continue;
                }
            };

            if let Err(e) = checker.check(&template) {
                warn!(path = %path.display(), error = %e, "Skipping template with invalid syntax");
                continue;
            }

            debug!(key = %template.key, "Loaded template");
            templates.push(template);
        }

        debug!(count = templates.len(), "Finished loading templates");
        Ok(templates)
    }

    fn load_file(&self, path: &Path) -> Result<Template, String> {
        let relative = path
            .strip_prefix(&self.templates_dir)
            .map_err(|_| format!("not under {}", self.templates_dir.display()))?;
        let key = normalize_key(&relative.to_string_lossy());
        let body = fs::read_to_string(path).map_err(|e| format!("failed to read: {e}"))?;

        Ok(Template::new(
            TemplateKey::new(key),
            TemplateOrigin::File(path.to_path_buf()),
            body,
        ))
    }
}

/// Keys always use forward slashes.
fn normalize_key(path: &str) -> String {
    path.replace('\\', "/")
}
