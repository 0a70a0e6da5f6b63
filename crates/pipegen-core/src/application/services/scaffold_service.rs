//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the task scaffolding workflow:
//! 1. Validate every name (no I/O yet)
//! 2. Open the project root
//! 3. Check each dependency has a data-model definition
//! 4. Resolve the archetype's template and render it
//! 5. Apply the write policy (refuse / preview / write)
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer, TemplateStore},
    },
    domain::{
        Archetype, GeneratedArtifact, Identifier, RenderContext, SOURCE_EXTENSION,
        ScaffoldProject, Template, TemplateKey, WriteMode,
    },
    error::PipegenResult,
};

/// One scaffold invocation, as parsed by the CLI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRequest {
    pub class_name: String,
    pub dependency_names: Vec<String>,
    pub archetype: Archetype,
    pub project_directory: PathBuf,
    pub dry_run: bool,
    pub force: bool,
}

impl TaskRequest {
    pub fn mode(&self) -> WriteMode {
        WriteMode::new(self.dry_run, self.force)
    }
}

/// What a successful [`ScaffoldService::create_task`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskOutcome {
    pub archetype: Archetype,
    pub class_name: Identifier,
    pub artifact: GeneratedArtifact,
    pub mode_message: &'static str,
}

impl TaskOutcome {
    /// `"<Archetype> <Class> was created.<mode>"`
    pub fn confirmation(&self) -> String {
        format!(
            "{} {} was created.{}",
            self.archetype, self.class_name, self.mode_message
        )
    }
}

/// Main scaffolding service.
///
/// Orchestrates dependency validation, template resolution, rendering, and
/// writing.
pub struct ScaffoldService {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
        }
    }

    /// Generate one task class.
    ///
    /// Every name is validated before the filesystem is touched.
    #[instrument(
        skip_all,
        fields(
            class = %request.class_name,
            archetype = %request.archetype,
            project = %request.project_directory.display()
        )
    )]
    pub fn create_task(&self, request: &TaskRequest) -> PipegenResult<TaskOutcome> {
        let class_name = Identifier::new(&request.class_name)?;
        let dependencies = request
            .dependency_names
            .iter()
            .map(Identifier::new)
            .collect::<Result<Vec<_>, _>>()?;

        let project = self.open_project(&request.project_directory, request.mode())?;

        self.validate_dependencies(&project, &dependencies)?;
        let artifact = self.render(&project, &class_name, request.archetype, &dependencies)?;

        Ok(TaskOutcome {
            archetype: request.archetype,
            class_name,
            artifact,
            mode_message: project.mode_message(),
        })
    }

    /// Wrap `root` as a project. It must be an existing directory.
    pub fn open_project(&self, root: &Path, mode: WriteMode) -> PipegenResult<ScaffoldProject> {
        if !self.filesystem.is_dir(root) {
            return Err(ApplicationError::ProjectNotFound {
                path: root.to_path_buf(),
            }
            .into());
        }
        Ok(ScaffoldProject::new(root, mode))
    }

    /// Check each dependency in caller order; the first missing one is the
    /// error. Read-only.
    #[instrument(skip_all, fields(count = dependencies.len()))]
    pub fn validate_dependencies(
        &self,
        project: &ScaffoldProject,
        dependencies: &[Identifier],
    ) -> PipegenResult<()> {
        for dependency in dependencies {
            let expected = project.data_model_path(dependency);
            if !self.filesystem.exists(&expected) {
                warn!(dependency = %dependency, path = %expected.display(), "Dependency not found");
                return Err(ApplicationError::UnknownDependency {
                    name: dependency.as_class().to_string(),
                    expected,
                }
                .into());
            }
            debug!(dependency = %dependency, "Dependency found");
        }
        Ok(())
    }

    /// Look up the template for an archetype.
    pub fn resolve_template(&self, archetype: Archetype) -> PipegenResult<Template> {
        let key = TemplateKey::from(archetype);
        let template = self.store.get(&key).map_err(|e| {
            warn!(key = %key, error = %e, "Template lookup failed");
            ApplicationError::TemplateResolution {
                reason: format!("no template '{key}' for archetype {archetype}"),
            }
        })?;
        debug!(key = %key, origin = %template.origin, "Template resolved");
        Ok(template)
    }

    /// Apply the write policy for one class.
    ///
    /// 1. Existing target without `force` → `TargetExists`
    /// 2. Render
    /// 3. Dry run → `Previewed`, nothing written
    /// 4. Otherwise create `tasks/` and write → `Written`
    ///
    /// Callers must have validated `dependencies` first.
    #[instrument(skip_all, fields(class = %class_name, archetype = %archetype))]
    pub fn render(
        &self,
        project: &ScaffoldProject,
        class_name: &Identifier,
        archetype: Archetype,
        dependencies: &[Identifier],
    ) -> PipegenResult<GeneratedArtifact> {
        let target = project.task_path(class_name);

        if !project.is_force() && self.filesystem.exists(&target) {
            return Err(ApplicationError::TargetExists { path: target }.into());
        }

        let template = self.resolve_template(archetype)?;
        let context = RenderContext::new(class_name, archetype, dependencies);
        let content = self.renderer.render(&template, &context)?;

        if project.is_dry_run() {
            info!(path = %target.display(), "Dry run, nothing written");
            return Ok(GeneratedArtifact::Previewed {
                path: target,
                content,
            });
        }

        self.filesystem.create_dir_all(&project.tasks_dir())?;
        self.filesystem
            .write_file(&target, &content, project.is_force())?;

        info!(path = %target.display(), bytes = content.len(), "Task written");
        Ok(GeneratedArtifact::Written {
            path: target,
            bytes: content.len(),
        })
    }

    /// Data-model classes defined in the project, sorted by name.
    ///
    /// Files whose stem is not the snake form of a class name (such as
    /// `__init__.py`) are skipped.
    pub fn list_data_models(&self, project: &ScaffoldProject) -> PipegenResult<Vec<Identifier>> {
        let files = self.filesystem.list_files(&project.data_models_dir())?;

        let mut models: Vec<Identifier> = files
            .iter()
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some(SOURCE_EXTENSION))
            .filter_map(|p| p.file_stem().and_then(|s| s.to_str()))
            .filter_map(|stem| match Identifier::from_snake(stem) {
                Ok(id) => Some(id),
                Err(e) => {
                    debug!(stem, error = %e, "Skipping non-model file");
                    None
                }
            })
            .collect();

        models.sort();
        Ok(models)
    }
}
