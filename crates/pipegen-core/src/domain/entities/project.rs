use std::path::PathBuf;

use crate::domain::{entities::identifier::Identifier, value_objects::WriteMode};

/// Subdirectory holding the project's data-model classes.
pub const DATA_MODELS_DIR: &str = "data_models";

/// Subdirectory generated task classes are written to.
pub const TASKS_DIR: &str = "tasks";

/// One project root plus the write flags for a single scaffold request.
///
/// Pure path logic: whether `root` exists is checked by the application
/// layer through the filesystem port before a project is handed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldProject {
    root: PathBuf,
    mode: WriteMode,
}

impl ScaffoldProject {
    pub fn new(root: impl Into<PathBuf>, mode: WriteMode) -> Self {
        Self {
            root: root.into(),
            mode,
        }
    }

    pub fn is_dry_run(&self) -> bool {
        self.mode.dry_run
    }

    pub fn is_force(&self) -> bool {
        self.mode.force
    }

    pub fn mode_message(&self) -> &'static str {
        self.mode.message()
    }

    pub fn data_models_dir(&self) -> PathBuf {
        self.root.join(DATA_MODELS_DIR)
    }

    pub fn tasks_dir(&self) -> PathBuf {
        self.root.join(TASKS_DIR)
    }

    /// Where the data-model class `name` is expected to be defined.
    pub fn data_model_path(&self, name: &Identifier) -> PathBuf {
        self.data_models_dir().join(name.as_file_name())
    }

    /// Where the task class `name` is generated.
    pub fn task_path(&self, name: &Identifier) -> PathBuf {
        self.tasks_dir().join(name.as_file_name())
    }
}
