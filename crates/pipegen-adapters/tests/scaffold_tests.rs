//! End-to-end scaffolding against real and in-memory filesystems.

use std::fs;
use std::path::{Path, PathBuf};

use pipegen_adapters::{InMemoryStore, LocalFilesystem, MemoryFilesystem, TeraRenderer};
use pipegen_core::application::ApplicationError;
use pipegen_core::domain::DomainError;
use pipegen_core::prelude::*;
use tempfile::TempDir;

fn local_service() -> ScaffoldService {
    ScaffoldService::new(
        Box::new(InMemoryStore::with_builtin().unwrap()),
        Box::new(TeraRenderer::new()),
        Box::new(LocalFilesystem::new()),
    )
}

fn project_with_models(models: &[&str]) -> TempDir {
    let temp = TempDir::new().unwrap();
    let data_models = temp.path().join("data_models");
    fs::create_dir(&data_models).unwrap();
    for model in models {
        fs::write(data_models.join(model), "class Model: ...\n").unwrap();
    }
    temp
}

fn request(root: &Path, class: &str, deps: &[&str]) -> TaskRequest {
    TaskRequest {
        class_name: class.into(),
        dependency_names: deps.iter().map(|d| d.to_string()).collect(),
        archetype: Archetype::Task,
        project_directory: root.to_path_buf(),
        dry_run: false,
        force: false,
    }
}

#[test]
fn creates_task_file_referencing_class_and_dependency() {
    let project = project_with_models(&["raw_logs.py"]);

    let outcome = local_service()
        .create_task(&request(project.path(), "UserEvents", &["RawLogs"]))
        .unwrap();

    let target = project.path().join("tasks").join("user_events.py");
    assert_eq!(outcome.artifact.path(), target);
    assert!(outcome.artifact.is_written());
    assert_eq!(outcome.confirmation(), "Task UserEvents was created.");

    let content = fs::read_to_string(&target).unwrap();
    assert!(content.contains("class UserEvents(Task):"));
    assert!(content.contains("from data_models.raw_logs import RawLogs"));
}

#[test]
fn missing_dependency_creates_nothing() {
    let project = project_with_models(&[]);

    let err = local_service()
        .create_task(&request(project.path(), "UserEvents", &["RawLogs"]))
        .unwrap_err();

    assert_eq!(
        err,
        ApplicationError::UnknownDependency {
            name: "RawLogs".into(),
            expected: project.path().join("data_models").join("raw_logs.py"),
        }
        .into()
    );
    assert!(!project.path().join("tasks").exists());
}

#[test]
fn existing_target_is_left_untouched_without_force() {
    let project = project_with_models(&[]);
    let tasks = project.path().join("tasks");
    fs::create_dir(&tasks).unwrap();
    fs::write(tasks.join("user_events.py"), "hand written").unwrap();

    let err = local_service()
        .create_task(&request(project.path(), "UserEvents", &[]))
        .unwrap_err();

    assert!(matches!(
        err,
        PipegenError::Application(ApplicationError::TargetExists { .. })
    ));
    assert_eq!(
        fs::read_to_string(tasks.join("user_events.py")).unwrap(),
        "hand written"
    );
}

#[test]
fn force_overwrites_existing_target() {
    let project = project_with_models(&[]);
    let tasks = project.path().join("tasks");
    fs::create_dir(&tasks).unwrap();
    fs::write(tasks.join("user_events.py"), "hand written").unwrap();

    let mut req = request(project.path(), "UserEvents", &[]);
    req.force = true;
    let outcome = local_service().create_task(&req).unwrap();

    assert_eq!(outcome.confirmation(), "Task UserEvents was created. - Mode: Force");
    let content = fs::read_to_string(tasks.join("user_events.py")).unwrap();
    assert!(content.contains("class UserEvents(Task):"));
}

#[test]
fn dry_run_returns_content_and_leaves_disk_alone() {
    let project = project_with_models(&["raw_logs.py", "accounts.py"]);

    let mut req = request(project.path(), "UserEvents", &["RawLogs", "Accounts"]);
    req.dry_run = true;
    req.archetype = Archetype::SimpleTask;
    let outcome = local_service().create_task(&req).unwrap();

    match &outcome.artifact {
        GeneratedArtifact::Previewed { path, content } => {
            assert_eq!(path, &project.path().join("tasks").join("user_events.py"));
            assert!(content.contains("UserEvents"));
            assert!(content.contains("RawLogs"));
            assert!(content.contains("Accounts"));
            assert!(content.contains("(SimpleTask):"));
        }
        other => panic!("expected preview, got {other:?}"),
    }
    assert!(!project.path().join("tasks").exists());
    assert_eq!(
        outcome.confirmation(),
        "SimpleTask UserEvents was created. - Mode: Dry run"
    );
}

#[test]
fn invalid_class_name_is_rejected_before_touching_disk() {
    let temp = TempDir::new().unwrap();
    // No data_models dir and the project root is valid: only the name is wrong.
    let err = local_service()
        .create_task(&request(temp.path(), "user_events", &[]))
        .unwrap_err();

    assert!(matches!(
        err,
        PipegenError::Domain(DomainError::InvalidIdentifier { .. })
    ));
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn missing_project_directory_is_reported() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope");

    let err = local_service()
        .create_task(&request(&missing, "UserEvents", &[]))
        .unwrap_err();
    assert_eq!(
        err,
        ApplicationError::ProjectNotFound { path: missing }.into()
    );
}

#[test]
fn source_archetype_uses_source_template() {
    let project = project_with_models(&[]);
    let mut req = request(project.path(), "LogReader", &[]);
    req.archetype = Archetype::Source;

    local_service().create_task(&req).unwrap();

    let content =
        fs::read_to_string(project.path().join("tasks").join("log_reader.py")).unwrap();
    assert!(content.contains("class LogReader(Source):"));
    assert!(content.contains("def source_iterator(self):"));
}

#[test]
fn lists_data_models_in_project() {
    let project = project_with_models(&["raw_logs.py", "__init__.py", "accounts.py"]);
    let scaffold = ScaffoldProject::new(project.path(), WriteMode::default());

    let models = local_service().list_data_models(&scaffold).unwrap();
    let names: Vec<_> = models.iter().map(|m| m.as_class()).collect();
    assert_eq!(names, ["Accounts", "RawLogs"]);
}

#[test]
fn memory_filesystem_runs_the_same_workflow() {
    let fs = MemoryFilesystem::new();
    fs.add_file("/proj/data_models/raw_logs.py", "");
    let service = ScaffoldService::new(
        Box::new(InMemoryStore::with_builtin().unwrap()),
        Box::new(TeraRenderer::new()),
        Box::new(fs.clone()),
    );

    service
        .create_task(&request(Path::new("/proj"), "UserEvents", &["RawLogs"]))
        .unwrap();

    let content = fs
        .read_file(&PathBuf::from("/proj/tasks/user_events.py"))
        .unwrap();
    assert!(content.contains("class UserEvents(Task):"));
    assert_eq!(fs.file_count(), 2);
}
