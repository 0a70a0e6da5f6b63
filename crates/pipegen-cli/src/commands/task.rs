//! Implementation of the `pipegen task` command.
//!
//! Responsibility: translate CLI arguments into a `TaskRequest`, call the
//! scaffold service, and display the outcome. No business logic lives here.

use serde_json::json;
use tracing::{info, instrument};

use pipegen_core::{
    application::{TaskOutcome, TaskRequest},
    domain::{Archetype, GeneratedArtifact},
};

use crate::{
    cli::TaskArgs,
    commands::{project_directory, scaffold_service, templates_directory},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `pipegen task` command.
#[instrument(skip_all, fields(class = %args.class_name))]
pub fn execute(args: TaskArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let archetype = Archetype::from_flags(args.source, args.simple)?;
    let templates = templates_directory(args.templates, config);
    let service = scaffold_service(templates.as_deref())?;

    let request = TaskRequest {
        class_name: args.class_name,
        dependency_names: args.dependencies,
        archetype,
        project_directory: project_directory(args.project_dir, config),
        dry_run: args.dry_run,
        force: args.force,
    };

    let outcome = service.create_task(&request)?;
    info!(path = %outcome.artifact.path().display(), "Task generated");

    render(&outcome, output)
}

fn render(outcome: &TaskOutcome, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(&to_json(outcome))?;
        return Ok(());
    }

    if let Some(content) = outcome.artifact.content() {
        output.raw(content)?;
    }
    output.success(&outcome.confirmation())?;
    Ok(())
}

fn to_json(outcome: &TaskOutcome) -> serde_json::Value {
    let mut value = json!({
        "archetype": outcome.archetype.class_name(),
        "class_name": outcome.class_name.as_class(),
        "path": outcome.artifact.path(),
        "written": outcome.artifact.is_written(),
        "message": outcome.confirmation(),
    });
    match &outcome.artifact {
        GeneratedArtifact::Previewed { content, .. } => value["content"] = json!(content),
        GeneratedArtifact::Written { bytes, .. } => value["bytes"] = json!(bytes),
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipegen_core::domain::Identifier;
    use std::path::PathBuf;

    fn outcome(artifact: GeneratedArtifact) -> TaskOutcome {
        TaskOutcome {
            archetype: Archetype::Task,
            class_name: Identifier::new("UserEvents").unwrap(),
            artifact,
            mode_message: "",
        }
    }

    #[test]
    fn json_for_written_artifact() {
        let value = to_json(&outcome(GeneratedArtifact::Written {
            path: PathBuf::from("p/tasks/user_events.py"),
            bytes: 42,
        }));
        assert_eq!(value["archetype"], "Task");
        assert_eq!(value["class_name"], "UserEvents");
        assert_eq!(value["path"], "p/tasks/user_events.py");
        assert_eq!(value["written"], true);
        assert_eq!(value["bytes"], 42);
        assert_eq!(value["message"], "Task UserEvents was created.");
    }

    #[test]
    fn json_for_preview_carries_content() {
        let value = to_json(&outcome(GeneratedArtifact::Previewed {
            path: PathBuf::from("p/tasks/user_events.py"),
            content: "class UserEvents(Task):".into(),
        }));
        assert_eq!(value["written"], false);
        assert_eq!(value["content"], "class UserEvents(Task):");
        assert!(value.get("bytes").is_none());
    }
}
