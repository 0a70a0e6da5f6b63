//! Implementation of the `pipegen models` command.

use serde::Serialize;

use pipegen_core::domain::{Identifier, ScaffoldProject, WriteMode};

use crate::{
    cli::{ModelsArgs, ModelsFormat},
    commands::{project_directory, project_service},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct ModelRow {
    class_name: String,
    file: String,
}

impl From<&Identifier> for ModelRow {
    fn from(id: &Identifier) -> Self {
        Self {
            class_name: id.as_class().to_string(),
            file: id.as_file_name(),
        }
    }
}

pub fn execute(args: ModelsArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let root = project_directory(args.project_dir, config);
    let service = project_service();

    let project = service.open_project(&root, WriteMode::default())?;
    let rows: Vec<ModelRow> = service
        .list_data_models(&project)?
        .iter()
        .map(ModelRow::from)
        .collect();

    let format = args.format.unwrap_or(if output.is_json() {
        ModelsFormat::Json
    } else {
        ModelsFormat::Table
    });

    match format {
        ModelsFormat::Json => output.json(&rows)?,
        ModelsFormat::List => {
            for row in &rows {
                output.raw(&row.class_name)?;
            }
        }
        ModelsFormat::Table => render_table(&project, &rows, output)?,
    }

    Ok(())
}

fn render_table(
    project: &ScaffoldProject,
    rows: &[ModelRow],
    output: &OutputManager,
) -> CliResult<()> {
    output.header(&format!(
        "Data models in {}:",
        project.data_models_dir().display()
    ))?;
    if rows.is_empty() {
        output.info("No data models found")?;
        return Ok(());
    }

    let width = rows.iter().map(|r| r.class_name.len()).max().unwrap_or(0);
    for row in rows {
        output.raw(&format!("  {:<width$}  {}", row.class_name, row.file))?;
    }
    Ok(())
}
