//! Implementation of the `pipegen templates` command.

use pipegen_adapters::template_loader::TEMPLATE_EXTENSION;
use pipegen_core::{
    application::{TemplateInfo, TemplateService},
    domain::{Archetype, Template, TemplateKey},
    error::Context as _,
};

use crate::{
    cli::{ListFormat, TemplatesArgs},
    commands::{template_store, templates_directory},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: TemplatesArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let dir = templates_directory(args.templates, config);
    let service = TemplateService::new(Box::new(template_store(dir.as_deref())?));

    if let Some(name) = args.show {
        let template = lookup(&service, &name)?;
        output.raw(&template.body)?;
        return Ok(());
    }

    let templates = service.list()?;

    let format = args.format.unwrap_or(if output.is_json() {
        ListFormat::Json
    } else {
        ListFormat::Table
    });

    match format {
        ListFormat::Table => {
            output.header("Available Templates:")?;
            for t in &templates {
                output.raw(&format!(
                    "  {:<20} {:<12} {}",
                    t.key,
                    archetype_label(t),
                    t.origin
                ))?;
            }
        }
        ListFormat::Json => {
            let json =
                serde_json::to_string_pretty(&templates).context("serialising templates")?;
            output.raw(&json)?;
        }
        ListFormat::List => {
            for t in &templates {
                output.raw(&t.key)?;
            }
        }
        ListFormat::Csv => {
            output.raw("key,archetype,origin")?;
            for t in &templates {
                output.raw(&format!(
                    "{},{},{}",
                    csv_field(&t.key),
                    archetype_label(t),
                    csv_field(&t.origin)
                ))?;
            }
        }
    }

    Ok(())
}

/// A name ending in `.j2` is a template key; anything else must parse as an
/// archetype.
fn lookup(service: &TemplateService, name: &str) -> CliResult<Template> {
    let is_key = name
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ext == TEMPLATE_EXTENSION);
    let template = if is_key {
        service.get(&TemplateKey::new(name))?
    } else {
        service.for_archetype(name.parse::<Archetype>()?)?
    };
    Ok(template)
}

fn archetype_label(info: &TemplateInfo) -> String {
    info.archetype
        .map(|a| a.to_string())
        .unwrap_or_else(|| "-".into())
}

/// Quote a CSV field if it contains a separator, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipegen_core::domain::Archetype;

    #[test]
    fn csv_quotes_only_when_needed() {
        assert_eq!(csv_field("task.py.j2"), "task.py.j2");
        assert_eq!(csv_field("/a,b/t.j2"), "\"/a,b/t.j2\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn archetype_label_falls_back_to_dash() {
        let mut info = TemplateInfo {
            key: "extra.py.j2".into(),
            origin: "builtin".into(),
            archetype: None,
        };
        assert_eq!(archetype_label(&info), "-");
        info.archetype = Some(Archetype::SimpleTask);
        assert_eq!(archetype_label(&info), "SimpleTask");
    }

    fn builtin_service() -> TemplateService {
        TemplateService::new(Box::new(pipegen_adapters::InMemoryStore::with_builtin().unwrap()))
    }

    #[test]
    fn lookup_by_archetype_or_key() {
        let service = builtin_service();

        let by_tag = lookup(&service, "simple-task").unwrap();
        assert_eq!(by_tag.key.as_str(), "simple_task.py.j2");

        let by_key = lookup(&service, "source.py.j2").unwrap();
        assert_eq!(by_key.archetype(), Some(Archetype::Source));
    }

    #[test]
    fn lookup_rejects_unknown_archetype() {
        let err = lookup(&builtin_service(), "pipeline").unwrap_err();
        assert!(err.to_string().contains("pipeline"));
        assert_eq!(err.exit_code(), 3);
    }
}
