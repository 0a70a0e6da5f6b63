//! Templates and the data they are rendered with.
//!
//! ```text
//! Archetype ──template_key()──▶ TemplateKey ──TemplateStore──▶ Template
//!                                                                 │
//!                RenderContext (class, archetype, dependencies) ──┤
//!                                                                 ▼
//!                                                 TemplateRenderer → String
//! ```
//!
//! Templates are plain text. Which syntax they use is the renderer adapter's
//! business; the domain only names them and builds the context.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{entities::identifier::Identifier, value_objects::Archetype};

/// Lookup name of a template, e.g. `task.py.j2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TemplateKey(String);

impl TemplateKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Archetype> for TemplateKey {
    fn from(archetype: Archetype) -> Self {
        Self(archetype.template_key())
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a template body came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOrigin {
    /// Compiled into the binary.
    Builtin,
    /// Loaded from a user template directory.
    File(PathBuf),
}

impl fmt::Display for TemplateOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => f.write_str("builtin"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A named template body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub key: TemplateKey,
    pub origin: TemplateOrigin,
    pub body: String,
}

impl Template {
    pub fn new(key: TemplateKey, origin: TemplateOrigin, body: impl Into<String>) -> Self {
        Self {
            key,
            origin,
            body: body.into(),
        }
    }

    /// The archetype this template serves, if its key is one of the three
    /// archetype keys.
    pub fn archetype(&self) -> Option<Archetype> {
        Archetype::ALL
            .into_iter()
            .find(|a| a.template_key() == self.key.as_str())
    }
}

/// Context for template rendering.
///
/// A **Value Object** serialised into the template engine's variable map.
///
/// ## Variables
///
/// | Variable       | Example                                   |
/// |----------------|-------------------------------------------|
/// | `class_name`   | `"UserEvents"`                            |
/// | `module`       | `"user_events"`                           |
/// | `variable`     | `"userEvents"`                            |
/// | `archetype`    | `"Task"`                                  |
/// | `dependencies` | `["RawLogs"]`                             |
/// | `imports`      | `[{"module": "raw_logs", "class": "RawLogs"}]` |
/// | `names`        | every form of every dependency (`Identifier` objects) |
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    class_name: String,
    module: String,
    variable: String,
    archetype: String,
    dependencies: Vec<String>,
    imports: Vec<Import>,
    names: Vec<Identifier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Import {
    module: String,
    class: String,
}

impl RenderContext {
    /// Build the context for one generated class. Dependency order is kept.
    pub fn new(class_name: &Identifier, archetype: Archetype, dependencies: &[Identifier]) -> Self {
        Self {
            class_name: class_name.as_class().to_string(),
            module: class_name.as_snake(),
            variable: class_name.as_variable(),
            archetype: archetype.class_name().to_string(),
            dependencies: dependencies
                .iter()
                .map(|d| d.as_class().to_string())
                .collect(),
            imports: dependencies
                .iter()
                .map(|d| Import {
                    module: d.as_snake(),
                    class: d.as_class().to_string(),
                })
                .collect(),
            names: dependencies.to_vec(),
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> Identifier {
        Identifier::new(raw).unwrap()
    }

    #[test]
    fn template_key_from_archetype() {
        assert_eq!(TemplateKey::from(Archetype::Source).as_str(), "source.py.j2");
    }

    #[test]
    fn template_knows_its_archetype() {
        let t = Template::new(TemplateKey::new("simple_task.py.j2"), TemplateOrigin::Builtin, "");
        assert_eq!(t.archetype(), Some(Archetype::SimpleTask));

        let custom = Template::new(TemplateKey::new("pipeline.py.j2"), TemplateOrigin::Builtin, "");
        assert_eq!(custom.archetype(), None);
    }

    #[test]
    fn render_context_keeps_dependency_order() {
        let ctx = RenderContext::new(
            &id("UserEvents"),
            Archetype::Task,
            &[id("RawLogs"), id("Accounts")],
        );
        assert_eq!(ctx.class_name(), "UserEvents");
        assert_eq!(ctx.dependencies(), ["RawLogs", "Accounts"]);
    }

    #[test]
    fn render_context_serialises_for_templates() {
        let ctx = RenderContext::new(&id("UserEvents"), Archetype::SimpleTask, &[id("RawLogs")]);
        let value = serde_json::to_value(&ctx).unwrap();

        assert_eq!(value["class_name"], "UserEvents");
        assert_eq!(value["module"], "user_events");
        assert_eq!(value["variable"], "userEvents");
        assert_eq!(value["archetype"], "SimpleTask");
        assert_eq!(value["dependencies"][0], "RawLogs");
        assert_eq!(value["imports"][0]["module"], "raw_logs");
        assert_eq!(value["imports"][0]["class"], "RawLogs");
        assert_eq!(value["names"][0]["variable"], "rawLogs");
    }

    #[test]
    fn origin_display() {
        assert_eq!(TemplateOrigin::Builtin.to_string(), "builtin");
        assert_eq!(
            TemplateOrigin::File(PathBuf::from("t/task.py.j2")).to_string(),
            "t/task.py.j2"
        );
    }
}
