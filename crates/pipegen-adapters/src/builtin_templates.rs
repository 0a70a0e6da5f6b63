//! Templates that ship with Pipegen.
//!
//! One template per archetype, compiled into the binary so a fresh install
//! works without any template directory. A user directory loaded through
//! [`crate::template_loader`] overrides these by key.
//!
//! | Key                 | Archetype    |
//! |---------------------|--------------|
//! | `source.py.j2`      | `Source`     |
//! | `simple_task.py.j2` | `SimpleTask` |
//! | `task.py.j2`        | `Task`       |

use pipegen_core::domain::{Archetype, Template, TemplateKey, TemplateOrigin};

const SOURCE: &str = include_str!("../templates/source.py.j2");
const SIMPLE_TASK: &str = include_str!("../templates/simple_task.py.j2");
const TASK: &str = include_str!("../templates/task.py.j2");

/// Body of the built-in template for `archetype`.
pub fn body(archetype: Archetype) -> &'static str {
    match archetype {
        Archetype::Source => SOURCE,
        Archetype::SimpleTask => SIMPLE_TASK,
        Archetype::Task => TASK,
    }
}

/// The built-in template for `archetype`.
pub fn template(archetype: Archetype) -> Template {
    Template::new(
        TemplateKey::from(archetype),
        TemplateOrigin::Builtin,
        body(archetype),
    )
}

/// Every built-in template, in archetype order.
pub fn all_templates() -> Vec<Template> {
    Archetype::ALL.into_iter().map(template).collect()
}
