//! Domain layer: identifiers, archetypes, the project layout, templates.
//!
//! Nothing here touches the filesystem or logs. Every type is a plain value
//! that is `Clone` and comparable.

pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::{
    artifact::GeneratedArtifact,
    identifier::{Identifier, SOURCE_EXTENSION},
    project::{DATA_MODELS_DIR, ScaffoldProject, TASKS_DIR},
    template::{RenderContext, Template, TemplateKey, TemplateOrigin},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{Archetype, WriteMode};

pub use validation::DomainValidator;
