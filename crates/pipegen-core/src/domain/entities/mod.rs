pub mod artifact;
pub mod identifier;
pub mod project;
pub mod template;

pub use crate::domain::DomainError;
pub use artifact::GeneratedArtifact;
pub use identifier::Identifier;
pub use project::ScaffoldProject;
pub use template::{RenderContext, Template, TemplateKey, TemplateOrigin};
