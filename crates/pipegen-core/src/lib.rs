//! Pipegen core: naming rules, archetypes, and the task scaffolding use case.
//!
//! ```text
//! pipegen-cli ──▶ ScaffoldService / TemplateService ──▶ ports (traits)
//!                          │                                 ▲
//!                          ▼                                 │
//!      Identifier, Archetype, ScaffoldProject      pipegen-adapters
//! ```
//!
//! The domain layer is pure. Filesystem access, template lookup and
//! rendering go through the `Filesystem`, `TemplateStore` and
//! `TemplateRenderer` ports.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pipegen_core::application::{ScaffoldService, TaskRequest};
//! use pipegen_core::domain::Archetype;
//!
//! // Adapters come from pipegen-adapters.
//! let service = ScaffoldService::new(store, renderer, filesystem);
//!
//! let outcome = service.create_task(&TaskRequest {
//!     class_name: "UserEvents".into(),
//!     dependency_names: vec!["RawLogs".into()],
//!     archetype: Archetype::Task,
//!     project_directory: ".".into(),
//!     dry_run: false,
//!     force: false,
//! })?;
//! println!("{}", outcome.confirmation());
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// The types most callers need.
pub mod prelude {
    pub use crate::application::{
        ScaffoldService, TaskOutcome, TaskRequest, TemplateService,
        ports::{Filesystem, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        Archetype, GeneratedArtifact, Identifier, RenderContext, ScaffoldProject, Template,
        TemplateKey, TemplateOrigin, WriteMode,
    };
    pub use crate::error::{PipegenError, PipegenResult};
}
