//! Application layer: services that run the use cases over the ports.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{ScaffoldService, TaskOutcome, TaskRequest, TemplateInfo, TemplateService};

pub use ports::{Filesystem, TemplateRenderer, TemplateStore};

pub use error::ApplicationError;
