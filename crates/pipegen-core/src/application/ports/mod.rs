//! Ports the application layer depends on.
//!
//! Only driven ports exist: the CLI calls the services directly.

pub mod output;

pub use output::{Filesystem, TemplateRenderer, TemplateStore};

#[cfg(test)]
pub use output::{MockFilesystem, MockTemplateRenderer, MockTemplateStore};
