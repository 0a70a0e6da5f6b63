//! Tera-backed renderer.
//!
//! Each render builds a throwaway `Tera` instance holding just the one
//! template. Templates are small and rendered once per invocation, so there
//! is nothing worth caching.

use std::error::Error as _;

use tera::{Context, Tera};
use tracing::{debug, instrument};

use pipegen_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{RenderContext, Template},
    error::PipegenResult,
};

/// Renderer for `.j2` templates using Tera's Jinja-like syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeraRenderer;

impl TeraRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Parse `template` without rendering it.
    pub fn check(&self, template: &Template) -> PipegenResult<()> {
        engine_with(template).map(|_| ())
    }
}

impl TemplateRenderer for TeraRenderer {
    #[instrument(skip_all, fields(key = %template.key))]
    fn render(&self, template: &Template, context: &RenderContext) -> PipegenResult<String> {
        let tera = engine_with(template)?;
        let context = Context::from_serialize(context).map_err(rendering_failed)?;

        let rendered = tera
            .render(template.key.as_str(), &context)
            .map_err(rendering_failed)?;

        debug!(bytes = rendered.len(), "Template rendered");
        Ok(rendered)
    }
}

fn engine_with(template: &Template) -> PipegenResult<Tera> {
    let mut tera = Tera::default();
    // Generated code is not HTML.
    tera.autoescape_on(vec![]);
    tera.add_raw_template(template.key.as_str(), &template.body)
        .map_err(rendering_failed)?;
    Ok(tera)
}

/// Tera nests the useful message in the source chain.
fn rendering_failed(e: tera::Error) -> pipegen_core::error::PipegenError {
    let mut reason = e.to_string();
    let mut source = e.source();
    while let Some(inner) = source {
        reason.push_str(": ");
        reason.push_str(&inner.to_string());
        source = inner.source();
    }
    ApplicationError::RenderingFailed { reason }.into()
}
