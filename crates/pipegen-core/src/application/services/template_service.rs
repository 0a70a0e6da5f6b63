//! Template Service - template queries.
//!
//! Separated from ScaffoldService so listing templates needs no filesystem
//! or renderer.

use serde::Serialize;

use crate::{
    application::ports::TemplateStore,
    domain::{Archetype, Template, TemplateKey},
    error::PipegenResult,
};

/// Summary of one template for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub key: String,
    pub origin: String,
    /// `None` for templates that serve no archetype.
    pub archetype: Option<Archetype>,
}

impl From<&Template> for TemplateInfo {
    fn from(template: &Template) -> Self {
        Self {
            key: template.key.to_string(),
            origin: template.origin.to_string(),
            archetype: template.archetype(),
        }
    }
}

/// Service for template operations.
pub struct TemplateService {
    store: Box<dyn TemplateStore>,
}

impl TemplateService {
    pub fn new(store: Box<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// Get a template by key.
    pub fn get(&self, key: &TemplateKey) -> PipegenResult<Template> {
        self.store.get(key)
    }

    /// The template for an archetype.
    pub fn for_archetype(&self, archetype: Archetype) -> PipegenResult<Template> {
        self.store.get(&TemplateKey::from(archetype))
    }

    /// All templates, sorted by key.
    pub fn list(&self) -> PipegenResult<Vec<TemplateInfo>> {
        let mut infos: Vec<TemplateInfo> =
            self.store.list()?.iter().map(TemplateInfo::from).collect();
        infos.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(infos)
    }
}
