//! In-memory template store with built-in templates.

use std::{
    collections::BTreeMap,
    path::Path,
    sync::{Arc, RwLock},
};

use tracing::{debug, info};

use pipegen_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{Template, TemplateKey},
    error::PipegenResult,
};

use crate::{builtin_templates, template_loader::DirectoryTemplateLoader};

/// Thread-safe in-memory template store, keyed by template key.
///
/// Later inserts replace earlier ones, which is how a user template
/// directory overrides the built-ins.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<BTreeMap<TemplateKey, Template>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with built-in templates loaded.
    pub fn with_builtin() -> PipegenResult<Self> {
        let store = Self::new();
        for template in builtin_templates::all_templates() {
            store.insert(template)?;
        }
        Ok(store)
    }

    /// Built-ins, overlaid with every template found in `dir`.
    pub fn with_overrides(dir: &Path) -> PipegenResult<Self> {
        let store = Self::with_builtin()?;
        let loaded = DirectoryTemplateLoader::new(dir).load_all()?;
        let count = loaded.len();
        for template in loaded {
            debug!(key = %template.key, origin = %template.origin, "Overriding template");
            store.insert(template)?;
        }
        info!(dir = %dir.display(), count, "Loaded user templates");
        Ok(store)
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TemplateStore for InMemoryStore {
    fn get(&self, key: &TemplateKey) -> PipegenResult<Template> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.get(key).cloned().ok_or_else(|| {
            ApplicationError::TemplateResolution {
                reason: format!("Template not found: {key}"),
            }
            .into()
        })
    }

    fn list(&self) -> PipegenResult<Vec<Template>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.values().cloned().collect())
    }

    fn insert(&self, template: Template) -> PipegenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.insert(template.key.clone(), template);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipegen_core::domain::{Archetype, TemplateOrigin};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn builtin_store_serves_every_archetype() {
        let store = InMemoryStore::with_builtin().unwrap();
        assert_eq!(store.len(), 3);
        for archetype in Archetype::ALL {
            let template = store.get(&TemplateKey::from(archetype)).unwrap();
            assert_eq!(template.origin, TemplateOrigin::Builtin);
        }
    }

    #[test]
    fn missing_key_is_resolution_error() {
        let store = InMemoryStore::new();
        assert!(store.is_empty());
        let err = store.get(&TemplateKey::new("task.py.j2")).unwrap_err();
        assert!(err.to_string().contains("task.py.j2"));
    }

    #[test]
    fn user_directory_overrides_builtin_by_key() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("task.py.j2"), "custom {{ class_name }}").unwrap();
        fs::write(dir.path().join("pipeline.py.j2"), "extra").unwrap();

        let store = InMemoryStore::with_overrides(dir.path()).unwrap();

        let task = store.get(&TemplateKey::new("task.py.j2")).unwrap();
        assert_eq!(task.body, "custom {{ class_name }}");
        assert_eq!(
            task.origin,
            TemplateOrigin::File(dir.path().join("task.py.j2"))
        );

        let source = store.get(&TemplateKey::from(Archetype::Source)).unwrap();
        assert_eq!(source.origin, TemplateOrigin::Builtin);

        assert_eq!(store.len(), 4);
    }

    #[test]
    fn list_is_ordered_by_key() {
        let store = InMemoryStore::with_builtin().unwrap();
        let keys: Vec<String> = store
            .list()
            .unwrap()
            .into_iter()
            .map(|t| t.key.to_string())
            .collect();
        assert_eq!(keys, ["simple_task.py.j2", "source.py.j2", "task.py.j2"]);
    }
}
