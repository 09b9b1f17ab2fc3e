//! Template registry
//!
//! Built once at startup (built-ins first, then user templates) and only
//! read afterwards. Lookups of unknown names fail loudly.

use std::collections::BTreeMap;

use super::{BuiltinTemplate, Template, TemplateError};

/// Name-to-template mapping
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, Template>,
}

impl TemplateRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in template
    #[must_use]
    pub fn with_builtins(use_tabs: bool) -> Self {
        let mut registry = Self::new();
        for builtin in BuiltinTemplate::ALL {
            let template = builtin.template();
            registry.register(if use_tabs {
                template.indent_with_tabs()
            } else {
                template
            });
        }
        registry
    }

    /// Register a template under its name, replacing any previous entry
    pub fn register(&mut self, template: Template) {
        let name = template.name.clone();
        if self.templates.insert(name.clone(), template).is_some() {
            tracing::debug!("replaced template '{name}'");
        } else {
            tracing::debug!("registered template '{name}'");
        }
    }

    /// Look up a template by name
    pub fn get(&self, name: &str) -> Result<&Template, TemplateError> {
        self.templates
            .get(name)
            .ok_or_else(|| TemplateError::UnknownTemplate {
                name: name.to_string(),
                available: self.names().join(", "),
            })
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.templates.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.values()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
