//! Accessor templates
//!
//! A template is a pair of text blueprints (getter and setter) with
//! `{{key}}` placeholders, bound to one naming style.

mod builtin;
mod registry;

pub use builtin::BuiltinTemplate;
pub use registry::TemplateRegistry;

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::naming::NamingStyle;
use crate::render::PLACEHOLDERS;

/// Errors raised while resolving or rendering templates
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unknown template '{name}', available: {available}")]
    UnknownTemplate { name: String, available: String },

    #[error("template '{template}' references unknown placeholder '{{{{{key}}}}}'")]
    MissingKey { template: String, key: String },
}

/// Matches any `{{ ... }}` span; the key is the trimmed inner text
pub(crate) fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\{\{\s*([^{}]*?)\s*\}\}").expect("placeholder pattern is valid")
    })
}

/// A named pair of accessor blueprints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Registry key
    pub name: String,
    /// Naming style of generated method names
    pub style: NamingStyle,
    /// Getter blueprint
    pub getter: String,
    /// Setter blueprint
    pub setter: String,
    /// Whether setters of private members are named `_set...`
    pub prefix_private_setters: bool,
}

impl Template {
    /// Create a template; private setters get the `_` prefix by default
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        style: NamingStyle,
        getter: impl Into<String>,
        setter: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            style,
            getter: getter.into(),
            setter: setter.into(),
            prefix_private_setters: true,
        }
    }

    /// Set whether private setters get the `_` prefix
    #[must_use]
    pub fn with_private_setter_prefix(mut self, enabled: bool) -> Self {
        self.prefix_private_setters = enabled;
        self
    }

    /// Rewrite four-space indentation as tabs in both blueprints
    #[must_use]
    pub fn indent_with_tabs(mut self) -> Self {
        self.getter = self.getter.replace("    ", "\t");
        self.setter = self.setter.replace("    ", "\t");
        self
    }

    /// Placeholder keys referenced by either blueprint, in order of appearance
    pub fn placeholders(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for body in [&self.getter, &self.setter] {
            for caps in placeholder_regex().captures_iter(body) {
                if let Some(key) = caps.get(1) {
                    if !keys.contains(&key.as_str()) {
                        keys.push(key.as_str());
                    }
                }
            }
        }
        keys
    }

    /// Check that every placeholder is one the renderer provides.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::MissingKey` for the first unknown key.
    pub fn validate(&self) -> Result<(), TemplateError> {
        match self
            .placeholders()
            .into_iter()
            .find(|key| !PLACEHOLDERS.contains(key))
        {
            Some(key) => Err(TemplateError::MissingKey {
                template: self.name.clone(),
                key: key.to_string(),
            }),
            None => Ok(()),
        }
    }
}
