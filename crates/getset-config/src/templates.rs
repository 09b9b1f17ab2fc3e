//! User-defined templates.
//!
//! ```toml
//! [templates.Doctrine]
//! base = "CamelCaseFluent"
//! getter = """
//!     public function get{{normalizedName}}(): {{type}}
//!     {
//!         return $this->{{name}};
//!     }
//! """
//! ```
//!
//! A user template either starts from a built-in (`base`) and overrides
//! parts of it, or spells out `style`, `getter` and `setter` itself.

use getset_core::{BuiltinTemplate, NamingStyle, Template};
use serde::{Deserialize, Serialize};

use crate::settings::ConfigError;

/// A `[templates.<name>]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserTemplate {
    /// Built-in template to start from.
    #[serde(default)]
    pub base: Option<String>,

    /// Naming style (`camelCase` or `snakeCase`).
    #[serde(default)]
    pub style: Option<NamingStyle>,

    /// Getter blueprint.
    #[serde(default)]
    pub getter: Option<String>,

    /// Setter blueprint.
    #[serde(default)]
    pub setter: Option<String>,

    /// Whether setters of private members are named `_set...`.
    #[serde(default)]
    pub prefix_private_setters: Option<bool>,
}

impl UserTemplate {
    /// Build the template registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base` is not a built-in, or if a template
    /// without `base` is missing its style or one of its bodies.
    pub fn build(&self, name: &str) -> Result<Template, ConfigError> {
        let base = match &self.base {
            Some(base) => Some(BuiltinTemplate::from_name(base).ok_or_else(|| {
                ConfigError::UnknownBase {
                    template: name.to_string(),
                    base: base.clone(),
                }
            })?),
            None => None,
        };
        let inherited = base.map(|b| b.template());

        let style = self
            .style
            .or(inherited.as_ref().map(|t| t.style))
            .ok_or_else(|| ConfigError::IncompleteTemplate(name.to_string(), "style"))?;

        let getter = self
            .getter
            .clone()
            .or(inherited.as_ref().map(|t| t.getter.clone()))
            .ok_or_else(|| ConfigError::IncompleteTemplate(name.to_string(), "getter"))?;

        let setter = self
            .setter
            .clone()
            .or(inherited.as_ref().map(|t| t.setter.clone()))
            .ok_or_else(|| ConfigError::IncompleteTemplate(name.to_string(), "setter"))?;

        let prefix_private_setters = self
            .prefix_private_setters
            .or(inherited.as_ref().map(|t| t.prefix_private_setters))
            .unwrap_or(true);

        Ok(Template::new(name, style, getter, setter)
            .with_private_setter_prefix(prefix_private_setters))
    }
}
