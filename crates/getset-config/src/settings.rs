//! getset configuration file (`getset.toml`) parsing and validation.
//!
//! ```toml
//! template = "CamelCaseFluent"
//! ignore_visibility = false
//! type_hint_ignore = ["mixed", "array"]
//! setter_before_getter = false
//! use_tabs = true
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use getset_core::generate::DEFAULT_TEMPLATE;
use getset_core::{GenerateOptions, TemplateError, TemplateRegistry};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::templates::UserTemplate;

/// Name of the configuration file.
pub const CONFIG_FILE: &str = "getset.toml";

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("template '{template}' extends unknown built-in '{base}'")]
    UnknownBase { template: String, base: String },

    #[error("template '{0}' is missing '{1}' and has no base")]
    IncompleteTemplate(String, &'static str),

    #[error(transparent)]
    Template(#[from] TemplateError),
}

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

fn default_use_tabs() -> bool {
    true
}

/// The complete getset.toml configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Active template name.
    #[serde(default = "default_template")]
    pub template: String,

    /// Treat every member as public.
    #[serde(default)]
    pub ignore_visibility: bool,

    /// Types never emitted as setter type hints.
    #[serde(default)]
    pub type_hint_ignore: Vec<String>,

    /// Emit setters before getters when generating both.
    #[serde(default)]
    pub setter_before_getter: bool,

    /// Indent generated code with tabs instead of four spaces.
    #[serde(default = "default_use_tabs")]
    pub use_tabs: bool,

    /// User-defined templates.
    #[serde(default)]
    pub templates: BTreeMap<String, UserTemplate>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            template: default_template(),
            ignore_visibility: false,
            type_hint_ignore: Vec::new(),
            setter_before_getter: false,
            use_tabs: default_use_tabs(),
            templates: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Load settings from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid, a user template is
    /// incomplete, or the active template is not registered.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Find the nearest `getset.toml` by searching upward from a directory.
    pub fn find(start: impl AsRef<Path>) -> Option<PathBuf> {
        let mut current = start.as_ref().to_path_buf();

        loop {
            let candidate = current.join(CONFIG_FILE);
            if candidate.is_file() {
                return Some(candidate);
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return None,
            }
        }
    }

    /// Load the nearest configuration above `start`, or the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file exists but is invalid.
    pub fn discover(start: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::find(start) {
            Some(path) => {
                tracing::debug!("loading configuration from {}", path.display());
                Self::from_path(path)
            }
            None => {
                tracing::debug!("no {CONFIG_FILE} found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validate the settings.
    fn validate(&self) -> Result<(), ConfigError> {
        self.registry()?.get(&self.template)?;
        Ok(())
    }

    /// Build the template registry: built-ins first, then user templates.
    ///
    /// A user template with a built-in's name replaces it. User templates
    /// referencing an unknown placeholder are rejected.
    pub fn registry(&self) -> Result<TemplateRegistry, ConfigError> {
        let mut registry = TemplateRegistry::with_builtins(self.use_tabs);

        for (name, user) in &self.templates {
            let template = user.build(name)?;
            template.validate()?;
            registry.register(if self.use_tabs {
                template.indent_with_tabs()
            } else {
                template
            });
        }

        Ok(registry)
    }

    /// Options for a generation request.
    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            template: self.template.clone(),
            ignore_visibility: self.ignore_visibility,
            type_hint_ignore: self.type_hint_ignore.clone(),
            setter_before_getter: self.setter_before_getter,
        }
    }

    /// Serialize the settings to a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use getset_core::NamingStyle;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parse_empty_config() {
        let settings = Settings::parse("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.template, "PSR2");
        assert!(settings.use_tabs);
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
template = "SnakeCase"
ignore_visibility = true
type_hint_ignore = ["mixed", "array"]
setter_before_getter = true
use_tabs = false
"#;
        let settings = Settings::parse(toml).unwrap();
        let options = settings.generate_options();
        assert_eq!(options.template, "SnakeCase");
        assert!(options.ignore_visibility);
        assert_eq!(options.type_hint_ignore, vec!["mixed", "array"]);
        assert!(options.setter_before_getter);
        assert!(!settings.use_tabs);
    }

    #[test]
    fn parse_unknown_field() {
        let result = Settings::parse("templte = \"PSR2\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn parse_unknown_active_template() {
        let result = Settings::parse("template = \"Zend\"\n");
        assert!(matches!(
            result,
            Err(ConfigError::Template(TemplateError::UnknownTemplate { .. }))
        ));
    }

    #[test]
    fn parse_user_template() {
        let toml = r#"
template = "Short"

[templates.Short]
style = "snakeCase"
getter = """
    public function {{getterPrefix}}_{{normalizedName}}() { return $this->{{name}}; }
"""
setter = """
    public function set_{{normalizedName}}({{typeHint}} ${{param}}) { $this->{{name}} = ${{param}}; }
"""
"#;
        let settings = Settings::parse(toml).unwrap();
        let registry = settings.registry().unwrap();
        assert_eq!(registry.len(), 6);

        let template = registry.get("Short").unwrap();
        assert_eq!(template.style, NamingStyle::SnakeCase);
        assert!(template.getter.starts_with("\tpublic function"));
    }

    #[test]
    fn parse_user_template_with_unknown_placeholder() {
        let toml = r#"
[templates.Typo]
base = "CamelCase"
setter = "set{{normalizedName}}({{type-hint}} ${{param}})"
"#;
        let result = Settings::parse(toml);
        match result {
            Err(ConfigError::Template(TemplateError::MissingKey { template, key })) => {
                assert_eq!(template, "Typo");
                assert_eq!(key, "type-hint");
            }
            other => panic!("expected MissingKey, got {other:?}"),
        }
    }

    #[test]
    fn parse_user_template_with_unknown_base() {
        let toml = r#"
[templates.Broken]
base = "Symfony"
"#;
        let result = Settings::parse(toml);
        assert!(matches!(result, Err(ConfigError::UnknownBase { .. })));
    }

    #[test]
    fn find_config_upward() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("src/Entity");
        fs::create_dir_all(&nested).unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "template = \"CamelCase\"\n").unwrap();

        let found = Settings::find(&nested).unwrap();
        assert_eq!(found, tmp.path().join(CONFIG_FILE));

        let settings = Settings::discover(&nested).unwrap();
        assert_eq!(settings.template, "CamelCase");
    }

    #[test]
    fn discover_without_config_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        // A config above the temp dir would leak in; only assert when none exists.
        if Settings::find(tmp.path()).is_none() {
            assert_eq!(Settings::discover(tmp.path()).unwrap(), Settings::default());
        }
    }

    #[test]
    fn roundtrip_toml() {
        let mut settings = Settings::default();
        settings.type_hint_ignore.push("mixed".to_string());
        let text = settings.to_toml_string().unwrap();
        assert_eq!(Settings::parse(&text).unwrap(), settings);
    }
}
