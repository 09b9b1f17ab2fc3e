//! Member descriptor
//!
//! A [`Member`] holds the normalized facts about one declaration and derives
//! the names that accessor templates need. It is built once per
//! (declaration, template) pair and is immutable afterwards.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::extract::Declaration;
use crate::generate::GenerateOptions;
use crate::naming::{self, NamingStyle};
use crate::template::Template;

/// Type used when a declaration has no `@var` tag
pub const DEFAULT_TYPE: &str = "mixed";

/// Member visibility modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    /// Returns the modifier keyword.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "public" => Ok(Self::Public),
            "protected" => Ok(Self::Protected),
            "private" => Ok(Self::Private),
            _ => Err(format!("unknown visibility '{s}'")),
        }
    }
}

/// Normalized facts about one member declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    name: String,
    visibility: Visibility,
    #[serde(rename = "type")]
    declared_type: String,
    description: String,
    #[serde(skip)]
    style: NamingStyle,
    #[serde(skip)]
    prefix_private_setters: bool,
    #[serde(skip)]
    type_hint: String,
    line: usize,
}

impl Member {
    /// Build a member from an extracted declaration.
    ///
    /// The naming style and setter-prefix rule are copied from `template`;
    /// `options` decides the visibility override and the type-hint
    /// ignore-list.
    pub fn new(declaration: &Declaration, template: &Template, options: &GenerateOptions) -> Self {
        let name = declaration.name.clone();

        let visibility = if options.ignore_visibility {
            Visibility::Public
        } else {
            declaration.visibility
        };

        let doc = declaration.doc.as_ref();
        let declared_type = doc
            .and_then(|d| d.tag("var"))
            .unwrap_or(DEFAULT_TYPE)
            .to_string();

        let description = match doc {
            Some(d) if d.has_description() => d.description.clone(),
            _ => format!("value of {name}"),
        };

        let type_hint = type_hint_for(&declared_type, &options.type_hint_ignore);

        Self {
            name,
            visibility,
            declared_type,
            description,
            style: template.style,
            prefix_private_setters: template.prefix_private_setters,
            type_hint,
            line: declaration.line,
        }
    }

    /// Raw name as declared, without the `$` sigil
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Setter parameter name
    pub fn param(&self) -> &str {
        naming::param_name(&self.name)
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// `_` for private members, empty otherwise
    pub fn visibility_prefix(&self) -> &'static str {
        if self.visibility == Visibility::Private {
            "_"
        } else {
            ""
        }
    }

    pub fn declared_type(&self) -> &str {
        &self.declared_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn style(&self) -> NamingStyle {
        self.style
    }

    /// 1-based line of the declaration in the scanned source
    pub fn line(&self) -> usize {
        self.line
    }

    /// Base name shared by the getter and setter
    pub fn normalized_name(&self) -> String {
        naming::normalize(&self.name, self.style)
    }

    pub fn human_name(&self) -> String {
        naming::human_name(&self.name, self.style)
    }

    /// `is` for boolean types, `get` otherwise
    pub fn getter_prefix(&self) -> &'static str {
        if self.declared_type.contains("bool") {
            "is"
        } else {
            "get"
        }
    }

    pub fn setter_prefix(&self) -> &'static str {
        "set"
    }

    pub fn getter_function_name(&self) -> String {
        format!(
            "{}{}{}",
            self.getter_prefix(),
            self.style.separator(),
            self.normalized_name()
        )
    }

    pub fn setter_function_name(&self) -> String {
        let visibility_prefix = if self.prefix_private_setters {
            self.visibility_prefix()
        } else {
            ""
        };
        format!(
            "{}{}{}{}",
            visibility_prefix,
            self.setter_prefix(),
            self.style.separator(),
            self.normalized_name()
        )
    }

    /// Type emitted in the setter's parameter position; may be empty
    pub fn type_hint(&self) -> &str {
        &self.type_hint
    }
}

fn type_hint_for(declared_type: &str, ignore: &[String]) -> String {
    if declared_type.is_empty() || ignore.iter().any(|t| t == declared_type) {
        return String::new();
    }

    if declared_type.contains(' ') || declared_type.contains('|') {
        tracing::warn!("'{declared_type}' is more than one type, switching to no type hint");
        return String::new();
    }

    declared_type.to_string()
}
