//! Naming-convention normalization
//!
//! Raw member names carry conventional prefixes (`_private`, Hungarian
//! `aList`, `_aList`). These helpers strip them and re-case the remainder
//! into the form used inside accessor method names.

use std::fmt;
use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// Naming convention targeted by a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NamingStyle {
    /// `getFooBar`
    #[default]
    #[serde(rename = "camelCase")]
    CamelCase,
    /// `get_foo_bar`
    #[serde(rename = "snakeCase")]
    SnakeCase,
}

impl NamingStyle {
    /// Returns the style as it is spelled in configuration.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CamelCase => "camelCase",
            Self::SnakeCase => "snakeCase",
        }
    }

    /// Separator placed between an accessor verb and the normalized name
    #[must_use]
    pub fn separator(&self) -> &'static str {
        match self {
            Self::CamelCase => "",
            Self::SnakeCase => "_",
        }
    }
}

impl fmt::Display for NamingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn underscore_letter_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"_([a-z])").expect("underscore pattern is valid"))
}

fn word_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:[^_a-z]{0,2})[^_A-Z]+").expect("word pattern is valid"))
}

/// Drop a single leading underscore (setter parameter name).
pub fn param_name(name: &str) -> &str {
    name.strip_prefix('_').unwrap_or(name)
}

/// Strip one recognized prefix, checked in priority order:
///
/// 1. `_aFoo` -> `Foo`
/// 2. `aFoo` -> `Foo`
/// 3. `_foo` -> `foo`, `_Foo` -> `Foo`
///
/// Names too short for a rule simply don't match it.
pub fn strip_prefix(name: &str) -> &str {
    let mut chars = name.char_indices();
    let first = chars.next();
    let second = chars.next();
    let third = chars.next();

    match (first, second, third) {
        (Some((_, '_')), Some((_, b)), Some((at, c))) if b.is_lowercase() && c.is_uppercase() => {
            &name[at..]
        }
        (Some((_, a)), Some((at, b)), _) if a.is_lowercase() && b.is_uppercase() => &name[at..],
        (Some((_, '_')), _, _) => &name[1..],
        _ => name,
    }
}

/// Normalized base name used in `get`/`set` method names.
pub fn normalize(name: &str, style: NamingStyle) -> String {
    let stripped = strip_prefix(name);

    match style {
        NamingStyle::CamelCase => {
            let joined = underscore_letter_regex()
                .replace_all(stripped, |caps: &Captures| caps[1].to_uppercase());
            let mut chars = joined.chars();
            let capitalized = match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            };
            capitalized.replace('_', "")
        }
        NamingStyle::SnakeCase => stripped.to_string(),
    }
}

/// Words of the raw name, space separated and lowercased for camelCase.
pub fn human_name(name: &str, style: NamingStyle) -> String {
    match style {
        NamingStyle::CamelCase => word_regex()
            .find_iter(name)
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase(),
        NamingStyle::SnakeCase => name.replace('_', " "),
    }
}
