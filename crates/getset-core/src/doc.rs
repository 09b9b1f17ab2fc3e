//! Docblock model
//!
//! A docblock is the `/** ... */` comment directly above a member
//! declaration. Only two things are kept: the free-text description and
//! the `@tag value` annotations.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

/// Parsed documentation comment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocComment {
    /// Description lines joined with `\n`, decoration removed
    pub description: String,
    /// Tag name (without `@`) to tag value; the last occurrence wins
    pub tags: HashMap<String, String>,
}

fn tag_regex() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"^@(\w+) (.*)$").expect("tag pattern is valid"))
}

impl DocComment {
    /// Parse the inner lines of a docblock.
    ///
    /// Each line is stripped of comment decoration (`/**`, `*/`, leading
    /// `*`) and trailing periods. Lines starting with `@` become tags;
    /// a tag line without a value is dropped with a warning.
    pub fn parse(text: &str) -> Self {
        let mut doc = DocComment::default();
        let mut description = Vec::new();

        for raw in text.split('\n') {
            let line = raw
                .trim_matches(|c| matches!(c, ' ' | '\t' | '\r' | '*' | '/'))
                .trim_end_matches('.');

            if line.starts_with('@') {
                match tag_regex().captures(line) {
                    Some(caps) => {
                        let name = caps[1].to_string();
                        let value = caps[2].trim().to_string();
                        doc.tags.insert(name, value);
                    }
                    None => tracing::warn!("could not parse docblock line: {line}"),
                }
            } else if !line.is_empty() {
                description.push(line);
            }
        }

        doc.description = description.join("\n");
        doc
    }

    /// Check whether a tag is present
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.contains_key(name)
    }

    /// Get a tag value
    pub fn tag(&self, name: &str) -> Option<&str> {
        self.tags.get(name).map(String::as_str)
    }

    /// Check whether there is any description text
    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }

    /// Check if the docblock carries nothing at all
    pub fn is_empty(&self) -> bool {
        self.description.is_empty() && self.tags.is_empty()
    }
}
