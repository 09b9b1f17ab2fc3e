//! Source buffer helpers
//!
//! Textual checks over a PHP buffer. None of these parse PHP; they are the
//! same line-level heuristics the extractor relies on.

use regex::{Regex, RegexBuilder};

/// A PHP source buffer
#[derive(Debug, Clone, Copy)]
pub struct Source<'a> {
    text: &'a str,
}

impl<'a> Source<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Whether a function named `name` is declared anywhere in the buffer.
    ///
    /// This is a presence test for `function name(`; a method of the same
    /// name in another class of the same file also counts.
    pub fn has_function(&self, name: &str) -> bool {
        function_regex(name).is_some_and(|re| re.is_match(self.text))
    }
}

fn function_regex(name: &str) -> Option<Regex> {
    let pattern = format!(r"\bfunction\s+&?{}\s*\(", regex::escape(name));
    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!("cannot search for function '{name}': {e}");
            None
        }
    }
}

/// Whether the buffer looks like PHP (contains an opening `<?php` tag)
pub fn is_php_source(text: &str) -> bool {
    text.contains("<?php")
}

/// Byte offset at which generated accessors are inserted: the last `}`
/// after the first `{`, i.e. just before the closing brace of the class.
pub fn insertion_offset(text: &str) -> Option<usize> {
    let open = text.find('{')?;
    text[open + 1..].rfind('}').map(|pos| open + 1 + pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASS: &str = "<?php\n\nclass User\n{\n    private $name;\n\n    public function getName()\n    {\n        return $this->name;\n    }\n}\n";

    #[test]
    fn test_has_function() {
        let source = Source::new(CLASS);
        assert!(source.has_function("getName"));
        assert!(source.has_function("getname"));
        assert!(!source.has_function("setName"));
        assert!(!source.has_function("Name"));
    }

    #[test]
    fn test_has_function_by_reference_and_spacing() {
        let source = Source::new("public function &getItems ()\n");
        assert!(source.has_function("getItems"));
    }

    #[test]
    fn test_is_php_source() {
        assert!(is_php_source(CLASS));
        assert!(!is_php_source("class User {}"));
    }

    #[test]
    fn test_insertion_offset_before_last_brace() {
        let offset = insertion_offset(CLASS).unwrap();
        assert_eq!(&CLASS[offset..], "}\n");
    }

    #[test]
    fn test_insertion_offset_without_braces() {
        assert_eq!(insertion_offset("<?php\n$x = 1;\n"), None);
        assert_eq!(insertion_offset("<?php\nclass A {"), None);
    }
}
