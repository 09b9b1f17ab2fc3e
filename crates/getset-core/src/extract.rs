//! Member declaration extractor - scans source text for class members
//!
//! Declarations are found with a single line-oriented pattern: a visibility
//! modifier, up to two more tokens (type hints, `static`, `readonly`), then
//! a `$`-prefixed name. Each match is paired with the docblock directly
//! above it, if any.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::doc::DocComment;
use crate::member::Visibility;

fn declaration_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?im)^[ \t]*((?:private|public|protected)(?:[ \t]+[^\s$(]+){0,2}[ \t]*\$[^\s=;|]*[ \t=;|].*?)[ \t]*\r?$",
        )
        .expect("declaration pattern is valid")
    })
}

fn name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$([A-Za-z_]\w*)").expect("name pattern is valid"))
}

fn visibility_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(public|protected|private)").expect("visibility pattern is valid")
    })
}

/// One member declaration found in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Name without the `$` sigil
    pub name: String,
    /// Modifier found at the start of the line
    pub visibility: Visibility,
    /// Docblock directly above the declaration
    pub doc: Option<DocComment>,
    /// 1-based line number
    pub line: usize,
    /// The matched declaration text, indentation removed
    pub text: String,
}

/// A line that matched the declaration pattern but has no usable name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedDeclaration {
    /// 1-based line number
    pub line: usize,
    /// The matched declaration text
    pub text: String,
}

/// Result of scanning a source buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Declarations in source order
    pub declarations: Vec<Declaration>,
    /// Malformed declarations, reported instead of generated
    pub skipped: Vec<SkippedDeclaration>,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

/// State of the backward docblock scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocScan {
    /// Walking up over blank lines, expecting `*/`
    SeekingClose,
    /// Inside a block, collecting lines until `/**`
    SeekingOpen,
}

/// Extracts member declarations from PHP source text
pub struct Extractor;

impl Extractor {
    /// Scan `source` for member declarations, in source order.
    pub fn extract(source: &str) -> Extraction {
        let mut extraction = Extraction::default();

        for caps in declaration_regex().captures_iter(source) {
            let (Some(whole), Some(decl)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let text = decl.as_str().to_string();
            let line = source[..whole.start()].matches('\n').count() + 1;

            let Some(name) = name_regex().captures(&text).map(|c| c[1].to_string()) else {
                tracing::warn!("skipping declaration without a usable name at line {line}: {text}");
                extraction.skipped.push(SkippedDeclaration { line, text });
                continue;
            };

            let visibility = visibility_regex()
                .captures(&text)
                .and_then(|c| c[1].parse().ok())
                .unwrap_or_default();

            let doc = Self::doc_block_before(source, whole.start()).map(|t| DocComment::parse(&t));

            extraction.declarations.push(Declaration {
                name,
                visibility,
                doc,
                line,
                text,
            });
        }

        extraction
    }

    /// Text of the docblock ending right above the line at `offset`.
    ///
    /// Walks upward skipping blank lines. The first non-blank line must be
    /// `*/` or a one-line `/** ... */`; lines are then collected until the
    /// `/**` opener, which may carry text of its own. Collected lines must
    /// start with `*`; any other line means no docblock.
    pub fn doc_block_before(source: &str, offset: usize) -> Option<String> {
        let before = &source[..offset];
        let mut state = DocScan::SeekingClose;
        let mut lines: Vec<&str> = Vec::new();

        for raw in before.rsplit('\n') {
            let line = raw.trim();
            let raw = raw.trim_end_matches('\r');

            match state {
                DocScan::SeekingClose => match line {
                    "" => {}
                    "*/" => state = DocScan::SeekingOpen,
                    _ if is_one_line_doc_block(line) => return Some(raw.to_string()),
                    _ => return None,
                },
                DocScan::SeekingOpen => match line {
                    "*/" => lines.clear(),
                    "" => {}
                    _ if line.starts_with("/**") => {
                        if line != "/**" {
                            lines.push(raw);
                        }
                        if lines.is_empty() {
                            return None;
                        }
                        lines.reverse();
                        return Some(lines.join("\n"));
                    }
                    _ if line.starts_with('*') => lines.push(raw),
                    _ => return None,
                },
            }
        }

        None
    }
}

/// `/** @var int */` on a single line
fn is_one_line_doc_block(line: &str) -> bool {
    line.len() > "/***/".len() && line.starts_with("/**") && line.ends_with("*/")
}
