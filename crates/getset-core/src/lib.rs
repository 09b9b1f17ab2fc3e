//! Getset Core - accessor generation engine for PHP classes
//!
//! This crate provides the core functionality:
//! - Doc: docblock parsing (`/** ... */` description and `@tag value` pairs)
//! - Extract: line-oriented scan for member declarations and their docblocks
//! - Member: normalized facts about one declaration and its derived names
//! - Naming: prefix stripping and re-casing of raw member names
//! - Template: accessor blueprints, built-in set and registry
//! - Render: placeholder substitution
//! - Generate: getter/setter orchestration over a source buffer

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Docblock model
pub mod doc;

/// Member declaration extraction
pub mod extract;

/// Member descriptor
pub mod member;

/// Naming-convention normalization
pub mod naming;

/// Templates and the template registry
pub mod template;

/// Placeholder substitution
pub mod render;

/// Generation orchestration
pub mod generate;

/// Source buffer helpers
pub mod source;

pub use doc::DocComment;
pub use extract::{Declaration, Extraction, Extractor, SkippedDeclaration};
pub use generate::{AccessorKind, GenerateError, GenerateOptions, Generated, Generator, Selection};
pub use member::{Member, Visibility};
pub use naming::NamingStyle;
pub use render::Renderer;
pub use source::{insertion_offset, is_php_source, Source};
pub use template::{BuiltinTemplate, Template, TemplateError, TemplateRegistry};
