//! Generation orchestration
//!
//! Ties the pipeline together: extract declarations, build members against
//! the active template, skip accessors that already exist, render the rest.
//! Rendering completes before anything is returned, so a failing request
//! never yields partial output.

use std::collections::HashSet;

use thiserror::Error;

use crate::extract::{Extraction, Extractor, SkippedDeclaration};
use crate::member::Member;
use crate::render::Renderer;
use crate::source::Source;
use crate::template::{Template, TemplateError, TemplateRegistry};

/// Template used when none is configured
pub const DEFAULT_TEMPLATE: &str = "PSR2";

/// Errors that abort a generation request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Per-request generation settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Active template name
    pub template: String,
    /// Treat every member as public
    pub ignore_visibility: bool,
    /// Types never emitted as parameter type hints
    pub type_hint_ignore: Vec<String>,
    /// Emit the setter before the getter in accessor pairs
    pub setter_before_getter: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            ignore_visibility: false,
            type_hint_ignore: Vec::new(),
            setter_before_getter: false,
        }
    }
}

/// Which accessors to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorKind {
    Getters,
    Setters,
    /// Getter and setter pairs
    Both,
}

/// Which members to generate accessors for
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    /// Only the member with this raw name
    Named(String),
}

impl Selection {
    pub fn matches(&self, member: &Member) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => member.name() == name,
        }
    }
}

/// Output of one generation request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generated {
    /// Accessor source text, ready for insertion
    pub code: String,
    /// Method names rendered into `code`
    pub emitted: Vec<String>,
    /// Method names skipped because they already exist
    pub existing: Vec<String>,
    /// Declarations skipped because no name could be extracted
    pub skipped: Vec<SkippedDeclaration>,
    /// Number of members matching the selection
    pub selected: usize,
}

impl Generated {
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}

/// Generates accessors with one template
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    template: &'a Template,
    options: &'a GenerateOptions,
}

impl<'a> Generator<'a> {
    /// Resolve the configured template.
    ///
    /// # Errors
    ///
    /// Fails if `options.template` is not registered.
    pub fn new(
        registry: &'a TemplateRegistry,
        options: &'a GenerateOptions,
    ) -> Result<Self, GenerateError> {
        let template = registry.get(&options.template)?;
        Ok(Self { template, options })
    }

    /// Build members for every extracted declaration
    pub fn members(&self, extraction: &Extraction) -> Vec<Member> {
        extraction
            .declarations
            .iter()
            .map(|d| Member::new(d, self.template, self.options))
            .collect()
    }

    /// `(name, description)` pairs for a member picker
    pub fn selection_items(&self, source: &str) -> Vec<(String, String)> {
        self.members(&Extractor::extract(source))
            .into_iter()
            .map(|m| (m.name().to_string(), m.description().to_string()))
            .collect()
    }

    /// Render the getter, or nothing if it already exists in `source`
    pub fn generate_getter(
        &self,
        member: &Member,
        source: &Source<'_>,
    ) -> Result<String, GenerateError> {
        let name = member.getter_function_name();
        if source.has_function(&name) {
            tracing::debug!("function {name} already present, skipping");
            return Ok(String::new());
        }
        Ok(Renderer::new(self.template).render_getter(member)?)
    }

    /// Render the setter, or nothing if it already exists in `source`
    pub fn generate_setter(
        &self,
        member: &Member,
        source: &Source<'_>,
    ) -> Result<String, GenerateError> {
        let name = member.setter_function_name();
        if source.has_function(&name) {
            tracing::debug!("function {name} already present, skipping");
            return Ok(String::new());
        }
        Ok(Renderer::new(self.template).render_setter(member)?)
    }

    /// Generate accessors for the selected members of `source`.
    pub fn generate(
        &self,
        source: &str,
        kind: AccessorKind,
        selection: &Selection,
    ) -> Result<Generated, GenerateError> {
        let extraction = Extractor::extract(source);
        let members: Vec<Member> = self
            .members(&extraction)
            .into_iter()
            .filter(|m| selection.matches(m))
            .collect();

        let mut batch = Batch::new(Source::new(source), Renderer::new(self.template));
        for member in &members {
            match kind {
                AccessorKind::Getters => batch.getter(member)?,
                AccessorKind::Setters => batch.setter(member)?,
                AccessorKind::Both => batch.pair(member, self.options.setter_before_getter)?,
            }
        }

        if let Selection::Named(name) = selection {
            if members.is_empty() {
                tracing::warn!("no member named '{name}'");
            }
        }

        Ok(Generated {
            code: batch.code,
            emitted: batch.emitted,
            existing: batch.existing,
            skipped: extraction.skipped,
            selected: members.len(),
        })
    }

    /// Getter/setter pairs for `members`, concatenated in configured order
    pub fn generate_getters_setters(
        &self,
        members: &[Member],
        source: &str,
    ) -> Result<String, GenerateError> {
        let mut batch = Batch::new(Source::new(source), Renderer::new(self.template));
        for member in members {
            batch.pair(member, self.options.setter_before_getter)?;
        }
        Ok(batch.code)
    }
}

/// Accumulates accessors of one request; a name is emitted at most once
struct Batch<'a> {
    source: Source<'a>,
    renderer: Renderer<'a>,
    seen: HashSet<String>,
    code: String,
    emitted: Vec<String>,
    existing: Vec<String>,
}

impl<'a> Batch<'a> {
    fn new(source: Source<'a>, renderer: Renderer<'a>) -> Self {
        Self {
            source,
            renderer,
            seen: HashSet::new(),
            code: String::new(),
            emitted: Vec::new(),
            existing: Vec::new(),
        }
    }

    /// Whether `name` still needs to be generated
    fn claim(&mut self, name: String) -> bool {
        if self.source.has_function(&name) {
            tracing::debug!("function {name} already present, skipping");
            self.existing.push(name);
            return false;
        }
        if !self.seen.insert(name.clone()) {
            tracing::debug!("function {name} already generated in this batch, skipping");
            return false;
        }
        self.emitted.push(name);
        true
    }

    fn getter(&mut self, member: &Member) -> Result<(), TemplateError> {
        if self.claim(member.getter_function_name()) {
            self.code.push_str(&self.renderer.render_getter(member)?);
        }
        Ok(())
    }

    fn setter(&mut self, member: &Member) -> Result<(), TemplateError> {
        if self.claim(member.setter_function_name()) {
            self.code.push_str(&self.renderer.render_setter(member)?);
        }
        Ok(())
    }

    fn pair(&mut self, member: &Member, setter_first: bool) -> Result<(), TemplateError> {
        if setter_first {
            self.setter(member)?;
            self.getter(member)
        } else {
            self.getter(member)?;
            self.setter(member)
        }
    }
}
