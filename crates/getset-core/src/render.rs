//! Placeholder substitution
//!
//! Template bodies reference member facts through `{{key}}` placeholders.
//! Every placeholder must resolve; an unknown key aborts the render.

use std::collections::HashMap;

use crate::member::Member;
use crate::template::{placeholder_regex, Template, TemplateError};

/// Placeholder keys every member provides
pub const PLACEHOLDERS: [&str; 11] = [
    "name",
    "param",
    "visibility",
    "visibilityPrefix",
    "type",
    "normalizedName",
    "description",
    "typeHint",
    "humanName",
    "getterPrefix",
    "setterPrefix",
];

/// Values available to a template body, keyed by placeholder name
pub type Substitutions = HashMap<&'static str, String>;

/// Build the placeholder values for a member
pub fn substitutions(member: &Member) -> Substitutions {
    HashMap::from([
        ("name", member.name().to_string()),
        ("param", member.param().to_string()),
        ("visibility", member.visibility().to_string()),
        ("visibilityPrefix", member.visibility_prefix().to_string()),
        ("type", member.declared_type().to_string()),
        ("normalizedName", member.normalized_name()),
        ("description", member.description().to_string()),
        ("typeHint", member.type_hint().to_string()),
        ("humanName", member.human_name()),
        ("getterPrefix", member.getter_prefix().to_string()),
        ("setterPrefix", member.setter_prefix().to_string()),
    ])
}

/// Substitute every placeholder of `body`.
///
/// `template` only names the template in the error.
pub fn render(template: &str, body: &str, values: &Substitutions) -> Result<String, TemplateError> {
    let mut output = String::with_capacity(body.len());
    let mut last = 0;

    for caps in placeholder_regex().captures_iter(body) {
        let (Some(whole), Some(key)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let value = values
            .get(key.as_str())
            .ok_or_else(|| TemplateError::MissingKey {
                template: template.to_string(),
                key: key.as_str().to_string(),
            })?;

        output.push_str(&body[last..whole.start()]);
        output.push_str(value);
        last = whole.end();
    }

    output.push_str(&body[last..]);
    Ok(output)
}

/// Renders accessors of one template
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    template: &'a Template,
}

impl<'a> Renderer<'a> {
    #[must_use]
    pub fn new(template: &'a Template) -> Self {
        Self { template }
    }

    pub fn render_getter(&self, member: &Member) -> Result<String, TemplateError> {
        render(&self.template.name, &self.template.getter, &substitutions(member))
    }

    /// Render the setter; an empty type hint leaves `( $x`, collapsed to `($x`
    pub fn render_setter(&self, member: &Member) -> Result<String, TemplateError> {
        let code = render(&self.template.name, &self.template.setter, &substitutions(member))?;
        Ok(code.replace("( ", "("))
    }
}
