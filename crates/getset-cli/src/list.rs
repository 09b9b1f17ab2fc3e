//! Listing commands: `getset list` and `getset templates`.

use anyhow::{Context, Result};
use getset_core::{Extractor, Generator};
use std::path::Path;

use crate::input::{current_dir, load_settings, Session};
use crate::SourceArgs;

/// Print the members found in the input.
pub fn list_members(args: &SourceArgs, json: bool) -> Result<()> {
    let session = Session::open(args)?;
    let generator = Generator::new(&session.registry, &session.options)?;
    let extraction = Extractor::extract(&session.input.text);
    let members = generator.members(&extraction);

    if json {
        let value = serde_json::json!({
            "members": members,
            "skipped": extraction.skipped,
        });
        let text = serde_json::to_string_pretty(&value).context("Failed to serialize members")?;
        println!("{text}");
        return Ok(());
    }

    if members.is_empty() {
        println!("No members found in {}", session.input.display_name());
    }

    for (index, member) in members.iter().enumerate() {
        println!(
            "{:>3}  {:<10} {:<20} {:<12} {}",
            index,
            member.visibility().as_str(),
            member.name(),
            member.declared_type(),
            member.description().replace('\n', " ")
        );
    }

    for skipped in &extraction.skipped {
        println!("  -  line {}: skipped `{}`", skipped.line, skipped.text);
    }

    Ok(())
}

/// Print every registered template with its naming style.
pub fn list_templates(config: Option<&Path>) -> Result<()> {
    let settings = load_settings(config, &current_dir()?)?;
    let registry = settings
        .registry()
        .context("Failed to register templates")?;

    for template in registry.iter() {
        let marker = if template.name == settings.template {
            "*"
        } else {
            " "
        };
        println!("{marker} {:<20} {}", template.name, template.style.as_str());
    }

    Ok(())
}
