//! Interactive member picker for `getset pick`.

use anyhow::{bail, Result};
use getset_core::{AccessorKind, Generator, Selection};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::generate;
use crate::input::Session;
use crate::SourceArgs;

const PROMPT: &str = "member> ";

/// Show the members of the input, read a choice, and generate for it.
pub fn pick_member(args: &SourceArgs, kind: AccessorKind, write: bool) -> Result<()> {
    let session = Session::open(args)?;
    let generator = Generator::new(&session.registry, &session.options)?;
    let items = generator.selection_items(&session.input.text);

    if items.is_empty() {
        eprintln!("No members found in {}", session.input.display_name());
        return Ok(());
    }

    for (index, (name, description)) in items.iter().enumerate() {
        println!("[{index}] {name} - {}", description.replace('\n', " "));
    }

    let mut editor = DefaultEditor::new()?;
    let line = match editor.readline(PROMPT) {
        Ok(line) => line,
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
            eprintln!("Cancelled");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let Some(index) = parse_choice(&line, &items)? else {
        eprintln!("Cancelled");
        return Ok(());
    };

    let name = items[index].0.clone();
    tracing::debug!("picked member {name}");
    generate::emit(&session, kind, &Selection::Named(name), write)
}

/// Resolve the typed answer to an index into `items`.
///
/// Accepts an index or a member name (with or without `$`). Blank input
/// cancels.
fn parse_choice(input: &str, items: &[(String, String)]) -> Result<Option<usize>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    if let Ok(index) = input.parse::<usize>() {
        if index < items.len() {
            return Ok(Some(index));
        }
        bail!("No member at index {index} (0-{})", items.len() - 1);
    }

    let name = input.trim_start_matches('$');
    match items.iter().position(|(item, _)| item == name) {
        Some(index) => Ok(Some(index)),
        None => bail!("No member named '{name}'"),
    }
}
