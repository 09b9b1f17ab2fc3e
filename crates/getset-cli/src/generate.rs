//! Accessor generation for `getset getters|setters|accessors`.

use anyhow::{bail, Context, Result};
use getset_core::{insertion_offset, AccessorKind, Generated, Generator, Selection};
use std::io::Write;
use std::path::Path;

use crate::input::Session;
use crate::GenerateArgs;

/// Run one of the generating commands.
pub fn run(args: &GenerateArgs, kind: AccessorKind) -> Result<()> {
    let session = Session::open(&args.source)?;
    let selection = args
        .name
        .clone()
        .map_or(Selection::All, Selection::Named);

    emit(&session, kind, &selection, args.write)
}

/// Generate for `selection` and print the code or write it into the file.
pub fn emit(
    session: &Session,
    kind: AccessorKind,
    selection: &Selection,
    write: bool,
) -> Result<()> {
    let generator = Generator::new(&session.registry, &session.options)?;
    let generated = generator.generate(&session.input.text, kind, selection)?;

    report(&generated);

    if generated.is_empty() {
        eprintln!("Nothing to generate");
        return Ok(());
    }

    if write {
        let Some(path) = session.input.path.as_deref() else {
            bail!("--write needs a file argument, not stdin");
        };
        write_into(path, &session.input.text, &generated.code)?;
        eprintln!(
            "Added {} to {}",
            generated.emitted.join(", "),
            path.display()
        );
    } else {
        std::io::stdout()
            .write_all(generated.code.as_bytes())
            .context("Failed to write to stdout")?;
    }

    Ok(())
}

/// Malformed declarations are already logged by the extractor.
fn report(generated: &Generated) {
    for name in &generated.existing {
        eprintln!("Skipped {name}: already present");
    }
}

/// Insert `code` before the last closing brace of the class in `source`.
pub fn insert_code(source: &str, code: &str) -> Result<String> {
    let Some(offset) = insertion_offset(source) else {
        bail!("No closing brace found to insert accessors before");
    };

    let mut updated = String::with_capacity(source.len() + code.len());
    updated.push_str(&source[..offset]);
    updated.push_str(code);
    updated.push_str(&source[offset..]);
    Ok(updated)
}

fn write_into(path: &Path, source: &str, code: &str) -> Result<()> {
    let updated = insert_code(source, code)?;
    std::fs::write(path, updated).with_context(|| format!("Failed to write '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_before_last_brace() {
        let source = "<?php\nclass A\n{\n    private $x;\n}\n";
        let updated = insert_code(source, "\n    // accessors\n").unwrap();
        assert_eq!(
            updated,
            "<?php\nclass A\n{\n    private $x;\n\n    // accessors\n}\n"
        );
    }

    #[test]
    fn insert_without_class_body() {
        assert!(insert_code("<?php\n$x = 1;\n", "code").is_err());
    }
}
