//! Reading the PHP buffer and the configuration that applies to it.

use anyhow::{bail, Context as _, Result};
use getset_config::Settings;
use getset_core::{is_php_source, GenerateOptions, TemplateRegistry};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::SourceArgs;

/// A loaded PHP buffer.
#[derive(Debug, Clone)]
pub struct Input {
    /// File the text came from; `None` for stdin.
    pub path: Option<PathBuf>,
    /// Full buffer contents.
    pub text: String,
}

impl Input {
    /// Read a file, or stdin when `path` is `None` or `-`.
    pub fn read(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) if p != Path::new("-") => {
                let text = std::fs::read_to_string(p)
                    .with_context(|| format!("Failed to read '{}'", p.display()))?;
                Ok(Self {
                    path: Some(p.to_path_buf()),
                    text,
                })
            }
            _ => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read from stdin")?;
                Ok(Self { path: None, text })
            }
        }
    }

    /// Human-readable origin for messages.
    pub fn display_name(&self) -> String {
        self.path
            .as_ref()
            .map_or_else(|| "stdin".to_string(), |p| p.display().to_string())
    }

    /// Directory to start configuration discovery from.
    pub fn config_root(&self) -> Result<PathBuf> {
        match self.path.as_ref().and_then(|p| p.parent()) {
            Some(dir) if !dir.as_os_str().is_empty() => Ok(dir.to_path_buf()),
            _ => current_dir(),
        }
    }
}

/// Settings resolved for one invocation.
#[derive(Debug)]
pub struct Session {
    pub input: Input,
    pub registry: TemplateRegistry,
    pub options: GenerateOptions,
}

impl Session {
    /// Read the input and load the configuration that applies to it.
    pub fn open(args: &SourceArgs) -> Result<Self> {
        let input = Input::read(args.file.as_deref())?;

        if !args.force && !is_php_source(&input.text) {
            bail!(
                "Only available for PHP sources: '{}' has no `<?php` tag (use --force to override)",
                input.display_name()
            );
        }

        let settings = load_settings(args.config.as_deref(), &input.config_root()?)?;
        let registry = settings
            .registry()
            .context("Failed to register templates")?;

        let mut options = settings.generate_options();
        if let Some(template) = &args.template {
            options.template.clone_from(template);
        }

        Ok(Self {
            input,
            registry,
            options,
        })
    }
}

pub fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().context("Failed to get current directory")
}

/// Load an explicit configuration file, or discover one above `root`.
pub fn load_settings(config: Option<&Path>, root: &Path) -> Result<Settings> {
    match config {
        Some(path) => Settings::from_path(path)
            .with_context(|| format!("Failed to load config '{}'", path.display())),
        None => Settings::discover(root).context("Failed to load getset.toml"),
    }
}
