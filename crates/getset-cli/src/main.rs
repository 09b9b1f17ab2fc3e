//! Getset CLI - generate PHP getters and setters from member declarations

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use getset_core::AccessorKind;
use std::path::PathBuf;

mod generate;
mod input;
mod list;
mod pick;

#[derive(Parser)]
#[command(name = "getset")]
#[command(version = getset_core::VERSION)]
#[command(about = "Generate getters and setters for PHP class members", long_about = None)]
struct Cli {
    /// Show debug diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that reads a PHP file
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// PHP source file (reads stdin if omitted or `-`)
    pub file: Option<PathBuf>,

    /// Configuration file (defaults to the nearest getset.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Template to use instead of the configured one
    #[arg(short, long)]
    pub template: Option<String>,

    /// Process input even if it does not look like PHP
    #[arg(long)]
    pub force: bool,
}

/// Options shared by the generating commands
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Only generate for the member with this name (without `$`)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Insert the accessors into the file before its last closing brace
    #[arg(short, long)]
    pub write: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate getters
    Getters(GenerateArgs),

    /// Generate setters
    Setters(GenerateArgs),

    /// Generate getter and setter pairs
    Accessors(GenerateArgs),

    /// List the members found in a file
    List {
        #[command(flatten)]
        source: SourceArgs,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Choose one member interactively, then generate for it
    Pick {
        #[command(flatten)]
        source: SourceArgs,

        /// What to generate for the chosen member
        #[arg(short, long, value_enum, default_value_t = Kind::Accessors)]
        kind: Kind,

        /// Insert the accessors into the file before its last closing brace
        #[arg(short, long)]
        write: bool,
    },

    /// List registered templates
    Templates {
        /// Configuration file (defaults to the nearest getset.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Kind {
    Getters,
    Setters,
    Accessors,
}

impl From<Kind> for AccessorKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Getters => AccessorKind::Getters,
            Kind::Setters => AccessorKind::Setters,
            Kind::Accessors => AccessorKind::Both,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Getters(args) => generate::run(&args, AccessorKind::Getters),
        Commands::Setters(args) => generate::run(&args, AccessorKind::Setters),
        Commands::Accessors(args) => generate::run(&args, AccessorKind::Both),
        Commands::List { source, json } => list::list_members(&source, json),
        Commands::Pick {
            source,
            kind,
            write,
        } => pick::pick_member(&source, kind.into(), write),
        Commands::Templates { config } => list::list_templates(config.as_deref()),
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default level.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
