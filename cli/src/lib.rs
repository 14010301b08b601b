//! Command-line front end for PCForge

pub mod error;
mod interactive;
mod render;

use crate::error::CliError;
use crate::error::Result;
use crate::interactive::Interactive;
use crate::render::Renderer;
use clap::Parser;
use clap::Subcommand;
use pcforge_core::BuildSession;
use pcforge_core::BuilderConfig;
use pcforge_core::CatalogProvider;
use pcforge_core::ComponentCategory;
use pcforge_core::ConfigSource;
use pcforge_core::StaticCatalog;
use std::io::BufRead;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Configure a custom PC build and see its price and compatibility status
#[derive(Parser, Debug)]
#[command(name = "pcforge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ~/.pcforge/config.toml)
    #[arg(long, global = true, env = "PCFORGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Catalog file (JSON, or TOML with a .toml extension); overrides the config
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the component categories
    Categories {
        #[arg(long)]
        json: bool,
    },

    /// List the items offered for a category
    Items {
        /// Category id, e.g. gpu or power-supply
        category: String,

        #[arg(long)]
        json: bool,
    },

    /// Print the summary of a build given as selections
    Summary {
        /// Selection as <category>=<item-id>; later selections win
        #[arg(short = 's', long = "select", value_name = "CATEGORY=ITEM")]
        selections: Vec<SelectionArg>,

        /// Build name shown in the summary
        #[arg(long, default_value = "My Build")]
        name: String,

        #[arg(long)]
        json: bool,
    },

    /// Print the body of a save request for a build
    SaveRequest {
        #[arg(short = 's', long = "select", value_name = "CATEGORY=ITEM")]
        selections: Vec<SelectionArg>,
    },

    /// Build interactively, one command per line
    Interactive {
        #[arg(long, default_value = "My Build")]
        name: String,
    },
}

/// A `<category>=<item-id>` pair from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionArg {
    pub category: String,
    pub item: String,
}

impl FromStr for SelectionArg {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('=') {
            Some((category, item)) if !category.trim().is_empty() && !item.trim().is_empty() => {
                Ok(Self {
                    category: category.trim().to_string(),
                    item: item.trim().to_string(),
                })
            }
            _ => Err(CliError::InvalidSelection(s.to_string())),
        }
    }
}

/// Terminal capabilities that change how output is written
#[derive(Debug, Clone, Copy, Default)]
pub struct Terminal {
    pub color: bool,
    pub prompt: bool,
}

/// Load the configuration named on the command line, or the default one
pub fn load_config(cli: &Cli) -> Result<(BuilderConfig, ConfigSource)> {
    Ok(BuilderConfig::load_with_source(cli.config.as_deref())?)
}

/// Log where the configuration came from; call after [`init_logging`]
pub fn report_config_source(source: &ConfigSource) {
    match source {
        ConfigSource::File(_) => info!("{source}"),
        ConfigSource::Defaults(_) => debug!("{source}"),
    }
}

/// Install the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence, then `-v` flags, then the configured level.
pub fn init_logging(verbose: u8, config: &BuilderConfig) -> Result<()> {
    let level = match verbose {
        0 => config.logging.level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}

fn session_from(
    catalog: &StaticCatalog,
    name: &str,
    selections: &[SelectionArg],
) -> Result<BuildSession> {
    let mut session = BuildSession::new(name);
    for selection in selections {
        session.select_from_catalog(catalog, &selection.category, &selection.item)?;
    }
    Ok(session)
}

/// Execute a parsed command
pub fn run<R: BufRead, W: Write>(
    cli: Cli,
    config: &BuilderConfig,
    terminal: Terminal,
    input: R,
    out: &mut W,
) -> Result<()> {
    let catalog = match &cli.catalog {
        Some(path) => StaticCatalog::from_path(path)?,
        None => config.catalog()?,
    };
    let renderer = Renderer::new(config, terminal.color);

    match cli.command {
        Command::Categories { json } => renderer.categories(out, &catalog.categories(), json),
        Command::Items { category, json } => {
            let category = ComponentCategory::from_id(&category)?;
            renderer.items(out, category, catalog.items(category), json)
        }
        Command::Summary {
            selections,
            name,
            json,
        } => {
            let session = session_from(&catalog, &name, &selections)?;
            renderer.summary(out, &session, json)
        }
        Command::SaveRequest { selections } => {
            let session = session_from(&catalog, "My Build", &selections)?;
            renderer.save_request(out, &session)
        }
        Command::Interactive { name } => {
            let session =
                Interactive::new(&catalog, &renderer, name, terminal.prompt).run(input, out)?;
            info!(
                "Interactive session {} ended with {} selections",
                session.id(),
                session.selections().len()
            );
            Ok(())
        }
    }
}
