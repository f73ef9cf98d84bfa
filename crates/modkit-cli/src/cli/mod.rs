//! CLI for the modkit toolkit.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use modkit_core::config;
use modkit_core::logger::LoggerRegistry;
use modkit_core::modules::ModuleRegistry;

use crate::units;
use commands::{run_list, run_load, run_map_url, run_resolve};

/// Top-level CLI for the modkit toolkit.
#[derive(Debug, Parser)]
#[command(name = "modkit")]
#[command(about = "modkit: module registry, named loggers, URL-to-path mapping", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Load one registered unit as the program's unit of work.
    Load {
        /// Specifier of the unit to load (e.g. "main" or "cycle/a").
        specifier: String,
    },

    /// Print the canonical identifier a specifier resolves to.
    Resolve {
        /// Specifier to resolve.
        specifier: String,
    },

    /// List the registered unit identifiers.
    List,

    /// Print the mirror path a URL's content would be persisted under.
    MapUrl {
        /// URL to map (e.g. "http://example.com/some/page").
        url: String,

        /// Base directory to join the mapped path under (overrides config).
        #[arg(long, value_name = "DIR")]
        mirror_dir: Option<PathBuf>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let registry = ModuleRegistry::with_config(units::builtin_units(), &cfg.modules);
        let mut loggers = LoggerRegistry::new(cfg.default_logger_name.clone());

        match cli.command {
            CliCommand::Load { specifier } => run_load(&registry, &mut loggers, &specifier)?,
            CliCommand::Resolve { specifier } => run_resolve(&registry, &specifier)?,
            CliCommand::List => run_list(&registry),
            CliCommand::MapUrl { url, mirror_dir } => {
                let base = mirror_dir.or_else(|| cfg.mirror_dir.clone());
                run_map_url(&url, base.as_deref())?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
