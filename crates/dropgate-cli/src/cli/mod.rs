//! CLI for dropgate.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dropgate_core::config::{self, DropgateConfig};
use dropgate_core::{AdmissionGate, BuiltinRegistry};
use std::path::PathBuf;

use commands::{run_check, run_classify, run_gate, run_mime, run_url};

/// Top-level CLI for dropgate.
#[derive(Debug, Parser)]
#[command(name = "dropgate")]
#[command(about = "dropgate: classify files and check whether they may be imported", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/dropgate/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log classification decisions at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check whether files on disk may be imported (size and type).
    Check {
        /// Files to check.
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Check a file name and byte size without touching the filesystem.
    Gate {
        /// File name, e.g. `photo.png`.
        filename: String,
        /// Size in bytes.
        size: u64,
    },

    /// Print the MIME type for an extension.
    Mime {
        /// Extension, with or without the leading dot.
        ext: String,
    },

    /// Show everything known about an extension.
    Classify {
        /// Extension, with or without the leading dot.
        ext: String,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Tell relative paths from remote, data and blob URLs.
    Url {
        /// URL or path to classify.
        url: String,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        let registry = cfg.registry();
        match self.command {
            CliCommand::Check { paths } => run_check(&gate(&cfg, &registry), &paths)?,
            CliCommand::Gate { filename, size } => {
                run_gate(&gate(&cfg, &registry), &filename, size)?
            }
            CliCommand::Mime { ext } => run_mime(&ext),
            CliCommand::Classify { ext, json } => run_classify(&registry, &ext, json)?,
            CliCommand::Url { url } => run_url(&url),
        }

        Ok(())
    }
}

/// Gate using the configured limits and messages.
fn gate<'a>(cfg: &DropgateConfig, registry: &'a BuiltinRegistry) -> AdmissionGate<'a, BuiltinRegistry> {
    AdmissionGate::new(registry)
        .with_limits(cfg.limits)
        .with_messages(cfg.messages.clone())
}

#[cfg(test)]
mod tests;
