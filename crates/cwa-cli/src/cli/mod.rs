//! CLI for the CWA attribution tool.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cwa_core::config;

use commands::{run_completions, run_credit, run_inspect, run_locate};

/// Top-level CLI for the CWA attribution tool.
#[derive(Debug, Parser)]
#[command(name = "cwa")]
#[command(about = "CWA: attribution credit lines for Wikimedia Commons files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch attribution and print the credit line.
    Credit {
        /// Commons file page URL (must contain a File: segment).
        url: String,
        /// Print the plain-text form instead of formatted HTML.
        #[arg(long)]
        plain: bool,
    },

    /// Fetch attribution and render every field plus the credit line.
    Inspect {
        /// Commons file page URL (must contain a File: segment).
        url: String,
        /// Show the plain-text credit form instead of formatted HTML.
        #[arg(long)]
        plain: bool,
    },

    /// Derive the canonical title and display name without fetching.
    Locate {
        /// Commons file page URL (must contain a File: segment).
        url: String,
    },

    /// Generate a shell completion script on stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Credit { url, plain } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_credit(cfg, url, plain).await?;
            }
            CliCommand::Inspect { url, plain } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_inspect(cfg, url, plain).await?;
            }
            CliCommand::Locate { url } => run_locate(&url)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
