//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

pub mod commands;
pub mod output;

/// Folio - Terminal portfolio client with remote content and local curation
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable machine-readable JSON output (for scripts and agents)
    #[arg(long, short = 'm', global = true)]
    pub machine: bool,

    /// Force plain output (no colors)
    #[arg(long, global = true)]
    pub plain: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/folio/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the local database (default: platform data dir)
    #[arg(long, global = true, env = "FOLIO_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Get the effective output format.
    ///
    /// Priority order: `--plain`, then `--machine`, then human.
    #[must_use]
    pub const fn output_format(&self) -> OutputFormat {
        if self.plain {
            return OutputFormat::Plain;
        }
        if self.machine {
            return OutputFormat::Json;
        }
        OutputFormat::Human
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load and display the portfolio
    Show(commands::show::ShowArgs),

    /// Curate the project shortlist
    Select(commands::select::SelectArgs),

    /// Endorse a skill
    Endorse(commands::endorse::EndorseArgs),

    /// Display preferences: mode and accent color
    Theme(commands::theme::ThemeArgs),
}
