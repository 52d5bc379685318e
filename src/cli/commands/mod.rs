//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub mod endorse;
pub mod select;
pub mod show;
pub mod theme;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Show(args) => show::run(ctx, args),
        Commands::Select(args) => select::run(ctx, args),
        Commands::Endorse(args) => endorse::run(ctx, args),
        Commands::Theme(args) => theme::run(ctx, args),
    }
}
