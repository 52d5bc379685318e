//! Application context shared by all commands.

use crate::cli::output::HumanLayout;
use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::storage::Database;

/// Everything a command needs: resolved config, the open local database,
/// and the effective output format. Built once in `main`, passed by
/// reference. Stores receive the database handle explicitly rather than
/// looking it up ambiently.
#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub db: Database,
    pub format: OutputFormat,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = Config::load(cli.config.as_deref())?;
        if let Some(dir) = &cli.data_dir {
            config.storage.data_dir = Some(dir.clone());
        }

        // Failing to open the local store is the one unrecoverable
        // condition: every feature persists through it.
        let db = Database::open(config.db_path()?)?;

        Ok(Self {
            config,
            db,
            format: cli.output_format(),
        })
    }

    #[must_use]
    pub const fn machine(&self) -> bool {
        self.format.is_machine_readable()
    }

    /// Layout matching the effective format's styling.
    #[must_use]
    pub const fn layout(&self) -> HumanLayout {
        match self.format {
            OutputFormat::Plain => HumanLayout::plain(),
            _ => HumanLayout::new(),
        }
    }
}
