use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::tracing_setup::{self, LogTarget};
use agdeck_runtime::{Config, resolve_data_path};
use anyhow::Result;

pub const LOG_FILE: &str = "agdeck.log";

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_path(cli.data_dir.as_deref())?;

    // The TUI owns the terminal, so its logs go to a file
    let log_target = match cli.command {
        Commands::Dashboard => LogTarget::File(data_dir.join(LOG_FILE)),
        _ => LogTarget::Stderr,
    };
    tracing_setup::init(cli.log_level, log_target)?;
    tracing::debug!(data_dir = %data_dir.display(), "starting");

    match cli.command {
        Commands::Sessions { sort, desc, limit } => {
            let config = Config::load(&data_dir)?;
            handlers::sessions::handle(&data_dir, &config, sort, desc, limit, cli.format)
        }

        Commands::Activity { today } => {
            let config = Config::load(&data_dir)?;
            handlers::activity::handle(&data_dir, &config, today, cli.format)
        }

        Commands::Dashboard => {
            let config = Config::load(&data_dir)?;
            handlers::dashboard::handle(&data_dir, &config)
        }

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&data_dir, cli.format),
            ConfigCommand::Init { force } => handlers::config::init(&data_dir, force, cli.format),
        },
    }
}
