use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "agdeck")]
#[command(about = "Dashboard for AI agent sessions and activity", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to $AGDECK_PATH, then the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Print the session table")]
    Sessions {
        /// Column key to sort by
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending instead of ascending
        #[arg(long)]
        desc: bool,

        #[arg(long)]
        limit: Option<usize>,
    },

    #[command(about = "Print the 52-week activity heatmap")]
    Activity {
        /// Last day of the grid (YYYY-MM-DD), defaults to the local date
        #[arg(long)]
        today: Option<String>,
    },

    #[command(about = "Open the interactive dashboard")]
    Dashboard,

    #[command(about = "Inspect or create the configuration file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Show the effective configuration")]
    Show,

    #[command(about = "Write a default config.toml")]
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
