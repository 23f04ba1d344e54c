// NOTE: agdeck Architecture
//
// The dashboard is a read-only consumer. A backend process publishes session
// records and daily activity counts as JSON into the data directory; agdeck
// loads them (agdeck-runtime), orders and lays them out (agdeck-engine) and
// presents them on the console or in a full-screen TUI (this crate).
//
// Nothing here computes metrics. Missing fields stay missing all the way to
// the screen, where they render as "--".

mod args;
mod commands;
mod handlers;
pub mod presentation;
mod tracing_setup;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
