use agdeck_engine::DataTable;
use agdeck_runtime::{Config, DashboardSource};
use anyhow::{Result, bail};
use std::path::Path;

use super::{open_source, validate_sort_key};
use crate::presentation::columns::session_columns;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;

pub fn handle(
    data_dir: &Path,
    config: &Config,
    sort: Option<String>,
    desc: bool,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let sessions = open_source(data_dir, config).sessions()?;

    let mut table = DataTable::new(session_columns());

    let sort_key = sort.or_else(|| config.dashboard.default_sort.clone());
    match sort_key {
        Some(key) => {
            validate_sort_key(&key)?;
            // Header activations: once for ascending, twice for descending
            table.request_sort(&key);
            if desc {
                table.request_sort(&key);
            }
        }
        None if desc => bail!("--desc needs a column to sort by (--sort KEY)"),
        None => {}
    }

    let view_model = presenters::present_session_table(&table, &sessions, limit);
    ConsoleRenderer::new(format).render(view_model)?;

    Ok(())
}
