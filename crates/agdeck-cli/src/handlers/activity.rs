use agdeck_engine::build_grid;
use agdeck_runtime::{Config, DashboardSource};
use agdeck_types::DATE_FORMAT;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::path::Path;

use super::open_source;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;

pub fn handle(
    data_dir: &Path,
    config: &Config,
    today: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let today = match today {
        Some(text) => NaiveDate::parse_from_str(&text, DATE_FORMAT)
            .with_context(|| format!("Invalid --today '{}', expected YYYY-MM-DD", text))?,
        None => Local::now().date_naive(),
    };

    let samples = open_source(data_dir, config).activity()?;
    let grid = build_grid(&samples, today);

    let view_model = presenters::present_activity(&grid, today);
    ConsoleRenderer::new(format).render(view_model)?;

    Ok(())
}
