use agdeck_engine::build_grid;
use agdeck_runtime::{Config, DashboardSource};
use agdeck_types::SortState;
use anyhow::{Result, bail};
use chrono::{Local, NaiveDate};
use is_terminal::IsTerminal;
use std::path::Path;

use super::{open_source, validate_sort_key};
use crate::presentation::presenters;
use crate::presentation::renderers::tui::{DashboardData, DashboardOptions, DashboardRenderer};

pub fn handle(data_dir: &Path, config: &Config) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("The dashboard needs a terminal; use `agdeck sessions` or `agdeck activity` instead");
    }

    let initial_sort = match &config.dashboard.default_sort {
        Some(key) => {
            validate_sort_key(key)?;
            SortState::ascending(key.clone())
        }
        None => SortState::Unsorted,
    };

    let source = open_source(data_dir, config);
    let data = load_data(&source, Local::now().date_naive())?;

    tracing::info!(sessions = data.sessions.len(), "opening dashboard");

    let options = DashboardOptions {
        tick_rate: config.tick_rate(),
        overlay_duration: config.overlay_duration(),
        initial_sort,
    };
    DashboardRenderer::new(options).run(data)
}

/// Sessions plus the heatmap anchored at `today`
fn load_data(source: &impl DashboardSource, today: NaiveDate) -> Result<DashboardData> {
    let sessions = source.sessions()?;
    let grid = build_grid(&source.activity()?, today);
    let activity = presenters::present_activity(&grid, today).content;
    Ok(DashboardData { sessions, activity })
}
