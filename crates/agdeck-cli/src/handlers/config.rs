use agdeck_runtime::Config;
use anyhow::{Result, bail};
use std::path::Path;

use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;

pub fn show(data_dir: &Path, format: OutputFormat) -> Result<()> {
    let config_path = Config::default_path(data_dir);
    let config = Config::load_from(&config_path)?;

    let view_model = presenters::present_config(data_dir, &config_path, config);
    ConsoleRenderer::new(format).render(view_model)?;

    Ok(())
}

pub fn init(data_dir: &Path, force: bool, format: OutputFormat) -> Result<()> {
    let config_path = Config::default_path(data_dir);
    let exists = config_path.exists();
    if exists && !force {
        bail!(
            "Config already exists at {}. Use --force to overwrite",
            config_path.display()
        );
    }

    Config::default().save_to(&config_path)?;
    tracing::info!(path = %config_path.display(), "wrote default config");

    let view_model = presenters::present_config_init(&config_path, exists);
    ConsoleRenderer::new(format).render(view_model)?;

    Ok(())
}
