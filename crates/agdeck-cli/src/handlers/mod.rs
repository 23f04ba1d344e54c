pub mod activity;
pub mod config;
pub mod dashboard;
pub mod sessions;

use agdeck_runtime::{Config, JsonFileSource};
use anyhow::{Result, bail};
use std::path::Path;

use crate::presentation::columns::sort_keys;

/// Reject column keys the session table does not have
pub(crate) fn validate_sort_key(key: &str) -> Result<()> {
    let keys = sort_keys();
    if !keys.contains(&key) {
        bail!("Unknown sort key '{}'. Valid keys: {}", key, keys.join(", "));
    }
    Ok(())
}

pub(crate) fn open_source(data_dir: &Path, config: &Config) -> JsonFileSource {
    let source = JsonFileSource::from_config(config, data_dir);
    tracing::debug!(
        sessions = %source.sessions_path().display(),
        activity = %source.activity_path().display(),
        "reading backend exports"
    );
    source
}
