use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = "config.toml";

/// Resolve the dashboard data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. AGDECK_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.agdeck (fallback for systems without XDG)
pub fn resolve_data_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("AGDECK_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("agdeck"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".agdeck"));
    }

    Err(Error::Config(
        "Could not determine data path: no HOME directory or XDG data directory found".to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Exit animation length for modals
    #[serde(default = "default_overlay_duration_ms")]
    pub overlay_duration_ms: u64,

    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Column key the session table starts sorted by (ascending)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sort: Option<String>,
}

fn default_overlay_duration_ms() -> u64 {
    200
}

fn default_tick_rate_ms() -> u64 {
    100
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            overlay_duration_ms: default_overlay_duration_ms(),
            tick_rate_ms: default_tick_rate_ms(),
            default_sort: None,
        }
    }
}

/// Locations of backend data files, relative to the data directory unless absolute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_sessions_file")]
    pub sessions_file: PathBuf,

    #[serde(default = "default_activity_file")]
    pub activity_file: PathBuf,
}

fn default_sessions_file() -> PathBuf {
    PathBuf::from("sessions.json")
}

fn default_activity_file() -> PathBuf {
    PathBuf::from("activity.json")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            sessions_file: default_sessions_file(),
            activity_file: default_activity_file(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub data: DataConfig,
}

impl Config {
    pub fn load(data_dir: &Path) -> Result<Self> {
        Self::load_from(&Self::default_path(data_dir))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE)
    }

    pub fn validate(&self) -> Result<()> {
        if self.dashboard.tick_rate_ms == 0 {
            return Err(Error::Config(
                "dashboard.tick_rate_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn overlay_duration(&self) -> Duration {
        Duration::from_millis(self.dashboard.overlay_duration_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.dashboard.tick_rate_ms)
    }

    pub fn sessions_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.data.sessions_file)
    }

    pub fn activity_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.data.activity_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.overlay_duration(), Duration::from_millis(200));
        assert_eq!(config.tick_rate(), Duration::from_millis(100));
        assert!(config.dashboard.default_sort.is_none());
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join(CONFIG_FILE);

        let mut config = Config::default();
        config.dashboard.overlay_duration_ms = 350;
        config.dashboard.default_sort = Some("cost".to_string());

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&config_path, "[dashboard]\ntick_rate_ms = 50\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.dashboard.tick_rate_ms, 50);
        assert_eq!(config.dashboard.overlay_duration_ms, 200);
        assert_eq!(config.data, DataConfig::default());

        Ok(())
    }

    #[test]
    fn test_zero_tick_rate_is_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&config_path, "[dashboard]\ntick_rate_ms = 0\n")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load(temp_dir.path())?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_data_paths_resolve_against_data_dir() {
        let mut config = Config::default();
        let data_dir = Path::new("/var/lib/agdeck");
        assert_eq!(
            config.sessions_path(data_dir),
            PathBuf::from("/var/lib/agdeck/sessions.json")
        );

        config.data.activity_file = PathBuf::from("/srv/metrics/activity.json");
        assert_eq!(
            config.activity_path(data_dir),
            PathBuf::from("/srv/metrics/activity.json")
        );
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        let path = resolve_data_path(Some("/tmp/agdeck-explicit"))?;
        assert_eq!(path, PathBuf::from("/tmp/agdeck-explicit"));
        Ok(())
    }
}
