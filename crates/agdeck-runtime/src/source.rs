//! Backend data boundary
//!
//! The dashboard never computes sessions or metrics itself; it reads what the
//! backend process has published. `JsonFileSource` reads the backend's JSON
//! exports from the data directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use agdeck_types::{ActivitySample, SessionRecord};
use chrono::{Local, NaiveDate};
use serde::de::DeserializeOwned;

use crate::{Config, Error, Result};

pub trait DashboardSource {
    fn sessions(&self) -> Result<Vec<SessionRecord>>;

    /// Daily activity counts, one sample per local calendar day
    fn activity(&self) -> Result<Vec<ActivitySample>>;
}

#[derive(Debug, Clone)]
pub struct JsonFileSource {
    sessions_path: PathBuf,
    activity_path: PathBuf,
}

impl JsonFileSource {
    pub fn new(sessions_path: impl Into<PathBuf>, activity_path: impl Into<PathBuf>) -> Self {
        Self {
            sessions_path: sessions_path.into(),
            activity_path: activity_path.into(),
        }
    }

    pub fn from_config(config: &Config, data_dir: &Path) -> Self {
        Self::new(config.sessions_path(data_dir), config.activity_path(data_dir))
    }

    pub fn sessions_path(&self) -> &Path {
        &self.sessions_path
    }

    pub fn activity_path(&self) -> &Path {
        &self.activity_path
    }
}

impl DashboardSource for JsonFileSource {
    fn sessions(&self) -> Result<Vec<SessionRecord>> {
        if !self.sessions_path.exists() {
            return Err(Error::NotFound(self.sessions_path.clone()));
        }
        let sessions: Vec<SessionRecord> = read_json(&self.sessions_path)?;
        tracing::debug!(count = sessions.len(), "loaded sessions");
        Ok(sessions)
    }

    /// Falls back to counting sessions per start day when no activity export exists
    fn activity(&self) -> Result<Vec<ActivitySample>> {
        if self.activity_path.exists() {
            return read_json(&self.activity_path);
        }

        tracing::debug!(
            path = %self.activity_path.display(),
            "no activity export, deriving from sessions"
        );
        Ok(aggregate_activity(&self.sessions()?))
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Count sessions per local start day, ordered by date.
///
/// Sessions without a start time are not counted.
pub fn aggregate_activity(sessions: &[SessionRecord]) -> Vec<ActivitySample> {
    let mut per_day: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for started_at in sessions.iter().filter_map(|s| s.started_at) {
        let day = started_at.with_timezone(&Local).date_naive();
        *per_day.entry(day).or_default() += 1;
    }

    per_day
        .into_iter()
        .map(|(day, count)| ActivitySample::new(day, count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use agdeck_types::SessionStatus;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn session(id: &str, started_at: Option<chrono::DateTime<Utc>>) -> SessionRecord {
        SessionRecord {
            id: id.to_string(),
            agent: "claude".to_string(),
            project: None,
            status: SessionStatus::Completed,
            started_at,
            duration_secs: None,
            tokens: None,
            cost_usd: None,
        }
    }

    #[test]
    fn test_aggregate_counts_per_day() {
        // Midday timestamps stay on the same local day for any UTC offset up to ±11h
        let noon = |d| Utc.with_ymd_and_hms(2026, 4, d, 12, 0, 0).unwrap();
        let sessions = vec![
            session("a", Some(noon(3))),
            session("b", Some(noon(1))),
            session("c", Some(noon(3))),
            session("d", None),
        ];

        let samples = aggregate_activity(&sessions);
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].count, 1);
        assert_eq!(samples[1].count, 2);
        assert!(samples[0].date < samples[1].date);
    }

    #[test]
    fn test_missing_sessions_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let source = JsonFileSource::new(
            temp_dir.path().join("sessions.json"),
            temp_dir.path().join("activity.json"),
        );
        let err = source.sessions().unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_activity_export_is_preferred() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let sessions_path = temp_dir.path().join("sessions.json");
        let activity_path = temp_dir.path().join("activity.json");
        std::fs::write(&sessions_path, "[]")?;
        std::fs::write(&activity_path, r#"[{"date": "2026-04-01", "count": 12}]"#)?;

        let source = JsonFileSource::new(&sessions_path, &activity_path);
        let activity = source.activity()?;
        assert_eq!(activity, vec![ActivitySample {
            date: "2026-04-01".to_string(),
            count: 12
        }]);

        Ok(())
    }

    #[test]
    fn test_activity_falls_back_to_sessions() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let sessions_path = temp_dir.path().join("sessions.json");
        std::fs::write(
            &sessions_path,
            r#"[{"id": "a", "agent": "codex", "status": "idle", "started_at": "2026-04-02T12:00:00Z"}]"#,
        )?;

        let source = JsonFileSource::new(&sessions_path, temp_dir.path().join("activity.json"));
        let activity = source.activity()?;
        assert_eq!(activity.len(), 1);
        assert_eq!(activity[0].count, 1);

        Ok(())
    }

    #[test]
    fn test_invalid_json_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let sessions_path = temp_dir.path().join("sessions.json");
        std::fs::write(&sessions_path, "{not json").unwrap();

        let source = JsonFileSource::new(&sessions_path, temp_dir.path().join("activity.json"));
        let err = source.sessions().unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
        assert!(err.to_string().contains("sessions.json"));
    }
}
