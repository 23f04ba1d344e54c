//! Deterministic sample data.
//!
//! Timestamps sit at 12:00 UTC so their local calendar day is stable across
//! the timezones CI machines run in.

use agdeck_types::{ActivitySample, SessionRecord, SessionStatus};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

/// Fluent builder for a single session record.
pub struct SessionBuilder {
    record: SessionRecord,
}

impl SessionBuilder {
    pub fn new(id: &str, agent: &str) -> Self {
        Self {
            record: SessionRecord {
                id: id.to_string(),
                agent: agent.to_string(),
                project: None,
                status: SessionStatus::Completed,
                started_at: None,
                duration_secs: None,
                tokens: None,
                cost_usd: None,
            },
        }
    }

    pub fn project(mut self, project: &str) -> Self {
        self.record.project = Some(project.to_string());
        self
    }

    pub fn status(mut self, status: SessionStatus) -> Self {
        self.record.status = status;
        self
    }

    /// Start at noon UTC on the given day
    pub fn started_on(mut self, year: i32, month: u32, day: u32) -> Self {
        self.record.started_at = Some(noon_utc(year, month, day));
        self
    }

    pub fn duration_secs(mut self, secs: u64) -> Self {
        self.record.duration_secs = Some(secs);
        self
    }

    pub fn tokens(mut self, tokens: u64) -> Self {
        self.record.tokens = Some(tokens);
        self
    }

    pub fn cost(mut self, usd: f64) -> Self {
        self.record.cost_usd = Some(usd);
        self
    }

    pub fn build(self) -> SessionRecord {
        self.record
    }
}

pub fn noon_utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("valid fixture date")
}

/// Six sessions covering every status and some missing fields.
///
/// Costs: s-101 1.20, s-102 missing, s-103 0.35, s-104 4.80, s-105 missing, s-106 0.35
pub fn sample_sessions() -> Vec<SessionRecord> {
    vec![
        SessionBuilder::new("s-101", "claude")
            .project("agdeck")
            .started_on(2026, 10, 1)
            .duration_secs(1_820)
            .tokens(48_200)
            .cost(1.20)
            .build(),
        SessionBuilder::new("s-102", "codex")
            .status(SessionStatus::Active)
            .started_on(2026, 10, 17)
            .tokens(3_100)
            .build(),
        SessionBuilder::new("s-103", "gemini")
            .project("infra")
            .started_on(2026, 9, 12)
            .duration_secs(240)
            .tokens(9_900)
            .cost(0.35)
            .build(),
        SessionBuilder::new("s-104", "claude")
            .project("infra")
            .status(SessionStatus::Failed)
            .started_on(2026, 10, 1)
            .duration_secs(7_300)
            .tokens(180_000)
            .cost(4.80)
            .build(),
        SessionBuilder::new("s-105", "aider")
            .status(SessionStatus::Idle)
            .build(),
        SessionBuilder::new("s-106", "codex")
            .project("agdeck")
            .started_on(2026, 8, 30)
            .duration_secs(600)
            .tokens(12_000)
            .cost(0.35)
            .build(),
    ]
}

/// Samples `days_ago` before `today`, in the order given
pub fn activity_ending(today: NaiveDate, counts: &[(i64, u32)]) -> Vec<ActivitySample> {
    counts
        .iter()
        .map(|&(days_ago, count)| ActivitySample::new(today - Duration::days(days_ago), count))
        .collect()
}
