use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Record, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Active,
    Idle,
    Completed,
    Failed,
}

impl SessionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionStatus::Active => "active",
            SessionStatus::Idle => "idle",
            SessionStatus::Completed => "completed",
            SessionStatus::Failed => "failed",
        }
    }

    /// Sort rank, in declaration order
    pub fn rank(self) -> u32 {
        self as u32
    }
}

/// An agent session as reported by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: String,
    pub agent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    pub status: SessionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_usd: Option<f64>,
}

impl SessionRecord {
    /// Field keys exposed through [`Record::field`], in display order
    pub const FIELDS: [&'static str; 8] = [
        "id",
        "agent",
        "project",
        "status",
        "started_at",
        "duration",
        "tokens",
        "cost",
    ];
}

impl Record for SessionRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Option<Value> {
        let value = match key {
            "id" => Value::from(self.id.as_str()),
            "agent" => Value::from(self.agent.as_str()),
            "project" => Value::from(self.project.clone()),
            "status" => Value::ordinal(self.status.rank(), self.status.as_str()),
            "started_at" => Value::from(self.started_at),
            "duration" => Value::from(self.duration_secs),
            "tokens" => Value::from(self.tokens),
            "cost" => Value::from(self.cost_usd),
            _ => return None,
        };
        Some(value)
    }
}
