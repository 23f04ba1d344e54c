//! Session table column set, shared by the console and the TUI.

use agdeck_engine::Column;
use agdeck_types::{MISSING_PLACEHOLDER, SessionRecord, Value};

use super::formatters::{format_compact, format_cost, format_duration, format_local_timestamp};

pub fn session_columns() -> Vec<Column<SessionRecord>> {
    vec![
        Column::new("id", "ID").with_width(10),
        Column::new("agent", "AGENT").with_width(10),
        Column::new("project", "PROJECT").with_width(14),
        Column::new("status", "STATUS").with_width(10),
        Column::new("started_at", "STARTED")
            .with_width(17)
            .with_render(|value, _| match value {
                Value::Timestamp(ts) => format_local_timestamp(ts),
                other => other.to_string(),
            }),
        Column::new("duration", "DURATION")
            .with_width(9)
            .with_render(|value, _| match value {
                Value::Integer(secs) if *secs >= 0 => format_duration(*secs as u64),
                other => other.to_string(),
            }),
        Column::new("tokens", "TOKENS")
            .with_width(8)
            .with_render(|value, _| match value {
                Value::Integer(n) => format_compact(*n),
                other => other.to_string(),
            }),
        Column::new("cost", "COST")
            .with_width(8)
            .with_render(|value, _| match value {
                Value::Number(usd) => format_cost(*usd),
                Value::Null => MISSING_PLACEHOLDER.to_string(),
                other => other.to_string(),
            }),
    ]
}

/// Keys accepted by `--sort`, in column order
pub fn sort_keys() -> Vec<&'static str> {
    SessionRecord::FIELDS.to_vec()
}
