use agdeck_types::{SessionRecord, SortDirection, SortState};
use serde::Serialize;
use std::fmt;

use crate::presentation::views::SessionTableView;

#[derive(Debug, Serialize)]
pub struct SessionTableViewModel {
    pub columns: Vec<ColumnHeaderViewModel>,
    pub sort: SortState,
    pub rows: Vec<SessionRowViewModel>,
    /// Rows before `--limit` was applied
    pub total_count: usize,
}

#[derive(Debug, Serialize)]
pub struct ColumnHeaderViewModel {
    pub key: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u16>,
    /// Set on the column the table is sorted by
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortDirection>,
}

#[derive(Debug, Serialize)]
pub struct SessionRowViewModel {
    pub id: String,
    /// Display text, one entry per column
    pub cells: Vec<String>,
    pub record: SessionRecord,
}

impl fmt::Display for SessionTableViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", SessionTableView::new(self))
    }
}
