use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::presentation::views::ActivityHeatmapView;

#[derive(Debug, Serialize)]
pub struct ActivityViewModel {
    pub today: NaiveDate,
    /// Column-major, 52 columns × 7 rows
    pub cells: Vec<ActivityCellViewModel>,
    pub month_labels: Vec<MonthLabelViewModel>,
    pub total: u64,
    pub active_days: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityCellViewModel {
    pub date: NaiveDate,
    pub count: u32,
    pub column: usize,
    pub row: usize,
    /// 0 (none) ..= 4 (busiest)
    pub intensity: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthLabelViewModel {
    pub column: usize,
    pub year: i32,
    pub month: u32,
    pub name: String,
}

impl fmt::Display for ActivityViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", ActivityHeatmapView::new(self))
    }
}
