use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Number of week columns in an activity grid
pub const GRID_WEEKS: usize = 52;
/// Number of day rows in an activity grid
pub const GRID_DAYS: usize = 7;
pub const GRID_CELLS: usize = GRID_WEEKS * GRID_DAYS;

/// One pre-aggregated day of activity, as delivered by the metrics backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySample {
    /// Local calendar day, `YYYY-MM-DD`
    pub date: String,
    pub count: u32,
}

impl ActivitySample {
    pub fn new(date: NaiveDate, count: u32) -> Self {
        Self {
            date: date.format(DATE_FORMAT).to_string(),
            count,
        }
    }

    pub fn day(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).map_err(|source| Error::InvalidDate {
            input: self.date.clone(),
            source,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeatmapCell {
    pub date: NaiveDate,
    pub count: u32,
    /// Week column, 0 (oldest) ..= 51 (current)
    pub column: usize,
    /// Day row, 0 ..= 6; row 6 of column 51 is today
    pub row: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthLabel {
    pub column: usize,
    pub year: i32,
    pub month: u32,
}

impl MonthLabel {
    pub fn short_name(&self) -> &'static str {
        match self.month {
            1 => "Jan",
            2 => "Feb",
            3 => "Mar",
            4 => "Apr",
            5 => "May",
            6 => "Jun",
            7 => "Jul",
            8 => "Aug",
            9 => "Sep",
            10 => "Oct",
            11 => "Nov",
            12 => "Dec",
            _ => "?",
        }
    }
}

/// A complete 52×7 activity grid, cells in column-major order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapGrid {
    pub cells: Vec<HeatmapCell>,
    pub month_labels: Vec<MonthLabel>,
}

impl HeatmapGrid {
    pub fn cell(&self, column: usize, row: usize) -> Option<&HeatmapCell> {
        if column >= GRID_WEEKS || row >= GRID_DAYS {
            return None;
        }
        self.cells.get(column * GRID_DAYS + row)
    }

    /// The anchor cell (column 51, row 6)
    pub fn today(&self) -> Option<&HeatmapCell> {
        self.cells.last()
    }

    pub fn total(&self) -> u64 {
        self.cells.iter().map(|c| u64::from(c.count)).sum()
    }

    pub fn active_days(&self) -> usize {
        self.cells.iter().filter(|c| c.count > 0).count()
    }

    pub fn label_at(&self, column: usize) -> Option<&MonthLabel> {
        self.month_labels.iter().find(|l| l.column == column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_day_parses_iso_date() {
        let sample = ActivitySample {
            date: "2026-02-28".to_string(),
            count: 4,
        };
        assert_eq!(
            sample.day().unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()
        );
    }

    #[test]
    fn test_sample_day_rejects_other_formats() {
        let sample = ActivitySample {
            date: "28/02/2026".to_string(),
            count: 4,
        };
        let err = sample.day().unwrap_err();
        assert!(err.to_string().contains("28/02/2026"));
    }

    #[test]
    fn test_sample_new_formats_date() {
        let sample = ActivitySample::new(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(), 2);
        assert_eq!(sample.date, "2026-01-05");
    }

    #[test]
    fn test_month_short_name() {
        let label = MonthLabel {
            column: 0,
            year: 2026,
            month: 9,
        };
        assert_eq!(label.short_name(), "Sep");
    }
}
