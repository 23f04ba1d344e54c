//! Activity heatmap grid builder
//!
//! The grid is a sliding window of 364 consecutive days ending today. It is
//! not aligned to calendar weeks: today is always the last cell (column 51,
//! row 6) whatever weekday it falls on.

use std::collections::HashMap;

use agdeck_types::{
    ActivitySample, GRID_CELLS, GRID_DAYS, GRID_WEEKS, HeatmapCell, HeatmapGrid, MonthLabel,
};
use chrono::{Datelike, Duration, Local, NaiveDate};

/// Discrete intensity level (0-4) used for cell colouring
pub fn intensity_bucket(count: u32) -> u8 {
    match count {
        0 => 0,
        1..=3 => 1,
        4..=7 => 2,
        8..=15 => 3,
        _ => 4,
    }
}

/// Build the full 52×7 grid ending at `today`.
///
/// Sample dates must be unique; on duplicates the last sample wins.
pub fn build_grid(samples: &[ActivitySample], today: NaiveDate) -> HeatmapGrid {
    let counts = index_samples(samples);

    let mut cells = Vec::with_capacity(GRID_CELLS);
    for week in (0..GRID_WEEKS).rev() {
        for day in 0..GRID_DAYS {
            let days_back = week * GRID_DAYS + (GRID_DAYS - 1 - day);
            let date = today - Duration::days(days_back as i64);
            cells.push(HeatmapCell {
                date,
                count: counts.get(&date).copied().unwrap_or(0),
                column: GRID_WEEKS - 1 - week,
                row: day,
            });
        }
    }

    let month_labels = month_labels(&cells);
    HeatmapGrid {
        cells,
        month_labels,
    }
}

/// [`build_grid`] anchored on the local calendar date
pub fn build_grid_for_today(samples: &[ActivitySample]) -> HeatmapGrid {
    build_grid(samples, Local::now().date_naive())
}

/// Month labels from the top row.
///
/// A label is placed at the first row-0 cell of each month; a month with no
/// row-0 cell inside the window gets no label.
pub fn month_labels(cells: &[HeatmapCell]) -> Vec<MonthLabel> {
    let mut top_row: Vec<&HeatmapCell> = cells.iter().filter(|c| c.row == 0).collect();
    top_row.sort_by_key(|c| c.column);

    let mut labels: Vec<MonthLabel> = Vec::new();
    for cell in top_row {
        let month = cell.date.month();
        if labels.last().is_none_or(|last| last.month != month) {
            labels.push(MonthLabel {
                column: cell.column,
                year: cell.date.year(),
                month,
            });
        }
    }
    labels
}

fn index_samples(samples: &[ActivitySample]) -> HashMap<NaiveDate, u32> {
    let mut counts = HashMap::with_capacity(samples.len());
    for sample in samples {
        match sample.day() {
            Ok(date) => {
                counts.insert(date, sample.count);
            }
            Err(err) => {
                tracing::warn!(error = %err, "skipping activity sample");
            }
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_intensity_boundaries() {
        let cases = [
            (0, 0),
            (1, 1),
            (3, 1),
            (4, 2),
            (7, 2),
            (8, 3),
            (15, 3),
            (16, 4),
            (10_000, 4),
        ];
        for (count, bucket) in cases {
            assert_eq!(intensity_bucket(count), bucket, "count {}", count);
        }
    }

    #[test]
    fn test_grid_anchors_today_last() {
        let today = day(2026, 10, 18);
        let grid = build_grid(&[], today);

        assert_eq!(grid.cells.len(), 364);
        let last = grid.today().unwrap();
        assert_eq!((last.column, last.row, last.date), (51, 6, today));

        let first = &grid.cells[0];
        assert_eq!((first.column, first.row), (0, 0));
        assert_eq!(first.date, today - Duration::days(363));
    }

    #[test]
    fn test_counts_are_looked_up_by_date() {
        let today = day(2026, 10, 18);
        let samples = vec![
            ActivitySample::new(today, 9),
            ActivitySample::new(day(2026, 10, 11), 2),
            ActivitySample::new(day(2020, 1, 1), 50),
        ];
        let grid = build_grid(&samples, today);

        assert_eq!(grid.cell(51, 6).unwrap().count, 9);
        assert_eq!(grid.cell(50, 6).unwrap().count, 2);
        assert_eq!(grid.total(), 11);
        assert_eq!(grid.active_days(), 2);
    }

    #[test]
    fn test_invalid_sample_dates_are_skipped() {
        let today = day(2026, 10, 18);
        let samples = vec![
            ActivitySample {
                date: "yesterday".to_string(),
                count: 5,
            },
            ActivitySample::new(today, 1),
        ];
        let grid = build_grid(&samples, today);
        assert_eq!(grid.total(), 1);
    }

    #[test]
    fn test_month_label_first_column_always_labeled() {
        let grid = build_grid(&[], day(2026, 10, 18));
        let first = grid.month_labels.first().unwrap();
        // column 0 row 0 is 2025-10-20
        assert_eq!((first.column, first.year, first.month), (0, 2025, 10));
    }

    #[test]
    fn test_month_labels_follow_transitions() {
        let grid = build_grid(&[], day(2026, 10, 18));
        // row-0 dates: 2025-10-20, 2025-10-27, 2025-11-03, ...
        let second = grid.month_labels[1];
        assert_eq!((second.column, second.month), (2, 11));

        for pair in grid.month_labels.windows(2) {
            assert!(pair[0].column < pair[1].column);
            assert_ne!(pair[0].month, pair[1].month);
        }
    }
}
