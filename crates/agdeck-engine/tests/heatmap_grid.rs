use std::collections::HashSet;

use agdeck_engine::{build_grid, intensity_bucket, month_labels};
use agdeck_types::{ActivitySample, GRID_DAYS, GRID_WEEKS};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// One anchor per weekday plus a leap-year crossing
fn anchors() -> Vec<NaiveDate> {
    let mut anchors: Vec<NaiveDate> = (0..7)
        .map(|i| day(2026, 10, 12) + Duration::days(i))
        .collect();
    anchors.push(day(2024, 3, 1));
    anchors.push(day(2025, 1, 1));
    anchors
}

#[test]
fn test_grid_shape_for_any_weekday() {
    let weekdays: HashSet<Weekday> = anchors().iter().take(7).map(|d| d.weekday()).collect();
    assert_eq!(weekdays.len(), 7);

    for today in anchors() {
        let grid = build_grid(&[], today);
        assert_eq!(grid.cells.len(), 364, "anchor {}", today);

        let last = grid.cell(51, 6).unwrap();
        assert_eq!(last.date, today);

        for (index, cell) in grid.cells.iter().enumerate() {
            assert_eq!(cell.column, index / GRID_DAYS);
            assert_eq!(cell.row, index % GRID_DAYS);
        }
    }
}

#[test]
fn test_adjacent_columns_are_one_week_apart() {
    for today in anchors() {
        let grid = build_grid(&[], today);
        for column in 1..GRID_WEEKS {
            for row in 0..GRID_DAYS {
                let prev = grid.cell(column - 1, row).unwrap();
                let next = grid.cell(column, row).unwrap();
                assert_eq!(next.date - prev.date, Duration::days(7));
            }
        }
    }
}

#[test]
fn test_rows_are_consecutive_days() {
    let grid = build_grid(&[], day(2026, 10, 18));
    for pair in grid.cells.windows(2) {
        assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
    }
}

#[test]
fn test_window_excludes_day_364() {
    let today = day(2026, 10, 18);
    let samples = vec![
        ActivitySample::new(today - Duration::days(363), 3),
        ActivitySample::new(today - Duration::days(364), 40),
        ActivitySample::new(today + Duration::days(1), 40),
    ];
    let grid = build_grid(&samples, today);
    assert_eq!(grid.total(), 3);
    assert_eq!(grid.cell(0, 0).unwrap().count, 3);
}

#[test]
fn test_duplicate_dates_last_sample_wins() {
    let today = day(2026, 10, 18);
    let samples = vec![ActivitySample::new(today, 2), ActivitySample::new(today, 7)];
    let grid = build_grid(&samples, today);
    assert_eq!(grid.today().unwrap().count, 7);
}

#[test]
fn test_bucket_is_monotonic_step_function() {
    let mut previous = 0;
    for count in 0..64 {
        let bucket = intensity_bucket(count);
        assert!(bucket >= previous);
        assert!(bucket <= 4);
        previous = bucket;
    }
    assert_eq!(
        [0, 3, 4, 7, 8, 15, 16].map(intensity_bucket),
        [0, 1, 2, 2, 3, 3, 4]
    );
}

#[test]
fn test_month_labels_only_from_top_row() {
    let grid = build_grid(&[], day(2026, 10, 18));
    for label in &grid.month_labels {
        let top = grid.cell(label.column, 0).unwrap();
        assert_eq!(top.date.month(), label.month);
        assert_eq!(top.date.year(), label.year);
    }
}

#[test]
fn test_month_without_top_row_cell_is_not_forced() {
    // Only a February row-0 cell would label February; drop them and the
    // label disappears instead of being placed on another row.
    let grid = build_grid(&[], day(2026, 10, 18));
    let without_february: Vec<_> = grid
        .cells
        .iter()
        .copied()
        .filter(|c| !(c.row == 0 && c.date.month() == 2))
        .collect();

    let labels = month_labels(&without_february);
    assert!(labels.iter().all(|l| l.month != 2));
    assert!(labels.iter().any(|l| l.month == 1));
    assert!(labels.iter().any(|l| l.month == 3));
}

#[test]
fn test_labels_never_repeat_adjacent_month() {
    let grid = build_grid(&[], day(2025, 12, 31));
    for pair in grid.month_labels.windows(2) {
        assert_ne!(pair[0].month, pair[1].month);
    }
    assert!(grid.month_labels.len() <= 13);
}
