use agdeck_engine::intensity_bucket;
use agdeck_types::HeatmapGrid;
use chrono::NaiveDate;

use crate::presentation::view_models::{
    ActivityCellViewModel, ActivityViewModel, CommandResultViewModel, MonthLabelViewModel,
};

pub fn present_activity(
    grid: &HeatmapGrid,
    today: NaiveDate,
) -> CommandResultViewModel<ActivityViewModel> {
    let cells = grid
        .cells
        .iter()
        .map(|cell| ActivityCellViewModel {
            date: cell.date,
            count: cell.count,
            column: cell.column,
            row: cell.row,
            intensity: intensity_bucket(cell.count),
        })
        .collect();

    let month_labels = grid
        .month_labels
        .iter()
        .map(|label| MonthLabelViewModel {
            column: label.column,
            year: label.year,
            month: label.month,
            name: label.short_name().to_string(),
        })
        .collect();

    let total = grid.total();
    let active_days = grid.active_days();
    let content = ActivityViewModel {
        today,
        cells,
        month_labels,
        total,
        active_days,
    };

    if total == 0 {
        return CommandResultViewModel::warning(content, "No activity in the last 52 weeks")
            .with_note("Activity is derived from sessions.json when activity.json is absent");
    }

    CommandResultViewModel::info(
        content,
        format!("{} sessions on {} days", total, active_days),
    )
}
