use agdeck_engine::DataTable;
use agdeck_types::SessionRecord;

use crate::presentation::view_models::{
    ColumnHeaderViewModel, CommandResultViewModel, SessionRowViewModel, SessionTableViewModel,
};

pub fn present_column_headers(table: &DataTable<SessionRecord>) -> Vec<ColumnHeaderViewModel> {
    let sort = table.sort_state();
    table
        .columns()
        .iter()
        .map(|column| ColumnHeaderViewModel {
            key: column.key().to_string(),
            label: column.label().to_string(),
            width: column.width(),
            sort: sort.direction_for(column.key()),
        })
        .collect()
}

pub fn present_session_table(
    table: &DataTable<SessionRecord>,
    sessions: &[SessionRecord],
    limit: Option<usize>,
) -> CommandResultViewModel<SessionTableViewModel> {
    let rendered = table.render(sessions);
    let total_count = rendered.len();

    let rows: Vec<SessionRowViewModel> = rendered
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|row| SessionRowViewModel {
            id: row.id().to_string(),
            cells: row.cells,
            record: row.record.clone(),
        })
        .collect();

    let shown = rows.len();
    let content = SessionTableViewModel {
        columns: present_column_headers(table),
        sort: table.sort_state().clone(),
        rows,
        total_count,
    };

    if total_count == 0 {
        return CommandResultViewModel::warning(content, "No sessions published yet")
            .with_note("The backend writes sessions.json into the data directory")
            .with_tip("Check where agdeck reads from", "agdeck config show");
    }

    let label = if shown < total_count {
        format!("{} of {} sessions", shown, total_count)
    } else {
        format!("{} sessions", total_count)
    };

    let mut result = CommandResultViewModel::info(content, label);
    if !table.sort_state().is_sorted() {
        result = result.with_tip("Sort by a column", "agdeck sessions --sort cost --desc");
    }
    result
}
