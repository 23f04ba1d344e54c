// Engine module - presentation primitives shared by every dashboard view.
// Pure and synchronous, except the overlay controller's scheduled work which
// only advances when its owner calls `tick()`.

pub mod clock;
pub mod heatmap;
pub mod overlay;
pub mod table;

pub use clock::{Clock, ManualClock, SystemClock};
pub use heatmap::{build_grid, build_grid_for_today, intensity_bucket, month_labels};
pub use overlay::OverlayController;
pub use table::{
    CellRenderer, Column, DataTable, RenderedRow, compare_values, next_sort_state, sort_records,
};

use agdeck_types::{Record, SortState};

// Façade API - Stable public interface for the CLI layer

/// Sort records and render every column, in one call
pub fn render_table<'a, R: Record>(
    records: &'a [R],
    columns: &[Column<R>],
    sort: &SortState,
) -> Vec<RenderedRow<'a, R>> {
    sort_records(records, sort)
        .into_iter()
        .map(|record| RenderedRow {
            record,
            cells: columns.iter().map(|c| c.render_cell(record)).collect(),
        })
        .collect()
}
