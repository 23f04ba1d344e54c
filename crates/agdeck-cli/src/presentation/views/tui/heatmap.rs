//! 52-week activity heatmap widget

use agdeck_types::{GRID_DAYS, GRID_WEEKS};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Widget},
};

use crate::presentation::view_models::ActivityViewModel;

use super::intensity_color;

/// Two cells per week when there is room, one otherwise
const WIDE_CELL: &str = "■ ";
const NARROW_CELL: &str = "■";

pub struct HeatmapView<'a> {
    model: &'a ActivityViewModel,
}

impl<'a> HeatmapView<'a> {
    pub fn new(model: &'a ActivityViewModel) -> Self {
        Self { model }
    }

    /// Rows needed inside the block: month labels plus one per day row
    pub fn height() -> u16 {
        GRID_DAYS as u16 + 1 + 2
    }
}

impl<'a> Widget for HeatmapView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(
            " Activity: {} sessions, {} active days ",
            self.model.total, self.model.active_days
        );
        let block = Block::default().title(title).borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 2 || inner.width == 0 {
            return;
        }

        let (glyph, cell_width) = if inner.width as usize >= GRID_WEEKS * 2 {
            (WIDE_CELL, 2u16)
        } else {
            (NARROW_CELL, 1u16)
        };

        // Narrow terminals show the most recent weeks
        let visible = GRID_WEEKS.min((inner.width / cell_width) as usize);
        let first_column = GRID_WEEKS - visible;
        let x_of = |column: usize| inner.x + (column - first_column) as u16 * cell_width;

        let label_style = Style::default().fg(Color::DarkGray);
        let mut next_free = inner.x;
        for label in &self.model.month_labels {
            if label.column < first_column {
                continue;
            }
            let x = x_of(label.column);
            if x < next_free || x + 3 > inner.x + inner.width {
                continue;
            }
            buf.set_string(x, inner.y, &label.name, label_style);
            next_free = x + label.name.chars().count() as u16 + 1;
        }

        for cell in &self.model.cells {
            if cell.column < first_column {
                continue;
            }
            let y = inner.y + 1 + cell.row as u16;
            if y >= inner.y + inner.height {
                continue;
            }
            let style = Style::default().fg(intensity_color(cell.intensity));
            buf.set_string(x_of(cell.column), y, glyph, style);
        }
    }
}
