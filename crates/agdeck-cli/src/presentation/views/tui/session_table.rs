//! Session table widget

use ratatui::{
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::presentation::view_models::SessionTableViewModel;

use super::status_color;

const STATUS_COLUMN: &str = "status";

pub struct SessionTableView<'a> {
    model: &'a SessionTableViewModel,
}

impl<'a> SessionTableView<'a> {
    pub fn new(model: &'a SessionTableViewModel) -> Self {
        Self { model }
    }

    /// Build a Table widget for stateful rendering
    pub fn build_table(self) -> Table<'a> {
        let header = Row::new(self.model.columns.iter().enumerate().map(|(index, column)| {
            let text = match column.sort {
                Some(direction) => format!("{} {} {}", index + 1, column.label, direction.arrow()),
                None => format!("{} {}", index + 1, column.label),
            };
            let style = if column.sort.is_some() {
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            Cell::from(Span::styled(text, style))
        }));

        let status_index = self
            .model
            .columns
            .iter()
            .position(|c| c.key == STATUS_COLUMN);

        let rows = self.model.rows.iter().map(|row| {
            Row::new(row.cells.iter().enumerate().map(|(index, cell)| {
                if Some(index) == status_index {
                    Cell::from(Span::styled(
                        cell.as_str(),
                        Style::default().fg(status_color(row.record.status)),
                    ))
                } else {
                    Cell::from(cell.as_str())
                }
            }))
        });

        let widths = self
            .model
            .columns
            .iter()
            .map(|c| Constraint::Length(c.width.unwrap_or(10) + 2));

        let title = format!(" Sessions ({}) ", self.model.total_count);

        Table::new(rows, widths)
            .header(header)
            .block(Block::default().title(title).borders(Borders::ALL))
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    }
}
