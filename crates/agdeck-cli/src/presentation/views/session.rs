use std::fmt;

use crate::presentation::view_models::SessionTableViewModel;

// --------------------------------------------------------
// Session Table View
// --------------------------------------------------------

pub struct SessionTableView<'a> {
    data: &'a SessionTableViewModel,
}

impl<'a> SessionTableView<'a> {
    pub fn new(data: &'a SessionTableViewModel) -> Self {
        Self { data }
    }

    fn header_text(&self, index: usize) -> String {
        let column = &self.data.columns[index];
        match column.sort {
            Some(direction) => format!("{} {}", column.label, direction.arrow()),
            None => column.label.clone(),
        }
    }

    fn column_widths(&self) -> Vec<usize> {
        (0..self.data.columns.len())
            .map(|index| {
                let header = self.header_text(index).chars().count();
                self.data
                    .rows
                    .iter()
                    .filter_map(|row| row.cells.get(index))
                    .map(|cell| cell.chars().count())
                    .fold(header, usize::max)
            })
            .collect()
    }
}

impl<'a> fmt::Display for SessionTableView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.rows.is_empty() {
            writeln!(f, "No sessions found.")?;
            return Ok(());
        }

        let widths = self.column_widths();

        let header: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(index, width)| format!("{:<width$}", self.header_text(index), width = width))
            .collect();
        writeln!(f, "{}", header.join("  ").trim_end())?;

        let rule_width = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        writeln!(f, "{}", "-".repeat(rule_width))?;

        for row in &self.data.rows {
            let cells: Vec<String> = widths
                .iter()
                .zip(&row.cells)
                .map(|(width, cell)| format!("{:<width$}", cell, width = width))
                .collect();
            writeln!(f, "{}", cells.join("  ").trim_end())?;
        }

        if self.data.rows.len() < self.data.total_count {
            writeln!(
                f,
                "\n({} more not shown)",
                self.data.total_count - self.data.rows.len()
            )?;
        }

        Ok(())
    }
}
