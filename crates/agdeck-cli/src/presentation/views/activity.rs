use std::fmt;

use agdeck_types::{GRID_DAYS, GRID_WEEKS};

use crate::presentation::view_models::ActivityViewModel;

/// One character per intensity level, lightest first
const GLYPHS: [char; 5] = ['·', '░', '▒', '▓', '█'];

pub fn intensity_glyph(intensity: u8) -> char {
    GLYPHS[usize::from(intensity).min(GLYPHS.len() - 1)]
}

// --------------------------------------------------------
// Activity Heatmap View
// --------------------------------------------------------

pub struct ActivityHeatmapView<'a> {
    data: &'a ActivityViewModel,
}

impl<'a> ActivityHeatmapView<'a> {
    pub fn new(data: &'a ActivityViewModel) -> Self {
        Self { data }
    }

    /// Month names positioned over their columns. A label that would run
    /// into the previous one is dropped.
    fn month_row(&self) -> String {
        let mut row: Vec<char> = vec![' '; GRID_WEEKS + 3];
        let mut next_free = 0;
        for label in &self.data.month_labels {
            if label.column < next_free {
                continue;
            }
            for (offset, ch) in label.name.chars().enumerate() {
                if let Some(slot) = row.get_mut(label.column + offset) {
                    *slot = ch;
                }
            }
            next_free = label.column + label.name.chars().count() + 1;
        }
        row.into_iter().collect::<String>().trim_end().to_string()
    }
}

impl<'a> fmt::Display for ActivityHeatmapView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.month_row())?;

        for row in 0..GRID_DAYS {
            let line: String = (0..GRID_WEEKS)
                .map(|column| {
                    self.data
                        .cells
                        .get(column * GRID_DAYS + row)
                        .map(|cell| intensity_glyph(cell.intensity))
                        .unwrap_or(' ')
                })
                .collect();
            writeln!(f, "{}", line)?;
        }

        writeln!(f)?;
        let legend: String = GLYPHS.iter().collect();
        writeln!(f, "Less {} More", legend)?;
        writeln!(
            f,
            "{} sessions on {} active days, ending {}",
            self.data.total, self.data.active_days, self.data.today
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{ActivityCellViewModel, MonthLabelViewModel};
    use chrono::{Duration, NaiveDate};

    fn label(column: usize, month: u32, name: &str) -> MonthLabelViewModel {
        MonthLabelViewModel {
            column,
            year: 2026,
            month,
            name: name.to_string(),
        }
    }

    fn model(labels: Vec<MonthLabelViewModel>) -> ActivityViewModel {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let cells = (0..GRID_WEEKS * GRID_DAYS)
            .map(|index| ActivityCellViewModel {
                date: today - Duration::days((GRID_WEEKS * GRID_DAYS - 1 - index) as i64),
                count: 0,
                column: index / GRID_DAYS,
                row: index % GRID_DAYS,
                intensity: if index == GRID_WEEKS * GRID_DAYS - 1 { 4 } else { 0 },
            })
            .collect();

        ActivityViewModel {
            today,
            cells,
            month_labels: labels,
            total: 0,
            active_days: 0,
        }
    }

    #[test]
    fn test_grid_rows() {
        let data = model(vec![]);
        let text = ActivityHeatmapView::new(&data).to_string();
        let lines: Vec<&str> = text.lines().collect();

        // month row, 7 grid rows, blank, legend, summary
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[1].chars().count(), GRID_WEEKS);
        assert!(lines[7].ends_with('█'));
        assert!(lines[6].ends_with('·'));
    }

    #[test]
    fn test_overlapping_month_label_is_dropped() {
        let data = model(vec![label(0, 10, "Oct"), label(2, 11, "Nov"), label(6, 12, "Dec")]);
        let row = ActivityHeatmapView::new(&data).month_row();
        assert_eq!(row, "Oct   Dec");
    }

    #[test]
    fn test_intensity_glyph_clamps() {
        assert_eq!(intensity_glyph(0), '·');
        assert_eq!(intensity_glyph(4), '█');
        assert_eq!(intensity_glyph(9), '█');
    }
}
