//! Session detail modal

use agdeck_types::{MISSING_PLACEHOLDER, OverlayPhase, SessionRecord};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::presentation::formatters::{
    format_compact, format_cost, format_duration, format_local_timestamp,
};

use super::status_color;

pub struct SessionDetailView<'a> {
    record: &'a SessionRecord,
    phase: OverlayPhase,
}

impl<'a> SessionDetailView<'a> {
    pub fn new(record: &'a SessionRecord, phase: OverlayPhase) -> Self {
        Self { record, phase }
    }

    /// Entered is drawn solid; the transitions are drawn dimmed
    fn border_style(&self) -> Style {
        match self.phase {
            OverlayPhase::Entered => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            _ => Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let record = self.record;
        let missing = || MISSING_PLACEHOLDER.to_string();
        let field = |name: &'static str, value: String| {
            Line::from(vec![
                Span::styled(format!("{:<10}", name), Style::default().fg(Color::Gray)),
                Span::raw(value),
            ])
        };

        vec![
            field("Agent", record.agent.clone()),
            field("Project", record.project.clone().unwrap_or_else(missing)),
            Line::from(vec![
                Span::styled(format!("{:<10}", "Status"), Style::default().fg(Color::Gray)),
                Span::styled(
                    record.status.as_str(),
                    Style::default().fg(status_color(record.status)),
                ),
            ]),
            field(
                "Started",
                record
                    .started_at
                    .as_ref()
                    .map(format_local_timestamp)
                    .unwrap_or_else(missing),
            ),
            field(
                "Duration",
                record.duration_secs.map(format_duration).unwrap_or_else(missing),
            ),
            field(
                "Tokens",
                record
                    .tokens
                    .map(|t| format_compact(t as i64))
                    .unwrap_or_else(missing),
            ),
            field("Cost", record.cost_usd.map(format_cost).unwrap_or_else(missing)),
            Line::raw(""),
            Line::styled(
                "Esc to close",
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]
    }
}

impl<'a> Widget for SessionDetailView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = centered_rect(50, 50, area);
        Clear.render(modal, buf);

        let block = Block::default()
            .title(format!(" {} ", self.record.id))
            .borders(Borders::ALL)
            .border_style(self.border_style());

        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: true })
            .render(modal, buf);
    }
}

/// Rect of `percent_x` × `percent_y` centred in `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
