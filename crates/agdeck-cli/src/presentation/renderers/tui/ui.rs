use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use agdeck_engine::Clock;
use agdeck_types::SortState;

use super::app::App;
use crate::presentation::views::tui::HeatmapView;

/// Layout: [header | session table | heatmap | footer], modal on top
pub(crate) fn draw<C: Clock>(f: &mut Frame, app: &mut App<C>) {
    let area = f.area();
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(HeatmapView::height()),
        Constraint::Length(1),
    ])
    .split(area);

    render_header(f, chunks[0], app.table.sort_state(), app.data.sessions.len());
    app.table.render(f, chunks[1], &app.data.sessions);
    f.render_widget(HeatmapView::new(&app.data.activity), chunks[2]);
    render_footer(f, chunks[3], app.detail.is_open());

    app.detail.render(f, area);
}

fn render_header(f: &mut Frame, area: Rect, sort: &SortState, session_count: usize) {
    let sort_text = match sort {
        SortState::Unsorted => "unsorted".to_string(),
        SortState::Sorted { key, direction } => format!("by {} {}", key, direction.arrow()),
    };

    let line = Line::from(vec![
        Span::styled(
            "━━ ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "agdeck",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} sessions, {}", session_count, sort_text),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            " ━━",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

fn render_footer(f: &mut Frame, area: Rect, modal_open: bool) {
    let hints = if modal_open {
        "Esc close │ q quit"
    } else {
        "j/k move │ 1-8 sort │ Enter details │ q quit"
    };
    f.render_widget(
        Paragraph::new(hints).style(Style::default().add_modifier(Modifier::DIM)),
        area,
    );
}
