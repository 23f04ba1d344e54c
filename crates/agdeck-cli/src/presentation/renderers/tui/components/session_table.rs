//! Session Table Component
//!
//! Wraps the engine's `DataTable`: digit keys activate column headers, Enter
//! activates the selected row.

use std::sync::mpsc::Sender;

use agdeck_engine::DataTable;
use agdeck_types::{SessionRecord, SortState};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect, widgets::TableState};

use crate::presentation::columns::session_columns;
use crate::presentation::presenters::present_session_table;
use crate::presentation::renderers::tui::DashboardEvent;
use crate::presentation::views::tui::SessionTableView;

pub struct SessionTableComponent {
    table: DataTable<SessionRecord>,
    /// Selection and scroll - PRIVATE
    state: TableState,
}

impl SessionTableComponent {
    /// Activated rows are reported on `events`
    pub fn new(sort: SortState, events: Sender<DashboardEvent>) -> Self {
        let mut table = DataTable::new(session_columns()).with_sort(sort);
        table.on_row_activate(move |record: &SessionRecord| {
            if events.send(DashboardEvent::OpenSession(record.id.clone())).is_err() {
                tracing::warn!(session = %record.id, "dashboard event channel closed");
            }
        });

        Self {
            table,
            state: TableState::default().with_selected(Some(0)),
        }
    }

    pub fn sort_state(&self) -> &SortState {
        self.table.sort_state()
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Returns true when the key was consumed
    pub fn handle_input(&mut self, key: KeyEvent, records: &[SessionRecord]) -> bool {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.next(records.len());
                true
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.previous();
                true
            }
            KeyCode::Home => {
                self.state.select(Some(0));
                true
            }
            KeyCode::End => {
                self.state.select(records.len().checked_sub(1));
                true
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                let Some(column) = self.table.columns().get(index) else {
                    return false;
                };
                let column_key = column.key().to_string();
                self.table.request_sort(&column_key);
                true
            }
            KeyCode::Enter => {
                self.activate_selected(records);
                true
            }
            _ => false,
        }
    }

    /// Render with data
    ///
    /// Performs index safety check before rendering.
    pub fn render(&mut self, f: &mut Frame, area: Rect, records: &[SessionRecord]) {
        self.clamp(records.len());

        let model = present_session_table(&self.table, records, None).content;
        let table = SessionTableView::new(&model).build_table();
        f.render_stateful_widget(table, area, &mut self.state);
    }

    fn activate_selected(&mut self, records: &[SessionRecord]) {
        self.clamp(records.len());
        let Some(selected) = self.state.selected() else {
            return;
        };

        let rows = self.table.rows(records);
        if let Some(record) = rows.get(selected).copied() {
            self.table.activate(record);
        }
    }

    fn clamp(&mut self, data_len: usize) {
        match self.state.selected() {
            _ if data_len == 0 => self.state.select(None),
            Some(selected) if selected >= data_len => self.state.select(Some(data_len - 1)),
            None => self.state.select(Some(0)),
            Some(_) => {}
        }
    }

    fn next(&mut self, data_len: usize) {
        if data_len == 0 {
            return;
        }

        let next = match self.state.selected() {
            Some(i) if i + 1 < data_len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.state.select(Some(next));
    }

    fn previous(&mut self) {
        let prev = match self.state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.state.select(Some(prev));
    }
}
