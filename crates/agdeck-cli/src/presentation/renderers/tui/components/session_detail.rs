//! Session Detail Component
//!
//! A modal over the dashboard. Its visibility is driven by an
//! `OverlayController`, so closing plays the exit phase before the modal
//! disappears.

use std::time::{Duration, Instant};

use agdeck_engine::{Clock, OverlayController, SystemClock};
use agdeck_types::{OverlayPhase, SessionRecord};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect};

use crate::presentation::views::tui::SessionDetailView;

pub struct SessionDetailComponent<C: Clock = SystemClock> {
    overlay: OverlayController<C>,
    /// Kept until the exit phase finishes so the closing frame has content
    record: Option<SessionRecord>,
}

impl SessionDetailComponent<SystemClock> {
    pub fn new(duration: Duration) -> Self {
        Self::with_clock(duration, SystemClock)
    }
}

impl<C: Clock> SessionDetailComponent<C> {
    pub fn with_clock(duration: Duration, clock: C) -> Self {
        Self {
            overlay: OverlayController::with_clock(false, duration, clock),
            record: None,
        }
    }

    pub fn open(&mut self, record: SessionRecord) {
        tracing::debug!(session = %record.id, "opening session detail");
        self.record = Some(record);
        self.overlay.set_open(true);
    }

    pub fn close(&mut self) {
        self.overlay.set_open(false);
    }

    /// Open intent, regardless of the current phase
    pub fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    pub fn phase(&self) -> OverlayPhase {
        self.overlay.phase()
    }

    pub fn is_visible(&self) -> bool {
        self.overlay.should_render() && self.record.is_some()
    }

    pub fn record(&self) -> Option<&SessionRecord> {
        self.record.as_ref()
    }

    /// When the next phase change is due, if one is scheduled
    pub fn next_deadline(&self) -> Option<Instant> {
        self.overlay.next_deadline()
    }

    /// Returns true when the key was consumed
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        if !self.overlay.is_open() {
            return false;
        }

        if key.code == KeyCode::Esc {
            self.close();
        }
        // Modal: swallow everything while open
        true
    }

    /// Run due phase transitions. Returns true when the phase changed.
    pub fn tick(&mut self) -> bool {
        let changed = self.overlay.tick();
        if changed && self.overlay.phase() == OverlayPhase::Exited {
            self.record = None;
        }
        changed
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        if !self.overlay.should_render() {
            return;
        }
        if let Some(record) = &self.record {
            f.render_widget(SessionDetailView::new(record, self.overlay.phase()), area);
        }
    }
}
