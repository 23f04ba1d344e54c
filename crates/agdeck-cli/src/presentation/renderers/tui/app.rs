use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use agdeck_engine::{Clock, SystemClock};
use agdeck_types::{SessionRecord, SortState};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::DashboardEvent;
use super::components::{SessionDetailComponent, SessionTableComponent};
use crate::presentation::view_models::ActivityViewModel;

/// Everything the dashboard shows, loaded once at startup
pub struct DashboardData {
    pub sessions: Vec<SessionRecord>,
    pub activity: ActivityViewModel,
}

#[derive(Debug, Clone)]
pub struct DashboardOptions {
    pub tick_rate: Duration,
    pub overlay_duration: Duration,
    pub initial_sort: SortState,
}

pub(crate) struct App<C: Clock = SystemClock> {
    pub(crate) data: DashboardData,
    pub(crate) table: SessionTableComponent,
    pub(crate) detail: SessionDetailComponent<C>,
    pub(crate) should_quit: bool,
}

impl App<SystemClock> {
    pub(crate) fn new(
        data: DashboardData,
        options: &DashboardOptions,
        events: Sender<DashboardEvent>,
    ) -> Self {
        Self::with_clock(data, options, events, SystemClock)
    }

    /// How long the loop may block waiting for input
    pub(crate) fn poll_timeout(&self, tick_rate: Duration, last_tick: Instant) -> Duration {
        let until_tick = tick_rate.saturating_sub(last_tick.elapsed());
        match self.detail.next_deadline() {
            Some(deadline) => until_tick.min(deadline.saturating_duration_since(Instant::now())),
            None => until_tick,
        }
    }
}

impl<C: Clock> App<C> {
    pub(crate) fn with_clock(
        data: DashboardData,
        options: &DashboardOptions,
        events: Sender<DashboardEvent>,
        clock: C,
    ) -> Self {
        Self {
            data,
            table: SessionTableComponent::new(options.initial_sort.clone(), events),
            detail: SessionDetailComponent::with_clock(options.overlay_duration, clock),
            should_quit: false,
        }
    }

    /// Route a key: the open modal first, then global keys, then the table
    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        if self.detail.handle_input(key) {
            return;
        }

        if key.code == KeyCode::Esc {
            self.should_quit = true;
            return;
        }

        self.table.handle_input(key, &self.data.sessions);
    }

    pub(crate) fn handle_event(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::OpenSession(id) => {
                match self.data.sessions.iter().find(|s| s.id == id) {
                    Some(record) => self.detail.open(record.clone()),
                    None => tracing::warn!(session = %id, "activated session not found"),
                }
            }
        }
    }

    /// Scheduling opportunity for time-driven state
    pub(crate) fn tick(&mut self) -> bool {
        self.detail.tick()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agdeck_engine::ManualClock;
    use agdeck_types::{OverlayPhase, SessionStatus};
    use chrono::NaiveDate;
    use std::sync::mpsc;

    fn session(id: &str) -> SessionRecord {
        SessionRecord {
            id: id.to_string(),
            agent: "claude".to_string(),
            project: None,
            status: SessionStatus::Idle,
            started_at: None,
            duration_secs: None,
            tokens: None,
            cost_usd: None,
        }
    }

    fn data() -> DashboardData {
        DashboardData {
            sessions: vec![session("s-1"), session("s-2")],
            activity: ActivityViewModel {
                today: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
                cells: Vec::new(),
                month_labels: Vec::new(),
                total: 0,
                active_days: 0,
            },
        }
    }

    fn options() -> DashboardOptions {
        DashboardOptions {
            tick_rate: Duration::from_millis(100),
            overlay_duration: Duration::from_millis(200),
            initial_sort: SortState::Unsorted,
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_opens_detail_through_channel() {
        let (tx, rx) = mpsc::channel();
        let clock = ManualClock::new();
        let mut app = App::with_clock(data(), &options(), tx, clock.clone());

        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Enter));
        while let Ok(event) = rx.try_recv() {
            app.handle_event(event);
        }
        assert_eq!(app.detail.phase(), OverlayPhase::Entering);
        assert_eq!(app.detail.record().map(|r| r.id.as_str()), Some("s-2"));

        assert!(app.tick());
        assert_eq!(app.detail.phase(), OverlayPhase::Entered);
    }

    #[test]
    fn test_esc_closes_modal_before_quitting() {
        let (tx, rx) = mpsc::channel();
        let clock = ManualClock::new();
        let mut app = App::with_clock(data(), &options(), tx, clock.clone());

        app.handle_key(press(KeyCode::Enter));
        app.handle_event(rx.try_recv().unwrap());
        app.tick();

        app.handle_key(press(KeyCode::Esc));
        assert!(!app.should_quit);
        assert_eq!(app.detail.phase(), OverlayPhase::Exiting);

        clock.advance(Duration::from_millis(200));
        app.tick();
        assert!(!app.detail.is_visible());

        app.handle_key(press(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_quits_even_with_modal_open() {
        let (tx, rx) = mpsc::channel();
        let mut app = App::with_clock(data(), &options(), tx, ManualClock::new());

        app.handle_key(press(KeyCode::Enter));
        app.handle_event(rx.try_recv().unwrap());
        app.handle_key(press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_unknown_session_is_ignored() {
        let (tx, _rx) = mpsc::channel();
        let mut app = App::with_clock(data(), &options(), tx, ManualClock::new());
        app.handle_event(DashboardEvent::OpenSession("missing".to_string()));
        assert!(!app.detail.is_open());
    }
}
