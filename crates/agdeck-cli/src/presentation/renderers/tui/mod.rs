//! TUI renderer for the dashboard command
//!
//! Owns the terminal and the event loop. Input goes to the `App`, which
//! routes it to components; components report row activation back through
//! a channel that the loop drains after every input poll.
//!
//! Time-driven state only advances after a frame has been drawn, so every
//! overlay phase reaches the screen at least once.

mod app;
mod components;
mod event;
mod ui;

use std::io;
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self as term_event, Event, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};

use agdeck_engine::Clock;
use app::App;
pub use app::{DashboardData, DashboardOptions};
pub use event::DashboardEvent;

pub struct DashboardRenderer {
    options: DashboardOptions,
}

impl DashboardRenderer {
    pub fn new(options: DashboardOptions) -> Self {
        Self { options }
    }

    pub fn run(self, data: DashboardData) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let result = self.event_loop(&mut terminal, data);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        data: DashboardData,
    ) -> Result<()> {
        let (tx, rx) = mpsc::channel();
        let mut app = App::new(data, &self.options, tx);
        let tick_rate = self.options.tick_rate;
        let mut last_tick = Instant::now();

        while !app.should_quit {
            let changed = present(terminal, &mut app)?;

            let timeout = if changed {
                Duration::ZERO
            } else {
                app.poll_timeout(tick_rate, last_tick)
            };
            let key = if term_event::poll(timeout)? {
                match term_event::read()? {
                    Event::Key(key) => Some(key),
                    _ => None,
                }
            } else {
                None
            };
            dispatch(&mut app, key, &rx);

            if last_tick.elapsed() >= tick_rate {
                last_tick = Instant::now();
            }
        }

        tracing::debug!("dashboard closed");
        Ok(())
    }
}

/// Draw one frame, then give time-driven state its scheduling opportunity.
///
/// Returns whether the tick changed anything, in which case the caller
/// redraws without waiting for input.
fn present<B: Backend, C: Clock>(terminal: &mut Terminal<B>, app: &mut App<C>) -> Result<bool> {
    terminal.draw(|f| ui::draw(f, app))?;
    Ok(app.tick())
}

/// Route input, then apply whatever the components reported
fn dispatch<C: Clock>(app: &mut App<C>, key: Option<KeyEvent>, rx: &Receiver<DashboardEvent>) {
    if let Some(key) = key {
        app.handle_key(key);
    }
    while let Ok(event) = rx.try_recv() {
        app.handle_event(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::ActivityViewModel;
    use agdeck_engine::ManualClock;
    use agdeck_types::{OverlayPhase, SessionRecord, SessionStatus, SortState};
    use chrono::NaiveDate;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn data() -> DashboardData {
        let session = |id: &str| SessionRecord {
            id: id.to_string(),
            agent: "claude".to_string(),
            project: None,
            status: SessionStatus::Active,
            started_at: None,
            duration_secs: None,
            tokens: None,
            cost_usd: None,
        };
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

    fn press(code: KeyCode) -> Option<KeyEvent> {
        Some(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_every_overlay_phase_is_drawn() {
        let (tx, rx) = mpsc::channel();
        let clock = ManualClock::new();
        let mut app = App::with_clock(data(), &options(), tx, clock.clone());
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();

        let inputs = [
            press(KeyCode::Enter),
            None,
            press(KeyCode::Esc),
            None,
            None,
        ];
        let mut drawn = Vec::new();
        for (frame, key) in inputs.into_iter().enumerate() {
            drawn.push(app.detail.phase());
            if frame == 3 {
                clock.advance(Duration::from_millis(200));
            }
            present(&mut terminal, &mut app).unwrap();
            dispatch(&mut app, key, &rx);
        }

        assert_eq!(
            drawn,
            vec![
                OverlayPhase::Exited,
                OverlayPhase::Entering,
                OverlayPhase::Entered,
                OverlayPhase::Exiting,
                OverlayPhase::Exited,
            ]
        );
    }

    #[test]
    fn test_tick_after_opening_waits_for_a_frame() {
        let (tx, rx) = mpsc::channel();
        let mut app = App::with_clock(data(), &options(), tx, ManualClock::new());
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();

        assert!(!present(&mut terminal, &mut app).unwrap());
        dispatch(&mut app, press(KeyCode::Enter), &rx);
        assert_eq!(app.detail.phase(), OverlayPhase::Entering);

        assert!(present(&mut terminal, &mut app).unwrap());
        assert_eq!(app.detail.phase(), OverlayPhase::Entered);
    }
}
