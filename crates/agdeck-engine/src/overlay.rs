//! Overlay lifecycle controller
//!
//! Four-phase state machine behind every modal and popover:
//!
//! ```text
//!            set_open(true)          tick()
//!  Exited ─────────────────▶ Entering ──────▶ Entered
//!     ▲                         ▲                │
//!     │ tick() after duration   │ set_open(true) │ set_open(false)
//!     │                         │                ▼
//!     └──────────────────────── Exiting ◀────────┘
//! ```
//!
//! The controller owns at most one piece of scheduled work. Every intent
//! change replaces it, so a superseded exit timer can never fire.

use std::time::{Duration, Instant};

use agdeck_types::{OverlayPhase, OverlayState};

use crate::clock::{Clock, SystemClock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScheduledWork {
    /// Advance `Entering` to `Entered` at the next tick
    EnterFrame,
    /// Finish the exit once the deadline has passed
    ExitTimer { deadline: Instant },
}

pub struct OverlayController<C: Clock = SystemClock> {
    open: bool,
    phase: OverlayPhase,
    duration: Duration,
    pending: Option<ScheduledWork>,
    clock: C,
}

impl OverlayController<SystemClock> {
    pub fn new(open: bool, duration: Duration) -> Self {
        Self::with_clock(open, duration, SystemClock)
    }
}

impl<C: Clock> OverlayController<C> {
    pub fn with_clock(open: bool, duration: Duration, clock: C) -> Self {
        let phase = if open {
            OverlayPhase::Entered
        } else {
            OverlayPhase::Exited
        };
        Self {
            open,
            phase,
            duration,
            pending: None,
            clock,
        }
    }

    /// Apply the owner's open intent. Only changes of intent have an effect.
    pub fn set_open(&mut self, open: bool) {
        if open == self.open {
            return;
        }
        self.open = open;
        self.cancel_pending();

        if open {
            self.phase = OverlayPhase::Entering;
            self.pending = Some(ScheduledWork::EnterFrame);
        } else {
            self.phase = OverlayPhase::Exiting;
            self.pending = Some(ScheduledWork::ExitTimer {
                deadline: self.clock.now() + self.duration,
            });
        }
        tracing::trace!(open, phase = ?self.phase, "overlay intent changed");
    }

    /// A scheduling opportunity: run pending work that is due.
    ///
    /// Returns `true` when the phase changed.
    pub fn tick(&mut self) -> bool {
        let Some(work) = self.pending else {
            return false;
        };

        let next = match work {
            ScheduledWork::EnterFrame => OverlayPhase::Entered,
            ScheduledWork::ExitTimer { deadline } if self.clock.now() >= deadline => {
                OverlayPhase::Exited
            }
            ScheduledWork::ExitTimer { .. } => return false,
        };

        self.pending = None;
        self.phase = next;
        tracing::trace!(phase = ?self.phase, "overlay phase advanced");
        true
    }

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    /// False only once the exit has completed
    pub fn should_render(&self) -> bool {
        self.phase.should_render()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn state(&self) -> OverlayState {
        OverlayState::from(self.phase)
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn has_pending_work(&self) -> bool {
        self.pending.is_some()
    }

    /// When the owner should call `tick()` next, if anything is pending
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.pending? {
            ScheduledWork::EnterFrame => Some(self.clock.now()),
            ScheduledWork::ExitTimer { deadline } => Some(deadline),
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(work) = self.pending.take() {
            tracing::trace!(?work, "cancelled overlay work");
        }
    }
}

impl<C: Clock> Drop for OverlayController<C> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
