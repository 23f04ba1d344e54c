use serde::{Deserialize, Serialize};

/// Animation phase of a modal or popover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayPhase {
    Entering,
    Entered,
    Exiting,
    Exited,
}

impl OverlayPhase {
    /// Content stays mounted until the exit animation has finished
    pub fn should_render(self) -> bool {
        !matches!(self, OverlayPhase::Exited)
    }

    pub fn is_transitioning(self) -> bool {
        matches!(self, OverlayPhase::Entering | OverlayPhase::Exiting)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverlayState {
    pub phase: OverlayPhase,
    pub should_render: bool,
}

impl From<OverlayPhase> for OverlayState {
    fn from(phase: OverlayPhase) -> Self {
        Self {
            phase,
            should_render: phase.should_render(),
        }
    }
}
