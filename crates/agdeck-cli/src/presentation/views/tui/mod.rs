//! TUI Views
//!
//! Ratatui widgets over view models. Views hold references only and do no
//! calculation beyond layout.

pub mod heatmap;
pub mod session_detail;
pub mod session_table;

pub use heatmap::HeatmapView;
pub use session_detail::SessionDetailView;
pub use session_table::SessionTableView;

use agdeck_types::SessionStatus;
use ratatui::style::Color;

pub(crate) fn status_color(status: SessionStatus) -> Color {
    match status {
        SessionStatus::Active => Color::Green,
        SessionStatus::Idle => Color::Yellow,
        SessionStatus::Completed => Color::Gray,
        SessionStatus::Failed => Color::Red,
    }
}

/// GitHub-style green ramp (ANSI 256)
pub(crate) fn intensity_color(intensity: u8) -> Color {
    match intensity {
        0 => Color::Indexed(236),
        1 => Color::Indexed(22),
        2 => Color::Indexed(28),
        3 => Color::Indexed(34),
        _ => Color::Indexed(40),
    }
}
