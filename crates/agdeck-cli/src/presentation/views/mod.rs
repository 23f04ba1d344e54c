mod activity;
mod config;
mod session;
pub mod tui;

pub use activity::{ActivityHeatmapView, intensity_glyph};
pub use config::{ConfigInitView, ConfigView};
pub use session::SessionTableView;
