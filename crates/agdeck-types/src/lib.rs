pub mod activity;
pub mod error;
pub mod overlay;
pub mod record;
pub mod session;
pub mod sort;

pub use activity::{
    ActivitySample, DATE_FORMAT, GRID_CELLS, GRID_DAYS, GRID_WEEKS, HeatmapCell, HeatmapGrid,
    MonthLabel,
};
pub use error::{Error, Result};
pub use overlay::{OverlayPhase, OverlayState};
pub use record::{MISSING_PLACEHOLDER, Record, Value};
pub use session::{SessionRecord, SessionStatus};
pub use sort::{SortDirection, SortState};
