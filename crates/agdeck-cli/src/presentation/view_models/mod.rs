pub mod activity;
pub mod common;
pub mod config;
pub mod result;
pub mod session;

pub use activity::{ActivityCellViewModel, ActivityViewModel, MonthLabelViewModel};
pub use common::{Guidance, StatusBadge, StatusLevel};
pub use config::{ConfigInitViewModel, ConfigViewModel};
pub use result::CommandResultViewModel;
pub use session::{ColumnHeaderViewModel, SessionRowViewModel, SessionTableViewModel};
