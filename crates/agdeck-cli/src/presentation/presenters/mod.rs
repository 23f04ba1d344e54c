mod activity;
mod config;
mod session;

pub use activity::present_activity;
pub use config::{present_config, present_config_init};
pub use session::{present_column_headers, present_session_table};
