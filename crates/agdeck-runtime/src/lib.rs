pub mod config;
pub mod error;
pub mod source;

pub use config::{Config, DashboardConfig, DataConfig, resolve_data_path};
pub use error::{Error, Result};
pub use source::{DashboardSource, JsonFileSource, aggregate_activity};
