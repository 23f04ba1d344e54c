use agdeck_runtime::Config;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::presentation::views::{ConfigInitView, ConfigView};

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub data_dir: PathBuf,
    pub path: PathBuf,
    /// False when the values shown are built-in defaults
    pub exists: bool,
    pub config: Config,
}

#[derive(Debug, Serialize)]
pub struct ConfigInitViewModel {
    pub path: PathBuf,
    pub overwritten: bool,
}

impl fmt::Display for ConfigViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", ConfigView::new(self))
    }
}

impl fmt::Display for ConfigInitViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", ConfigInitView::new(self))
    }
}
