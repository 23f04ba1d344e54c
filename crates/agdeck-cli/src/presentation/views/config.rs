use std::fmt;

use crate::presentation::view_models::{ConfigInitViewModel, ConfigViewModel};

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Data dir:    {}", self.data.data_dir.display())?;
        write!(f, "Config file: {}", self.data.path.display())?;
        if !self.data.exists {
            write!(f, " (not found)")?;
        }
        writeln!(f)?;
        writeln!(f)?;

        let body = toml::to_string_pretty(&self.data.config).map_err(|_| fmt::Error)?;
        write!(f, "{}", body)
    }
}

pub struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
}

impl<'a> ConfigInitView<'a> {
    pub fn new(data: &'a ConfigInitViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let verb = if self.data.overwritten {
            "Overwrote"
        } else {
            "Created"
        };
        writeln!(f, "{} {}", verb, self.data.path.display())
    }
}
