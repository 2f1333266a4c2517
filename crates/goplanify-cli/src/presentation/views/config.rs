use std::fmt;

use crate::presentation::view_models::{ConfigInitOutcome, ConfigInitViewModel, ConfigViewModel};

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
        let origin = if self.data.file_exists {
            ""
        } else {
            " (not created, showing defaults)"
        };
        writeln!(f, "Config file: {}{}", self.data.path, origin)?;
        writeln!(f)?;

        writeln!(f, "[store]")?;
        writeln!(f, "  source = {}", self.data.source)?;
        match self.data.fetch_timeout_ms {
            Some(ms) => writeln!(f, "  fetch_timeout_ms = {}", ms)?,
            None => writeln!(f, "  fetch_timeout_ms = (none)")?,
        }
        writeln!(f, "[preferences]")?;
        writeln!(f, "  theme = {}", self.data.theme)?;
        writeln!(f, "  language = {}", self.data.language)?;
        writeln!(f, "  notifications_enabled = {}", self.data.notifications_enabled)?;
        writeln!(f, "[display]")?;
        writeln!(f, "  screen_width_dp = {}", self.data.screen_width_dp)
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
        match self.data.outcome {
            ConfigInitOutcome::Created => writeln!(f, "Wrote {}", self.data.path),
            ConfigInitOutcome::Overwritten => writeln!(f, "Overwrote {}", self.data.path),
            ConfigInitOutcome::AlreadyExists => {
                writeln!(f, "{} already exists, left unchanged", self.data.path)
            }
        }
    }
}
