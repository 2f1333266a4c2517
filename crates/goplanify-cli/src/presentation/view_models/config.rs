use serde::Serialize;
use std::fmt;

use super::CreateView;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    pub file_exists: bool,
    pub source: String,
    pub fetch_timeout_ms: Option<u64>,
    pub theme: String,
    pub language: String,
    pub notifications_enabled: bool,
    pub screen_width_dp: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInitViewModel {
    pub path: String,
    pub outcome: ConfigInitOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigInitOutcome {
    Created,
    Overwritten,
    AlreadyExists,
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::config::ConfigView;
        Box::new(ConfigView::new(self))
    }
}

impl CreateView for ConfigInitViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::config::ConfigInitView;
        Box::new(ConfigInitView::new(self))
    }
}
