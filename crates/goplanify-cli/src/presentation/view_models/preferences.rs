use serde::Serialize;
use std::fmt;

use super::CreateView;

#[derive(Debug, Clone, Serialize)]
pub struct PreferencesViewModel {
    pub user_id: String,
    pub theme: String,
    pub preferred_language: String,
    pub notifications_enabled: bool,
    /// True when this invocation changed the record
    pub updated: bool,
}

impl CreateView for PreferencesViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::preferences::PreferencesView;
        Box::new(PreferencesView::new(self))
    }
}
