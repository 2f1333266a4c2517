use serde::Serialize;
use std::fmt;

use super::CreateView;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopBarViewModel {
    /// Title as laid out, with a line break when wrapped
    pub title: String,
    pub lines: Vec<String>,
    pub wrapped: bool,
    pub style: TitleStyle,
    pub max_chars: usize,
    pub home_route: String,
    pub menu: Vec<MenuItemViewModel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleStyle {
    /// Large single-line title
    Headline,
    /// Smaller style used when the title wraps
    Compact,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItemViewModel {
    pub label: String,
    pub route: String,
}

impl CreateView for TopBarViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::top_bar::TopBarView;
        Box::new(TopBarView::new(self))
    }
}
