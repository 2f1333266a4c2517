use serde::Serialize;
use std::fmt;

use super::{CreateView, SelectionViewModel, TopBarViewModel, TripListViewModel};

/// Everything the trip list screen produced while mounted
#[derive(Debug, Clone, Serialize)]
pub struct DemoViewModel {
    pub top_bar: TopBarViewModel,
    /// Render emissions in the order they were observed
    pub renders: Vec<TripListViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<SelectionViewModel>,
}

impl CreateView for DemoViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::demo::DemoView;
        Box::new(DemoView::new(self))
    }
}
