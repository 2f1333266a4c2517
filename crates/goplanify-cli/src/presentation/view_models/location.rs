use serde::Serialize;
use std::fmt;

use super::CreateView;

#[derive(Debug, Clone, Serialize)]
pub struct LocationViewModel {
    pub map_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub direction: String,
    /// Human-readable line, e.g. `Latitud: 40.7, Longitud: -74.0, Dirección: 5th Ave`
    pub line: String,
}

impl CreateView for LocationViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::location::LocationView;
        Box::new(LocationView::new(self))
    }
}
