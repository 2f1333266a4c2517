use std::fmt;

use super::top_bar::TopBarView;
use super::trip::{SelectionView, TripListView};
use crate::presentation::view_models::DemoViewModel;

pub struct DemoView<'a> {
    data: &'a DemoViewModel,
}

impl<'a> DemoView<'a> {
    pub fn new(data: &'a DemoViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for DemoView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", TopBarView::new(&self.data.top_bar))?;

        for render in &self.data.renders {
            writeln!(f)?;
            writeln!(f, "--- render (revision {}) ---", render.revision)?;
            write!(f, "{}", TripListView::new(render))?;
        }

        if let Some(selection) = &self.data.selection {
            writeln!(f)?;
            write!(f, "{}", SelectionView::new(selection))?;
        }

        Ok(())
    }
}
