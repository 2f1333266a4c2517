use std::fmt;

use crate::presentation::view_models::LocationViewModel;

pub struct LocationView<'a> {
    data: &'a LocationViewModel,
}

impl<'a> LocationView<'a> {
    pub fn new(data: &'a LocationViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for LocationView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.line)
    }
}
