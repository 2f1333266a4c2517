use std::fmt;

use crate::presentation::view_models::{TitleStyle, TopBarViewModel};

pub struct TopBarView<'a> {
    data: &'a TopBarViewModel,
}

impl<'a> TopBarView<'a> {
    pub fn new(data: &'a TopBarViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for TopBarView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let style = match self.data.style {
            TitleStyle::Headline => "headline",
            TitleStyle::Compact => "compact",
        };

        for line in &self.data.lines {
            writeln!(f, "{}", line)?;
        }
        writeln!(
            f,
            "({} title, {} chars max)",
            style, self.data.max_chars
        )?;
        writeln!(f, "Home -> {}", self.data.home_route)?;
        writeln!(f, "Menu:")?;
        for item in &self.data.menu {
            writeln!(f, "  {:<20} -> {}", item.label, item.route)?;
        }

        Ok(())
    }
}
