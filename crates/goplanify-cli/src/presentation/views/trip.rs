use std::fmt;

use crate::presentation::view_models::{
    SelectionViewModel, TripDetailViewModel, TripListStatus, TripListViewModel,
};

// --------------------------------------------------------
// Trip List View
// --------------------------------------------------------

pub struct TripListView<'a> {
    data: &'a TripListViewModel,
}

impl<'a> TripListView<'a> {
    pub fn new(data: &'a TripListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for TripListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.heading)?;

        match &self.data.status {
            TripListStatus::Loading => writeln!(f, "Loading trips...")?,
            TripListStatus::Failed { message } => {
                writeln!(f, "Could not load trips: {}", message)?
            }
            TripListStatus::Idle | TripListStatus::Ready => {}
        }

        if self.data.cards.is_empty() {
            if self.data.status != TripListStatus::Loading {
                writeln!(f)?;
                writeln!(f, "No trips available.")?;
            }
            return Ok(());
        }

        for card in &self.data.cards {
            writeln!(f)?;
            writeln!(f, "Trip to {}", card.destination)?;
            writeln!(f, "Things to do:")?;
            for activity in &card.activities {
                writeln!(f, "- {}", activity)?;
            }
            writeln!(f, "[{}]", card.action_label)?;
        }

        Ok(())
    }
}

// --------------------------------------------------------
// Trip Detail View
// --------------------------------------------------------

pub struct TripDetailView<'a> {
    data: &'a TripDetailViewModel,
}

impl<'a> TripDetailView<'a> {
    pub fn new(data: &'a TripDetailViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for TripDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Trip to {} ({})", self.data.destination, self.data.trip_id)?;
        writeln!(f, "Traveler: {}", self.data.user_name)?;
        writeln!(f)?;

        if self.data.items.is_empty() {
            writeln!(f, "No activities planned.")?;
            return Ok(());
        }

        writeln!(f, "{:<24} {:<24} {:<12} END", "ACTIVITY", "LOCATION", "START")?;
        writeln!(f, "{}", "-".repeat(72))?;
        for item in &self.data.items {
            writeln!(
                f,
                "{:<24} {:<24} {:<12} {}",
                item.name, item.location, item.start_date, item.end_date
            )?;
        }

        Ok(())
    }
}

// --------------------------------------------------------
// Selection View
// --------------------------------------------------------

pub struct SelectionView<'a> {
    data: &'a SelectionViewModel,
}

impl<'a> SelectionView<'a> {
    pub fn new(data: &'a SelectionViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for SelectionView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Selected trip to {}", self.data.destination)?;
        writeln!(f, "Navigate: {}", self.data.intent.route)
    }
}
