use serde::Serialize;
use std::fmt;

use super::CreateView;

pub const TRIP_LIST_HEADING: &str = "Choose Your Travel Package";
pub const SELECT_ACTION_LABEL: &str = "Select and Add to My Trips";

/// Render model of the trip list screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripListViewModel {
    pub heading: String,
    pub status: TripListStatus,
    pub cards: Vec<TripCardViewModel>,
    /// Store revision this model was derived from
    pub revision: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum TripListStatus {
    Idle,
    Loading,
    Ready,
    Failed { message: String },
}

impl TripListStatus {
    /// A fetch has finished, successfully or not
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Ready | Self::Failed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripCardViewModel {
    pub trip_id: String,
    pub destination: String,
    pub user_name: String,
    pub activities: Vec<String>,
    pub action_label: String,
}

/// One trip with its full itinerary
#[derive(Debug, Clone, Serialize)]
pub struct TripDetailViewModel {
    pub trip_id: String,
    pub destination: String,
    pub user_name: String,
    pub items: Vec<ItineraryEntryViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItineraryEntryViewModel {
    pub item_id: String,
    pub name: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentViewModel {
    pub screen: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trip_id: Option<String>,
    pub route: String,
}

/// Outcome of choosing a destination card
#[derive(Debug, Clone, Serialize)]
pub struct SelectionViewModel {
    pub destination: String,
    pub intent: IntentViewModel,
}

// --------------------------------------------------------
// CreateView Trait Implementations
// --------------------------------------------------------

impl CreateView for TripListViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::trip::TripListView;
        Box::new(TripListView::new(self))
    }
}

impl CreateView for TripDetailViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::trip::TripDetailView;
        Box::new(TripDetailView::new(self))
    }
}

impl CreateView for SelectionViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::trip::SelectionView;
        Box::new(SelectionView::new(self))
    }
}
