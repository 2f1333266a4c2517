pub mod common;
pub mod config;
pub mod demo;
pub mod location;
pub mod preferences;
pub mod result;
pub mod top_bar;
pub mod trip;

use std::fmt;

pub use common::{Guidance, StatusBadge, StatusLevel};
pub use config::{ConfigInitOutcome, ConfigInitViewModel, ConfigViewModel};
pub use demo::DemoViewModel;
pub use location::LocationViewModel;
pub use preferences::PreferencesViewModel;
pub use result::CommandResultViewModel;
pub use top_bar::{MenuItemViewModel, TitleStyle, TopBarViewModel};
pub use trip::{
    IntentViewModel, ItineraryEntryViewModel, SELECT_ACTION_LABEL, SelectionViewModel,
    TRIP_LIST_HEADING, TripCardViewModel, TripDetailViewModel, TripListStatus, TripListViewModel,
};

/// Pairs a view model with the view that lays it out as text
pub trait CreateView {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a>;
}
