pub mod config;
pub mod demo;
pub mod location;
pub mod preferences;
pub mod top_bar;
pub mod trip;

pub use config::{ConfigInitView, ConfigView};
pub use demo::DemoView;
pub use location::LocationView;
pub use preferences::PreferencesView;
pub use top_bar::TopBarView;
pub use trip::{SelectionView, TripDetailView, TripListView};
