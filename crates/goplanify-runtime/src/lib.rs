pub mod config;
pub mod error;
pub mod preferences;
pub mod source;
pub mod store;
pub mod subscription;

pub use config::{Config, SourceKind, resolve_data_dir};
pub use error::{Error, FetchError, FetchErrorKind, Result};
pub use preferences::PreferencesCell;
pub use source::{StaticTripSource, TripSource, UnavailableSource};
pub use store::{FetchStatus, StoreConfig, TripStore, TripsState};
pub use subscription::{TripFeed, TripSubscription};
