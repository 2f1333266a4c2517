mod ids;
mod map;
mod preferences;
mod trip;
mod user;

pub use ids::{ItemId, MapId, TripId, UserId};
pub use map::Map;
pub use preferences::Preferences;
pub use trip::{ItineraryItem, Trip, ensure_catalog, find_by_destination};
pub use user::User;
