//! Sample data for tests.

use goplanify_types::{Trip, User};

pub fn traveler() -> User {
    User::new("u1", "Ana")
}

/// Trip with an empty itinerary
pub fn trip(id: &str, destination: &str) -> Trip {
    Trip::new(id, destination, traveler())
}

/// Trip whose itinerary holds one item per activity name
pub fn trip_with_activities(id: &str, destination: &str, activities: &[&str]) -> Trip {
    activities
        .iter()
        .enumerate()
        .fold(trip(id, destination), |trip, (index, name)| {
            let item_id = format!("{}-i{}", id, index + 1);
            trip.plan(item_id, *name, destination, "", "")
        })
}

/// Three trips with distinct destinations
pub fn sample_catalog() -> Vec<Trip> {
    vec![
        trip_with_activities("t1", "Paris", &["Louvre", "Eiffel Tower"]),
        trip_with_activities("t2", "Rome", &["Colosseum"]),
        trip("t3", "Tokyo"),
    ]
}

/// Two trips sharing a destination, for first-match checks
pub fn catalog_with_repeated_destination() -> Vec<Trip> {
    vec![
        trip_with_activities("t1", "Paris", &["Louvre"]),
        trip_with_activities("t2", "Paris", &["Orsay"]),
    ]
}
