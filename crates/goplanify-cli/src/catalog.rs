//! Built-in travel packages served when no remote source exists.

use goplanify_runtime::StaticTripSource;
use goplanify_types::{Trip, User};

pub const DEMO_USER_ID: &str = "u1";
pub const DEMO_USER_NAME: &str = "Ana";

pub fn demo_user() -> User {
    User::new(DEMO_USER_ID, DEMO_USER_NAME)
}

/// Packages in display order
pub fn demo_catalog() -> Vec<Trip> {
    let user = demo_user();

    vec![
        Trip::new("t1", "Paris", user.clone())
            .plan("t1-i1", "Louvre Museum", "Rue de Rivoli", "2025-06-01", "2025-06-01")
            .plan("t1-i2", "Eiffel Tower", "Champ de Mars", "2025-06-02", "2025-06-02")
            .plan("t1-i3", "Seine River Cruise", "Port de la Bourdonnais", "2025-06-02", "2025-06-02"),
        Trip::new("t2", "Rome", user.clone())
            .plan("t2-i1", "Colosseum", "Piazza del Colosseo", "2025-07-10", "2025-07-10")
            .plan("t2-i2", "Vatican Museums", "Viale Vaticano", "2025-07-11", "2025-07-11"),
        Trip::new("t3", "New York", user.clone())
            .plan("t3-i1", "Central Park", "5th Ave", "2025-09-03", "2025-09-03")
            .plan("t3-i2", "Statue of Liberty", "Liberty Island", "2025-09-04", "2025-09-04"),
        Trip::new("t4", "Kyoto", user),
    ]
}

pub fn demo_source() -> StaticTripSource {
    StaticTripSource::new(demo_catalog())
}

#[cfg(test)]
mod tests {
    use super::*;
    use goplanify_types::ensure_catalog;

    #[test]
    fn test_demo_catalog_is_consistent() {
        let catalog = demo_catalog();
        assert!(ensure_catalog(&catalog).is_ok());
        assert_eq!(catalog.len(), 4);
        assert!(catalog[3].itineraries.is_empty());
    }
}
