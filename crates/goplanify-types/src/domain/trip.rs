use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{ItemId, TripId, User};
use crate::error::{Error, Result};

/// A planned travel record owning an ordered itinerary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub id: TripId,
    pub destination: String,
    pub user: User,
    #[serde(default)]
    pub itineraries: Vec<ItineraryItem>,
}

/// A single planned activity or stop within a trip.
///
/// The owning trip is referenced by id rather than by value, so a trip and
/// its items never form an ownership cycle. Use [`ItineraryItem::owner`] to
/// resolve it against a trip collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryItem {
    pub id: ItemId,
    pub trip_id: TripId,
    pub name: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
}

impl Trip {
    pub fn new(id: impl Into<TripId>, destination: impl Into<String>, user: User) -> Self {
        Self {
            id: id.into(),
            destination: destination.into(),
            user,
            itineraries: Vec::new(),
        }
    }

    /// Append an item stamped with this trip's id
    pub fn plan(
        mut self,
        id: impl Into<ItemId>,
        name: impl Into<String>,
        location: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        let item = ItineraryItem {
            id: id.into(),
            trip_id: self.id.clone(),
            name: name.into(),
            location: location.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
        };
        self.itineraries.push(item);
        self
    }

    /// Append an existing item; it must already reference this trip
    pub fn push_item(&mut self, item: ItineraryItem) -> Result<()> {
        if item.trip_id != self.id {
            return Err(Error::OrphanedItem {
                item_id: item.id,
                owner: item.trip_id,
                expected: self.id.clone(),
            });
        }
        self.itineraries.push(item);
        Ok(())
    }

    pub fn item(&self, id: &ItemId) -> Option<&ItineraryItem> {
        self.itineraries.iter().find(|item| &item.id == id)
    }

    /// Activity names in itinerary order
    pub fn activity_names(&self) -> Vec<&str> {
        self.itineraries.iter().map(|item| item.name.as_str()).collect()
    }

    fn ensure_items_owned(&self) -> Result<()> {
        match self.itineraries.iter().find(|item| item.trip_id != self.id) {
            Some(orphan) => Err(Error::OrphanedItem {
                item_id: orphan.id.clone(),
                owner: orphan.trip_id.clone(),
                expected: self.id.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl ItineraryItem {
    pub fn new(
        trip_id: impl Into<TripId>,
        id: impl Into<ItemId>,
        name: impl Into<String>,
        location: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            trip_id: trip_id.into(),
            name: name.into(),
            location: location.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// Resolve the owning trip by id
    pub fn owner<'a>(&self, trips: &'a [Trip]) -> Option<&'a Trip> {
        trips.iter().find(|trip| trip.id == self.trip_id)
    }
}

/// Check catalog invariants: trip ids are unique and no item is orphaned.
pub fn ensure_catalog(trips: &[Trip]) -> Result<()> {
    let mut seen = HashSet::with_capacity(trips.len());
    for trip in trips {
        if !seen.insert(&trip.id) {
            return Err(Error::DuplicateTrip(trip.id.clone()));
        }
        trip.ensure_items_owned()?;
    }
    Ok(())
}

/// First trip whose destination equals `destination` exactly.
///
/// Destinations are not unique; later matches are never returned.
pub fn find_by_destination<'a>(trips: &'a [Trip], destination: &str) -> Option<&'a Trip> {
    trips.iter().find(|trip| trip.destination == destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn traveler() -> User {
        User::new("u1", "Ana")
    }

    #[test]
    fn test_plan_stamps_owner_id() {
        let trip = Trip::new("t1", "Paris", traveler())
            .plan("i1", "Louvre", "Rue de Rivoli", "2025-06-01", "2025-06-01")
            .plan("i2", "Eiffel Tower", "Champ de Mars", "2025-06-02", "2025-06-02");

        assert_eq!(trip.activity_names(), vec!["Louvre", "Eiffel Tower"]);
        assert!(trip.itineraries.iter().all(|i| i.trip_id == trip.id));
    }

    #[test]
    fn test_item_lookup_by_id() {
        let trip = Trip::new("t1", "Paris", traveler())
            .plan("i1", "Louvre", "Rue de Rivoli", "", "")
            .plan("i2", "Eiffel Tower", "Champ de Mars", "", "");

        let item = trip.item(&ItemId::from("i2")).expect("planned item");
        assert_eq!(item.name, "Eiffel Tower");
        assert_eq!(item.location, "Champ de Mars");
        assert!(trip.item(&ItemId::from("i3")).is_none());
    }

    #[test]
    fn test_push_item_rejects_foreign_item() {
        let mut trip = Trip::new("t1", "Paris", traveler());
        let foreign = ItineraryItem::new("t2", "i9", "Colosseum", "Rome", "", "");

        let err = trip.push_item(foreign).unwrap_err();
        assert_eq!(
            err,
            Error::OrphanedItem {
                item_id: ItemId::from("i9"),
                owner: TripId::from("t2"),
                expected: TripId::from("t1"),
            }
        );
        assert!(trip.itineraries.is_empty());
    }

    #[test]
    fn test_owner_resolves_back_reference() {
        let trips = vec![
            Trip::new("t1", "Paris", traveler()),
            Trip::new("t2", "Rome", traveler()).plan("i1", "Colosseum", "Rome", "", ""),
        ];

        let item = &trips[1].itineraries[0];
        assert_eq!(item.owner(&trips).map(|t| t.destination.as_str()), Some("Rome"));
        assert!(item.owner(&trips[..1]).is_none());
    }

    #[test]
    fn test_ensure_catalog_detects_duplicate_ids() {
        let trips = vec![
            Trip::new("t1", "Paris", traveler()),
            Trip::new("t1", "Rome", traveler()),
        ];

        assert_eq!(
            ensure_catalog(&trips),
            Err(Error::DuplicateTrip(TripId::from("t1")))
        );
    }

    #[test]
    fn test_ensure_catalog_detects_orphans() {
        let mut trip = Trip::new("t1", "Paris", traveler());
        trip.itineraries
            .push(ItineraryItem::new("t7", "i1", "Louvre", "Paris", "", ""));

        assert!(matches!(
            ensure_catalog(&[trip]),
            Err(Error::OrphanedItem { .. })
        ));
    }

    #[test]
    fn test_find_by_destination_returns_first_match() {
        let trips = vec![
            Trip::new("t1", "Paris", traveler()),
            Trip::new("t2", "Paris", traveler()),
            Trip::new("t3", "Rome", traveler()),
        ];

        assert_eq!(
            find_by_destination(&trips, "Paris").map(|t| t.id.as_str()),
            Some("t1")
        );
        assert!(find_by_destination(&trips, "paris").is_none());
        assert!(find_by_destination(&[], "Paris").is_none());
    }
}
