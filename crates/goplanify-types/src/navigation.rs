use serde::{Deserialize, Serialize};

use crate::domain::TripId;

/// Screen route names understood by the navigation boundary
pub mod screen {
    pub const HOME: &str = "home";
    pub const ITINERARY: &str = "ItineraryScreen";
    pub const ABOUT: &str = "about";
    pub const VERSION: &str = "version";
    pub const PROFILE: &str = "profile";
    pub const SETTINGS: &str = "settings";
    pub const TERMS: &str = "terms";
}

/// Request to move to another screen. Fire-and-forget: no response is expected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationIntent {
    pub screen: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_id: Option<TripId>,
}

impl NavigationIntent {
    /// Open the itinerary screen of a trip
    pub fn itinerary(trip_id: impl Into<TripId>) -> Self {
        Self {
            screen: screen::ITINERARY.to_string(),
            trip_id: Some(trip_id.into()),
        }
    }

    /// Open a screen that takes no trip argument
    pub fn screen(name: impl Into<String>) -> Self {
        Self {
            screen: name.into(),
            trip_id: None,
        }
    }

    /// Navigation path, e.g. `ItineraryScreen/t1` or `settings`
    pub fn route(&self) -> String {
        match &self.trip_id {
            Some(id) => format!("{}/{}", self.screen, id),
            None => self.screen.clone(),
        }
    }
}

/// Receiver of navigation intents (the host's router)
pub trait Navigator: Send + Sync {
    fn navigate(&self, intent: NavigationIntent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_itinerary_intent_route() {
        let intent = NavigationIntent::itinerary("t1");
        assert_eq!(intent.screen, "ItineraryScreen");
        assert_eq!(intent.route(), "ItineraryScreen/t1");
    }

    #[test]
    fn test_intent_wire_shape() {
        let json = serde_json::to_value(NavigationIntent::itinerary("t1")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "screen": "ItineraryScreen", "tripId": "t1" })
        );

        let plain = serde_json::to_value(NavigationIntent::screen(screen::ABOUT)).unwrap();
        assert_eq!(plain, serde_json::json!({ "screen": "about" }));
    }
}
