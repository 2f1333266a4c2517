use goplanify_types::{NavigationIntent, Navigator};
use std::sync::{Mutex, PoisonError};

/// Navigator that keeps every intent it receives
#[derive(Default)]
pub struct RecordingNavigator {
    intents: Mutex<Vec<NavigationIntent>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intents(&self) -> Vec<NavigationIntent> {
        self.intents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Routes of recorded intents, e.g. `ItineraryScreen/t1`
    pub fn routes(&self) -> Vec<String> {
        self.intents().iter().map(NavigationIntent::route).collect()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, intent: NavigationIntent) {
        self.intents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(intent);
    }
}
