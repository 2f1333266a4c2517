use anyhow::{Result, bail};
use async_trait::async_trait;
use goplanify_types::Trip;
use std::sync::{Mutex, PoisonError};

/// Collaborator that delivers the current trip list.
///
/// Called with no arguments; returns the full list or fails. Where the trips
/// come from is up to the implementation.
#[async_trait]
pub trait TripSource: Send + Sync {
    fn name(&self) -> &str;
    async fn fetch_trips(&self) -> Result<Vec<Trip>>;
}

/// In-memory source holding a fixed catalog
pub struct StaticTripSource {
    trips: Mutex<Vec<Trip>>,
}

impl StaticTripSource {
    pub fn new(trips: Vec<Trip>) -> Self {
        Self {
            trips: Mutex::new(trips),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Swap the catalog served by subsequent fetches
    pub fn replace(&self, trips: Vec<Trip>) {
        *self.trips.lock().unwrap_or_else(PoisonError::into_inner) = trips;
    }
}

#[async_trait]
impl TripSource for StaticTripSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_trips(&self) -> Result<Vec<Trip>> {
        Ok(self
            .trips
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }
}

/// Placeholder for the remote trip service, which does not exist yet.
/// Every fetch fails.
#[derive(Debug, Default)]
pub struct UnavailableSource;

#[async_trait]
impl TripSource for UnavailableSource {
    fn name(&self) -> &str {
        "unavailable"
    }

    async fn fetch_trips(&self) -> Result<Vec<Trip>> {
        bail!("no trip source configured")
    }
}
