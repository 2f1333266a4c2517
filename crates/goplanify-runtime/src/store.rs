use chrono::{DateTime, Utc};
use futures::future::{BoxFuture, FutureExt, Shared};
use goplanify_types::{Trip, TripId, ensure_catalog, find_by_destination};
use std::sync::{Arc, Mutex, PoisonError, Weak};
use std::time::Duration;
use tokio::sync::watch;

use crate::error::{Error, FetchError, FetchErrorKind, Result};
use crate::source::TripSource;
use crate::subscription::TripSubscription;

/// Where the store's list came from most recently
#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus {
    /// Nothing fetched yet, or the store was cleared
    Idle,
    Loading,
    Ready {
        fetched_at: DateTime<Utc>,
    },
    /// Last fetch failed; `trips` still holds the previous list
    Failed {
        error: FetchError,
        failed_at: DateTime<Utc>,
    },
}

/// Snapshot published to subscribers on every change
#[derive(Debug, Clone)]
pub struct TripsState {
    pub trips: Arc<Vec<Trip>>,
    pub status: FetchStatus,
    /// Incremented on every publication
    pub revision: u64,
}

impl TripsState {
    fn initial() -> Self {
        Self {
            trips: Arc::new(Vec::new()),
            status: FetchStatus::Idle,
            revision: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, FetchStatus::Loading)
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.status {
            FetchStatus::Failed { error, .. } => Some(error),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Upper bound on a single source call. `None` waits indefinitely.
    pub fetch_timeout: Option<Duration>,
}

type FetchOutcome = std::result::Result<usize, FetchError>;
type InflightFetch = Shared<BoxFuture<'static, FetchOutcome>>;
type InflightSlot = Mutex<Option<InflightFetch>>;

/// Holds the current trip list and publishes every change.
///
/// At most one source call runs per store. `fetch_trips` calls made while one
/// is running join it and resolve with its outcome instead of calling the
/// source again.
pub struct TripStore {
    source: Arc<dyn TripSource>,
    state: Arc<watch::Sender<TripsState>>,
    inflight: Arc<InflightSlot>,
    config: StoreConfig,
}

impl TripStore {
    pub fn new(source: Arc<dyn TripSource>) -> Self {
        Self::with_config(source, StoreConfig::default())
    }

    pub fn with_config(source: Arc<dyn TripSource>, config: StoreConfig) -> Self {
        let (tx, _rx) = watch::channel(TripsState::initial());
        Self {
            source,
            state: Arc::new(tx),
            inflight: Arc::new(Mutex::new(None)),
            config,
        }
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    pub fn snapshot(&self) -> TripsState {
        self.state.borrow().clone()
    }

    pub fn trips(&self) -> Arc<Vec<Trip>> {
        Arc::clone(&self.state.borrow().trips)
    }

    /// Refresh the list from the source. Returns the number of trips loaded.
    ///
    /// On failure the previous list is kept and the published status becomes
    /// [`FetchStatus::Failed`]. The source call runs on its own task: a caller
    /// that stops waiting does not stop the fetch from settling.
    ///
    /// Must be called inside a tokio runtime.
    pub async fn fetch_trips(&self) -> Result<usize> {
        let fetch = {
            let mut slot = self.inflight.lock().unwrap_or_else(PoisonError::into_inner);
            match slot.as_ref() {
                Some(running) => {
                    tracing::debug!(source = self.source.name(), "joining in-flight fetch");
                    running.clone()
                }
                None => {
                    let fetch = spawn_fetch(
                        Arc::clone(&self.source),
                        Arc::clone(&self.state),
                        Arc::downgrade(&self.inflight),
                        self.config.fetch_timeout,
                    );
                    *slot = Some(fetch.clone());
                    fetch
                }
            }
        };

        fetch.await.map_err(Error::FetchFailed)
    }

    /// True while a source call is running
    pub fn is_fetching(&self) -> bool {
        self.inflight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// First trip whose destination matches exactly
    pub fn find_by_destination(&self, destination: &str) -> Option<Trip> {
        let state = self.state.borrow();
        find_by_destination(state.trips.as_slice(), destination).cloned()
    }

    /// Like [`find_by_destination`](Self::find_by_destination), but a miss is an error
    pub fn require_destination(&self, destination: &str) -> Result<Trip> {
        self.find_by_destination(destination).ok_or_else(|| {
            Error::Types(goplanify_types::Error::NotFound(format!(
                "no trip to '{}'",
                destination
            )))
        })
    }

    pub fn find_by_id(&self, id: &TripId) -> Option<Trip> {
        self.state
            .borrow()
            .trips
            .iter()
            .find(|trip| &trip.id == id)
            .cloned()
    }

    /// Import a full list, replacing the current one
    pub fn replace_trips(&self, trips: Vec<Trip>) -> Result<()> {
        ensure_catalog(&trips)?;
        let count = trips.len();
        self.state.send_modify(|state| {
            state.trips = Arc::new(trips);
            state.status = FetchStatus::Ready {
                fetched_at: Utc::now(),
            };
            state.revision += 1;
        });
        tracing::debug!(count, "trips replaced");
        Ok(())
    }

    /// Drop every trip and return to the idle state
    pub fn clear(&self) {
        self.state.send_modify(|state| {
            state.trips = Arc::new(Vec::new());
            state.status = FetchStatus::Idle;
            state.revision += 1;
        });
    }

    /// Start observing the store. Drop or `stop()` the subscription to end it.
    pub fn subscribe(&self) -> TripSubscription {
        TripSubscription::new(self.state.subscribe())
    }

    /// Live subscriptions and feeds
    pub fn subscriber_count(&self) -> usize {
        self.state.receiver_count()
    }
}

fn spawn_fetch(
    source: Arc<dyn TripSource>,
    state: Arc<watch::Sender<TripsState>>,
    slot: Weak<InflightSlot>,
    timeout: Option<Duration>,
) -> InflightFetch {
    let task = tokio::spawn(run_fetch(source, Arc::clone(&state), slot.clone(), timeout));

    async move {
        match task.await {
            Ok(outcome) => outcome,
            Err(e) => {
                // The task died before settling, so it left Loading and the slot behind.
                let error =
                    FetchError::new(FetchErrorKind::Source, format!("fetch task failed: {}", e));
                publish_failure(&state, &error);
                release_slot(&slot);
                Err(error)
            }
        }
    }
    .boxed()
    .shared()
}

async fn run_fetch(
    source: Arc<dyn TripSource>,
    state: Arc<watch::Sender<TripsState>>,
    slot: Weak<InflightSlot>,
    timeout: Option<Duration>,
) -> FetchOutcome {
    tracing::debug!(source = source.name(), "fetching trips");
    state.send_modify(|s| {
        s.status = FetchStatus::Loading;
        s.revision += 1;
    });

    let outcome = match fetch_validated(source.as_ref(), timeout).await {
        Ok(trips) => {
            let count = trips.len();
            state.send_modify(|s| {
                s.trips = Arc::new(trips);
                s.status = FetchStatus::Ready {
                    fetched_at: Utc::now(),
                };
                s.revision += 1;
            });
            tracing::debug!(source = source.name(), count, "trips fetched");
            Ok(count)
        }
        Err(error) => {
            tracing::warn!(source = source.name(), error = %error, "trip fetch failed");
            publish_failure(&state, &error);
            Err(error)
        }
    };

    // Published before the slot is released so a follow-up fetch cannot
    // interleave its Loading state with this result.
    release_slot(&slot);
    outcome
}

fn publish_failure(state: &watch::Sender<TripsState>, error: &FetchError) {
    state.send_modify(|s| {
        s.status = FetchStatus::Failed {
            error: error.clone(),
            failed_at: Utc::now(),
        };
        s.revision += 1;
    });
}

fn release_slot(slot: &Weak<InflightSlot>) {
    if let Some(slot) = slot.upgrade() {
        *slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

async fn fetch_validated(
    source: &dyn TripSource,
    timeout: Option<Duration>,
) -> std::result::Result<Vec<Trip>, FetchError> {
    let fetched = match timeout {
        Some(limit) => tokio::time::timeout(limit, source.fetch_trips())
            .await
            .map_err(|_| {
                FetchError::new(
                    FetchErrorKind::Timeout,
                    format!("{} did not answer within {:?}", source.name(), limit),
                )
            })?,
        None => source.fetch_trips().await,
    };

    let trips = fetched.map_err(|e| FetchError::new(FetchErrorKind::Source, format!("{:#}", e)))?;
    ensure_catalog(&trips)
        .map_err(|e| FetchError::new(FetchErrorKind::InvalidPayload, e.to_string()))?;
    Ok(trips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{StaticTripSource, UnavailableSource};
    use goplanify_types::User;

    fn paris() -> Trip {
        Trip::new("t1", "Paris", User::new("u1", "Ana"))
    }

    #[tokio::test]
    async fn test_initial_state_is_empty_and_idle() {
        let store = TripStore::new(Arc::new(StaticTripSource::empty()));
        let state = store.snapshot();

        assert!(state.trips.is_empty());
        assert_eq!(state.status, FetchStatus::Idle);
        assert_eq!(state.revision, 0);
        assert!(!store.is_fetching());
    }

    #[tokio::test]
    async fn test_fetch_populates_and_marks_ready() {
        let store = TripStore::new(Arc::new(StaticTripSource::new(vec![paris()])));

        assert_eq!(store.fetch_trips().await.unwrap(), 1);

        let state = store.snapshot();
        assert_eq!(state.trips.len(), 1);
        assert!(matches!(state.status, FetchStatus::Ready { .. }));
        // Loading + Ready
        assert_eq!(state.revision, 2);
        assert!(!store.is_fetching());
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_previous_list() {
        let store = TripStore::new(Arc::new(UnavailableSource));
        store.replace_trips(vec![paris()]).unwrap();

        let err = store.fetch_trips().await.unwrap_err();
        assert!(matches!(err, Error::FetchFailed(ref e) if e.kind == FetchErrorKind::Source));

        let state = store.snapshot();
        assert_eq!(state.trips.len(), 1);
        assert_eq!(
            state.error().map(|e| e.message.as_str()),
            Some("no trip source configured")
        );
    }

    #[tokio::test]
    async fn test_fetch_rejects_duplicate_ids() {
        let duplicate = vec![paris(), Trip::new("t1", "Rome", User::new("u1", "Ana"))];
        let store = TripStore::new(Arc::new(StaticTripSource::new(duplicate)));

        match store.fetch_trips().await {
            Err(Error::FetchFailed(e)) => assert_eq!(e.kind, FetchErrorKind::InvalidPayload),
            other => panic!("expected invalid payload, got {:?}", other),
        }
        assert!(store.trips().is_empty());
    }

    #[test]
    fn test_lookups() {
        let store = TripStore::new(Arc::new(StaticTripSource::empty()));
        store.replace_trips(vec![paris()]).unwrap();

        assert_eq!(
            store.find_by_destination("Paris").map(|t| t.id),
            Some(TripId::from("t1"))
        );
        assert!(store.find_by_destination("Rome").is_none());
        assert!(matches!(
            store.require_destination("Rome"),
            Err(Error::Types(goplanify_types::Error::NotFound(_)))
        ));
        assert!(store.find_by_id(&TripId::from("t1")).is_some());
        assert!(store.find_by_id(&TripId::from("t2")).is_none());
    }

    #[test]
    fn test_clear_returns_to_idle() {
        let store = TripStore::new(Arc::new(StaticTripSource::empty()));
        store.replace_trips(vec![paris()]).unwrap();
        store.clear();

        let state = store.snapshot();
        assert!(state.trips.is_empty());
        assert_eq!(state.status, FetchStatus::Idle);
        assert_eq!(state.revision, 2);
    }
}
