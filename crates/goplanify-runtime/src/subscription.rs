use std::pin::Pin;
use std::task::{Context, Poll};

use futures::stream::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::store::TripsState;

/// Live view of a [`TripStore`](crate::TripStore).
///
/// Starts when created by `TripStore::subscribe` and ends on `stop()` or drop.
pub struct TripSubscription {
    rx: watch::Receiver<TripsState>,
}

impl TripSubscription {
    pub(crate) fn new(rx: watch::Receiver<TripsState>) -> Self {
        Self { rx }
    }

    /// Latest published state, without waiting
    pub fn current(&self) -> TripsState {
        self.rx.borrow().clone()
    }

    /// Wait for the next publication.
    ///
    /// Returns `None` once the store has been dropped. Several publications
    /// that happen between two calls collapse into the newest one.
    pub async fn changed(&mut self) -> Option<TripsState> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }

    /// Stream yielding the current state first, then every change
    pub fn into_stream(self) -> TripFeed {
        TripFeed {
            inner: WatchStream::new(self.rx),
        }
    }

    /// End the subscription; the store stops counting it immediately
    pub fn stop(self) {}
}

pub struct TripFeed {
    inner: WatchStream<TripsState>,
}

impl Stream for TripFeed {
    type Item = TripsState;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}

#[cfg(test)]
mod tests {
    use crate::source::StaticTripSource;
    use crate::store::TripStore;
    use futures::StreamExt;
    use std::sync::Arc;

    #[test]
    fn test_stop_releases_subscription() {
        let store = TripStore::new(Arc::new(StaticTripSource::empty()));
        assert_eq!(store.subscriber_count(), 0);

        let first = store.subscribe();
        let second = store.subscribe();
        assert_eq!(store.subscriber_count(), 2);

        first.stop();
        assert_eq!(store.subscriber_count(), 1);

        drop(second);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn test_feed_counts_until_dropped() {
        let store = TripStore::new(Arc::new(StaticTripSource::empty()));

        let mut feed = store.subscribe().into_stream();
        assert_eq!(store.subscriber_count(), 1);
        assert_eq!(feed.next().await.map(|state| state.revision), Some(0));

        drop(feed);
        assert_eq!(store.subscriber_count(), 0);
    }
}
