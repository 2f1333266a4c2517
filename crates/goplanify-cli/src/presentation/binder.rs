//! Keeps the trip list screen in sync with a [`TripStore`].
//!
//! Lifecycle: [`TripListBinder::mount`] subscribes to the store, asks it for
//! trips once and re-derives a [`TripListViewModel`] on every emission until
//! [`TripListBinder::unmount`] (or drop). Selections become navigation
//! intents handed to a [`Navigator`].

use futures::StreamExt;
use goplanify_runtime::{Error, Result, TripStore, TripSubscription};
use goplanify_types::{NavigationIntent, Navigator, TripId, screen};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use super::presenters::present_trip_list;
use super::view_models::TripListViewModel;

/// Settings menu entries reachable from the top bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    About,
    Version,
    Profile,
    Settings,
    Terms,
}

impl MenuEntry {
    /// Menu order as displayed
    pub const ALL: [MenuEntry; 5] = [
        MenuEntry::About,
        MenuEntry::Version,
        MenuEntry::Profile,
        MenuEntry::Settings,
        MenuEntry::Terms,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuEntry::About => "About",
            MenuEntry::Version => "Version",
            MenuEntry::Profile => "Profile",
            MenuEntry::Settings => "Settings",
            MenuEntry::Terms => "Terms & Conditions",
        }
    }

    pub fn route(self) -> &'static str {
        match self {
            MenuEntry::About => screen::ABOUT,
            MenuEntry::Version => screen::VERSION,
            MenuEntry::Profile => screen::PROFILE,
            MenuEntry::Settings => screen::SETTINGS,
            MenuEntry::Terms => screen::TERMS,
        }
    }
}

/// Navigator forwarding intents over an unbounded channel to the host
pub struct ChannelNavigator {
    tx: mpsc::UnboundedSender<NavigationIntent>,
}

impl ChannelNavigator {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<NavigationIntent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Navigator for ChannelNavigator {
    fn navigate(&self, intent: NavigationIntent) {
        if self.tx.send(intent).is_err() {
            tracing::debug!("navigation receiver dropped, intent discarded");
        }
    }
}

pub struct TripListBinder {
    store: Arc<TripStore>,
    navigator: Arc<dyn Navigator>,
    renders: Arc<watch::Sender<TripListViewModel>>,
    render_loop: Mutex<Option<JoinHandle<()>>>,
    /// Store revision at the last mount; renders at or below it predate that fetch
    mounted_at: AtomicU64,
}

impl TripListBinder {
    pub fn new(store: Arc<TripStore>, navigator: Arc<dyn Navigator>) -> Self {
        let initial = present_trip_list(&store.snapshot());
        Self {
            store,
            navigator,
            renders: Arc::new(watch::Sender::new(initial)),
            render_loop: Mutex::new(None),
            mounted_at: AtomicU64::new(0),
        }
    }

    /// Start observing the store and trigger the initial fetch.
    ///
    /// Must run inside a tokio runtime. Returns `false` and does nothing when
    /// already mounted.
    pub fn mount(&self) -> bool {
        let mut slot = self
            .render_loop
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if slot.is_some() {
            tracing::debug!("trip list already mounted");
            return false;
        }

        // Subscribe before fetching so no emission of this fetch is missed.
        let subscription = self.store.subscribe();
        self.mounted_at
            .store(subscription.current().revision, Ordering::SeqCst);

        let store = Arc::clone(&self.store);
        tokio::spawn(async move {
            // Failures are published as the store's Failed status.
            if let Err(e) = store.fetch_trips().await {
                tracing::debug!(error = %e, "initial trip fetch failed");
            }
        });

        *slot = Some(tokio::spawn(render_loop(
            subscription,
            Arc::clone(&self.renders),
        )));
        tracing::debug!(source = self.store.source_name(), "trip list mounted");
        true
    }

    /// Stop observing the store. Returns `false` when not mounted.
    pub fn unmount(&self) -> bool {
        let handle = self
            .render_loop
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match handle {
            Some(handle) => {
                handle.abort();
                tracing::debug!("trip list unmounted");
                true
            }
            None => false,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.render_loop
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Receiver of every render model, starting with the current one
    pub fn renders(&self) -> watch::Receiver<TripListViewModel> {
        self.renders.subscribe()
    }

    pub fn current(&self) -> TripListViewModel {
        self.renders.borrow().clone()
    }

    /// True when `model` shows the outcome of the fetch started by the last mount
    pub fn is_settled(&self, model: &TripListViewModel) -> bool {
        model.status.is_settled() && model.revision > self.mounted_at.load(Ordering::SeqCst)
    }

    /// Wait until a render reflects the fetch started by the last mount.
    ///
    /// A list the store already held at mount time does not count.
    pub async fn settled(&self) -> TripListViewModel {
        let mut rx = self.renders.subscribe();
        match rx.wait_for(|model| self.is_settled(model)).await {
            Ok(model) => model.clone(),
            // The sender lives in `self`, so this arm is unreachable in practice.
            Err(_) => self.current(),
        }
    }

    /// Open the itinerary of a listed trip
    pub fn select(&self, trip_id: &TripId) -> Result<()> {
        let trip = self.store.find_by_id(trip_id).ok_or_else(|| {
            Error::Types(goplanify_types::Error::NotFound(format!(
                "no trip with id '{}'",
                trip_id
            )))
        })?;
        self.navigate(NavigationIntent::itinerary(trip.id));
        Ok(())
    }

    /// Select the first trip whose destination matches exactly
    pub fn select_destination(&self, destination: &str) -> Result<TripId> {
        let trip = self.store.require_destination(destination)?;
        self.navigate(NavigationIntent::itinerary(trip.id.clone()));
        Ok(trip.id)
    }

    pub fn navigate_home(&self) {
        self.navigate(NavigationIntent::screen(screen::HOME));
    }

    pub fn navigate_menu(&self, entry: MenuEntry) {
        self.navigate(NavigationIntent::screen(entry.route()));
    }

    fn navigate(&self, intent: NavigationIntent) {
        tracing::debug!(route = %intent.route(), "navigating");
        self.navigator.navigate(intent);
    }
}

impl Drop for TripListBinder {
    fn drop(&mut self) {
        self.unmount();
    }
}

async fn render_loop(
    subscription: TripSubscription,
    renders: Arc<watch::Sender<TripListViewModel>>,
) {
    let mut feed = subscription.into_stream();
    while let Some(state) = feed.next().await {
        renders.send_replace(present_trip_list(&state));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::TripListStatus;
    use goplanify_runtime::{StaticTripSource, UnavailableSource};
    use goplanify_types::{Trip, User};

    fn catalog() -> Vec<Trip> {
        let ana = User::new("u1", "Ana");
        vec![
            Trip::new("t1", "Paris", ana.clone()).plan("i1", "Louvre", "Paris", "", ""),
            Trip::new("t2", "Rome", ana.clone()),
            Trip::new("t3", "Paris", ana).plan("i2", "Orsay", "Paris", "", ""),
        ]
    }

    fn binder_over(
        source: impl goplanify_runtime::TripSource + 'static,
    ) -> (TripListBinder, mpsc::UnboundedReceiver<NavigationIntent>) {
        let store = Arc::new(TripStore::new(Arc::new(source)));
        let (navigator, rx) = ChannelNavigator::new();
        (TripListBinder::new(store, Arc::new(navigator)), rx)
    }

    #[tokio::test]
    async fn test_mount_fetches_and_renders_cards() {
        let (binder, _rx) = binder_over(StaticTripSource::new(catalog()));
        assert_eq!(binder.current().status, TripListStatus::Idle);

        assert!(binder.mount());
        let model = binder.settled().await;

        assert_eq!(model.status, TripListStatus::Ready);
        let destinations: Vec<&str> = model.cards.iter().map(|c| c.destination.as_str()).collect();
        assert_eq!(destinations, ["Paris", "Rome", "Paris"]);
    }

    #[tokio::test]
    async fn test_second_mount_is_noop() {
        let (binder, _rx) = binder_over(StaticTripSource::new(catalog()));

        assert!(binder.mount());
        assert!(!binder.mount());
        assert!(binder.is_mounted());

        assert!(binder.unmount());
        assert!(!binder.is_mounted());
        assert!(!binder.unmount());
    }

    #[tokio::test]
    async fn test_failed_fetch_renders_failure() {
        let (binder, _rx) = binder_over(UnavailableSource);
        binder.mount();

        let model = binder.settled().await;
        assert!(matches!(model.status, TripListStatus::Failed { .. }));
        assert!(model.cards.is_empty());
    }

    #[tokio::test]
    async fn test_select_emits_itinerary_intent() {
        let (binder, mut rx) = binder_over(StaticTripSource::new(catalog()));
        binder.mount();
        binder.settled().await;

        binder.select(&TripId::from("t2")).unwrap();
        let intent = rx.recv().await.unwrap();
        assert_eq!(intent, NavigationIntent::itinerary("t2"));
        assert_eq!(intent.route(), "ItineraryScreen/t2");
    }

    #[tokio::test]
    async fn test_select_destination_uses_first_match() {
        let (binder, mut rx) = binder_over(StaticTripSource::new(catalog()));
        binder.mount();
        binder.settled().await;

        assert_eq!(binder.select_destination("Paris").unwrap(), TripId::from("t1"));
        assert_eq!(rx.recv().await.unwrap().route(), "ItineraryScreen/t1");
    }

    #[tokio::test]
    async fn test_unknown_selection_is_not_found() {
        let (binder, mut rx) = binder_over(StaticTripSource::new(catalog()));
        binder.mount();
        binder.settled().await;

        assert!(matches!(
            binder.select(&TripId::from("t9")),
            Err(Error::Types(goplanify_types::Error::NotFound(_)))
        ));
        assert!(binder.select_destination("Lisbon").is_err());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_menu_and_home_intents() {
        let (binder, mut rx) = binder_over(StaticTripSource::empty());

        binder.navigate_menu(MenuEntry::Terms);
        binder.navigate_home();

        assert_eq!(rx.recv().await.unwrap().route(), "terms");
        assert_eq!(rx.recv().await.unwrap().route(), "home");
    }
}
