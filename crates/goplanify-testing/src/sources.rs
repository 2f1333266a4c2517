//! Scripted trip sources for store and binder tests.

use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;
use goplanify_runtime::TripSource;
use goplanify_types::Trip;
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use tokio::sync::watch;

/// Source that blocks every fetch until [`GatedSource::release`] is called.
///
/// Counts calls so tests can tell whether concurrent fetches were coalesced.
pub struct GatedSource {
    trips: Vec<Trip>,
    released: watch::Sender<bool>,
    calls: watch::Sender<usize>,
}

impl GatedSource {
    pub fn new(trips: Vec<Trip>) -> Self {
        Self {
            trips,
            released: watch::Sender::new(false),
            calls: watch::Sender::new(0),
        }
    }

    /// Let pending and future fetches complete
    pub fn release(&self) {
        self.released.send_replace(true);
    }

    pub fn calls(&self) -> usize {
        *self.calls.borrow()
    }

    /// Wait until at least `count` fetches have started
    pub async fn wait_for_calls(&self, count: usize) {
        let mut rx = self.calls.subscribe();
        // The sender lives in `self`, so the channel cannot close here.
        let _ = rx.wait_for(|calls| *calls >= count).await;
    }
}

#[async_trait]
impl TripSource for GatedSource {
    fn name(&self) -> &str {
        "gated"
    }

    async fn fetch_trips(&self) -> Result<Vec<Trip>> {
        self.calls.send_modify(|calls| *calls += 1);
        let mut rx = self.released.subscribe();
        rx.wait_for(|open| *open)
            .await
            .map_err(|_| anyhow!("gate closed"))?;
        Ok(self.trips.clone())
    }
}

/// Source whose every fetch fails with the given message
pub struct FailingSource {
    message: String,
}

impl FailingSource {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl TripSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch_trips(&self) -> Result<Vec<Trip>> {
        bail!("{}", self.message)
    }
}

/// Source answering from a queue of outcomes, one per fetch
pub struct ScriptedSource {
    script: Mutex<VecDeque<std::result::Result<Vec<Trip>, String>>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
        }
    }

    pub fn then_trips(self, trips: Vec<Trip>) -> Self {
        self.push(Ok(trips));
        self
    }

    pub fn then_error(self, message: impl Into<String>) -> Self {
        self.push(Err(message.into()));
        self
    }

    pub fn remaining(&self) -> usize {
        self.lock().len()
    }

    fn push(&self, outcome: std::result::Result<Vec<Trip>, String>) {
        self.lock().push_back(outcome);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<std::result::Result<Vec<Trip>, String>>> {
        self.script.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ScriptedSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TripSource for ScriptedSource {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn fetch_trips(&self) -> Result<Vec<Trip>> {
        let next = self.lock().pop_front();
        match next {
            Some(Ok(trips)) => Ok(trips),
            Some(Err(message)) => Err(anyhow!(message)),
            None => bail!("script exhausted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[tokio::test]
    async fn test_scripted_source_replays_in_order() {
        let source = ScriptedSource::new()
            .then_trips(fixtures::sample_catalog())
            .then_error("offline");

        assert_eq!(source.fetch_trips().await.unwrap().len(), 3);
        assert_eq!(source.fetch_trips().await.unwrap_err().to_string(), "offline");
        assert_eq!(
            source.fetch_trips().await.unwrap_err().to_string(),
            "script exhausted"
        );
        assert_eq!(source.remaining(), 0);
    }

    #[tokio::test]
    async fn test_released_gate_passes_immediately() {
        let source = GatedSource::new(fixtures::sample_catalog());
        source.release();

        assert_eq!(source.fetch_trips().await.unwrap().len(), 3);
        assert_eq!(source.calls(), 1);
    }
}
