use goplanify_types::Preferences;
use std::sync::Arc;
use tokio::sync::watch;

use crate::error::Result;

/// Shared holder of one user's [`Preferences`].
///
/// Clones share the same record, and an update is visible to every holder as
/// soon as it returns. Updates replace the whole record under the channel
/// lock. Two holders writing at the same time are not merged: the last write
/// wins. Callers are expected to funnel writes through a single owner.
#[derive(Clone)]
pub struct PreferencesCell {
    tx: Arc<watch::Sender<Preferences>>,
}

impl PreferencesCell {
    pub fn new(preferences: Preferences) -> Self {
        let (tx, _rx) = watch::channel(preferences);
        Self { tx: Arc::new(tx) }
    }

    pub fn current(&self) -> Preferences {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Preferences> {
        self.tx.subscribe()
    }

    /// Apply theme, language and notification flag as one replacement.
    ///
    /// A rejected update publishes nothing and leaves the record unchanged.
    pub fn update_preferences(
        &self,
        theme: impl Into<String>,
        language: impl Into<String>,
        notifications_enabled: bool,
    ) -> Result<()> {
        let theme = theme.into();
        let language = language.into();
        let mut outcome = Ok(());

        self.tx.send_if_modified(|current| {
            match current.update_preferences(theme, language, notifications_enabled) {
                Ok(()) => true,
                Err(err) => {
                    outcome = Err(err);
                    false
                }
            }
        });

        outcome?;
        tracing::debug!(user = %self.tx.borrow().user_id, "preferences updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell() -> PreferencesCell {
        PreferencesCell::new(Preferences::new("u1", "light", "es", true).unwrap())
    }

    #[test]
    fn test_update_visible_to_every_holder() {
        let writer = cell();
        let reader = writer.clone();

        writer.update_preferences("dark", "en", false).unwrap();

        let seen = reader.current();
        assert_eq!(seen.theme(), "dark");
        assert_eq!(seen.preferred_language(), "en");
        assert!(!seen.notifications_enabled);
    }

    #[tokio::test]
    async fn test_subscribers_are_notified() {
        let writer = cell();
        let mut rx = writer.subscribe();

        writer.update_preferences("dark", "en", true).unwrap();

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().theme(), "dark");
    }

    #[test]
    fn test_rejected_update_publishes_nothing() {
        let writer = cell();
        let rx = writer.subscribe();

        assert!(writer.update_preferences("", "en", false).is_err());

        assert!(!rx.has_changed().unwrap());
        assert_eq!(writer.current().theme(), "light");
    }
}
