use serde::{Deserialize, Serialize};

use super::UserId;
use crate::error::{Error, Result};

/// Per-user application preferences, one record per user.
///
/// Mutation goes through [`Preferences::update_preferences`] only. Theme and
/// language are never empty: a rejected update leaves the record as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PreferencesRecord")]
pub struct Preferences {
    pub user_id: UserId,
    pub notifications_enabled: bool,
    preferred_language: String,
    theme: String,
}

impl Preferences {
    pub fn new(
        user_id: impl Into<UserId>,
        theme: impl Into<String>,
        language: impl Into<String>,
        notifications_enabled: bool,
    ) -> Result<Self> {
        let theme = non_empty("theme", theme.into())?;
        let preferred_language = non_empty("preferred language", language.into())?;
        Ok(Self {
            user_id: user_id.into(),
            notifications_enabled,
            preferred_language,
            theme,
        })
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn preferred_language(&self) -> &str {
        &self.preferred_language
    }

    /// Replace theme, language and notification flag together.
    ///
    /// Applying the same arguments twice yields the same record.
    pub fn update_preferences(
        &mut self,
        theme: impl Into<String>,
        language: impl Into<String>,
        notifications_enabled: bool,
    ) -> Result<()> {
        let theme = non_empty("theme", theme.into())?;
        let language = non_empty("preferred language", language.into())?;

        self.theme = theme;
        self.preferred_language = language;
        self.notifications_enabled = notifications_enabled;
        Ok(())
    }
}

/// Wire shape of [`Preferences`]; deserialized records pass the same checks as `new`
#[derive(Deserialize)]
struct PreferencesRecord {
    user_id: UserId,
    notifications_enabled: bool,
    preferred_language: String,
    theme: String,
}

impl TryFrom<PreferencesRecord> for Preferences {
    type Error = Error;

    fn try_from(record: PreferencesRecord) -> Result<Self> {
        Preferences::new(
            record.user_id,
            record.theme,
            record.preferred_language,
            record.notifications_enabled,
        )
    }
}

fn non_empty(field: &str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        return Err(Error::InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs() -> Preferences {
        Preferences::new("u1", "light", "es", true).unwrap()
    }

    #[test]
    fn test_update_applies_all_fields() {
        let mut p = prefs();
        p.update_preferences("dark", "en", false).unwrap();

        assert_eq!(p.theme(), "dark");
        assert_eq!(p.preferred_language(), "en");
        assert!(!p.notifications_enabled);
    }

    #[test]
    fn test_update_is_idempotent() {
        let mut once = prefs();
        once.update_preferences("dark", "fr", true).unwrap();

        let mut twice = once.clone();
        twice.update_preferences("dark", "fr", true).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_rejected_update_leaves_record_unchanged() {
        let mut p = prefs();
        let before = p.clone();

        assert!(matches!(
            p.update_preferences("dark", "  ", false),
            Err(Error::InvalidInput(_))
        ));
        assert!(p.update_preferences("", "en", false).is_err());
        assert_eq!(p, before);
    }

    #[test]
    fn test_deserialize_validates_fields() {
        let json = r#"{"user_id":"u1","notifications_enabled":true,"preferred_language":"es","theme":"dark"}"#;
        let parsed: Preferences = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, Preferences::new("u1", "dark", "es", true).unwrap());

        let blank = r#"{"user_id":"u1","notifications_enabled":true,"preferred_language":"","theme":""}"#;
        let err = serde_json::from_str::<Preferences>(blank).unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_new_rejects_empty_theme() {
        assert!(Preferences::new("u1", "", "en", true).is_err());
    }
}
