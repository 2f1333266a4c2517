use std::fmt;

use crate::presentation::view_models::PreferencesViewModel;

pub struct PreferencesView<'a> {
    data: &'a PreferencesViewModel,
}

impl<'a> PreferencesView<'a> {
    pub fn new(data: &'a PreferencesViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for PreferencesView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Preferences for {}", self.data.user_id)?;
        writeln!(f, "  {:<16} {}", "Theme:", self.data.theme)?;
        writeln!(f, "  {:<16} {}", "Language:", self.data.preferred_language)?;
        writeln!(
            f,
            "  {:<16} {}",
            "Notifications:",
            if self.data.notifications_enabled { "on" } else { "off" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_view() {
        let model = PreferencesViewModel {
            user_id: "u1".to_string(),
            theme: "dark".to_string(),
            preferred_language: "es".to_string(),
            notifications_enabled: false,
            updated: true,
        };

        insta::assert_snapshot!(PreferencesView::new(&model).to_string(), @r"
        Preferences for u1
          Theme:           dark
          Language:        es
          Notifications:   off
        ");
    }
}
