use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, PreferencesViewModel, StatusBadge,
};
use goplanify_types::Preferences;

pub fn present_preferences(
    preferences: &Preferences,
    updated: bool,
) -> CommandResultViewModel<PreferencesViewModel> {
    let content = PreferencesViewModel {
        user_id: preferences.user_id.to_string(),
        theme: preferences.theme().to_string(),
        preferred_language: preferences.preferred_language().to_string(),
        notifications_enabled: preferences.notifications_enabled,
        updated,
    };

    let result = CommandResultViewModel::new(content);
    if updated {
        result.with_badge(StatusBadge::success("Preferences updated"))
    } else {
        result.with_suggestion(Guidance::new("Change theme or language", cmd::PREFS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_updated_preferences() {
        let prefs = Preferences::new("u1", "dark", "es", false).unwrap();
        let result = present_preferences(&prefs, true);

        assert_eq!(result.content.theme, "dark");
        assert_eq!(result.content.preferred_language, "es");
        assert!(!result.content.notifications_enabled);
        assert!(result.badge.is_some());
        assert!(result.suggestions.is_empty());
    }
}
