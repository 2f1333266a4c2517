use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitOutcome, ConfigInitViewModel, ConfigViewModel, Guidance,
    StatusBadge,
};
use goplanify_runtime::Config;
use std::path::Path;

pub fn present_config(
    config: &Config,
    path: &Path,
    file_exists: bool,
) -> CommandResultViewModel<ConfigViewModel> {
    let content = ConfigViewModel {
        path: path.display().to_string(),
        file_exists,
        source: config.store.source.as_str().to_string(),
        fetch_timeout_ms: config.store.fetch_timeout_ms,
        theme: config.preferences.theme.clone(),
        language: config.preferences.language.clone(),
        notifications_enabled: config.preferences.notifications_enabled,
        screen_width_dp: config.display.screen_width_dp,
    };

    let result = CommandResultViewModel::new(content);
    if file_exists {
        result
    } else {
        result.with_suggestion(Guidance::new(
            "Write these defaults to disk",
            cmd::CONFIG_INIT,
        ))
    }
}

pub fn present_config_init(
    path: &Path,
    outcome: ConfigInitOutcome,
) -> CommandResultViewModel<ConfigInitViewModel> {
    let content = ConfigInitViewModel {
        path: path.display().to_string(),
        outcome,
    };

    let result = CommandResultViewModel::new(content);
    match outcome {
        ConfigInitOutcome::Created | ConfigInitOutcome::Overwritten => result
            .with_badge(StatusBadge::success("Configuration written"))
            .with_suggestion(Guidance::new("Review the settings", cmd::CONFIG_SHOW)),
        ConfigInitOutcome::AlreadyExists => result
            .with_badge(StatusBadge::info("Configuration already present"))
            .with_suggestion(Guidance::new(
                "Replace it with defaults",
                format!("{} --force", cmd::CONFIG_INIT),
            )),
    }
}
