use crate::catalog::DEMO_USER_ID;
use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::presenters::present_preferences;
use anyhow::Result;
use goplanify_runtime::PreferencesCell;

pub fn handle(
    ctx: &ExecutionContext,
    theme: Option<String>,
    language: Option<String>,
    notifications: Option<bool>,
) -> Result<()> {
    let cell = PreferencesCell::new(ctx.config()?.default_preferences(DEMO_USER_ID)?);
    let updated = theme.is_some() || language.is_some() || notifications.is_some();

    if updated {
        let current = cell.current();
        cell.update_preferences(
            theme.unwrap_or_else(|| current.theme().to_string()),
            language.unwrap_or_else(|| current.preferred_language().to_string()),
            notifications.unwrap_or(current.notifications_enabled),
        )?;
    }

    ctx.renderer()
        .render(present_preferences(&cell.current(), updated))
}
