use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::presenters::{present_config, present_config_init};
use crate::presentation::view_models::ConfigInitOutcome;
use anyhow::Result;
use goplanify_runtime::Config;

pub fn handle_init(ctx: &ExecutionContext, force: bool) -> Result<()> {
    let path = ctx.config_path();
    let exists = path.exists();

    let outcome = if exists && !force {
        ConfigInitOutcome::AlreadyExists
    } else {
        Config::default().save_to(&path)?;
        tracing::info!(path = %path.display(), "config written");
        if exists {
            ConfigInitOutcome::Overwritten
        } else {
            ConfigInitOutcome::Created
        }
    };

    ctx.renderer().render(present_config_init(&path, outcome))
}

pub fn handle_show(ctx: &ExecutionContext) -> Result<()> {
    let path = ctx.config_path();
    let config = ctx.config()?;
    ctx.renderer()
        .render(present_config(config, &path, path.exists()))
}
