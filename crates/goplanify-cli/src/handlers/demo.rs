use crate::context::ExecutionContext;
use crate::presentation::binder::{ChannelNavigator, TripListBinder};
use crate::presentation::presenters::{present_selection, present_top_bar};
use crate::presentation::view_models::{CommandResultViewModel, DemoViewModel, TripListViewModel};
use crate::presentation::Renderer;
use anyhow::{Result, anyhow};
use std::sync::Arc;

pub const APP_TITLE: &str = "GoPlanify Travel Planner";

pub async fn handle(ctx: &ExecutionContext, select: Option<String>) -> Result<()> {
    let top_bar = present_top_bar(APP_TITLE, ctx.screen_width()?);
    let store = ctx.trip_store()?;
    let (navigator, mut intents) = ChannelNavigator::new();
    let binder = TripListBinder::new(store, Arc::new(navigator));

    let mut renders_rx = binder.renders();
    let mut renders: Vec<TripListViewModel> = vec![renders_rx.borrow_and_update().clone()];

    binder.mount();
    loop {
        renders_rx.changed().await?;
        let model = renders_rx.borrow_and_update().clone();
        let settled = binder.is_settled(&model);
        // The render loop re-emits the state it subscribed to.
        if renders.last().map(|last| last.revision) != Some(model.revision) {
            renders.push(model);
        }
        if settled {
            break;
        }
    }

    let selection = match select {
        Some(destination) => {
            binder.select_destination(&destination)?;
            let intent = intents
                .recv()
                .await
                .ok_or_else(|| anyhow!("navigation channel closed before the selection arrived"))?;
            Some(present_selection(&destination, &intent))
        }
        None => None,
    };
    binder.unmount();

    ctx.renderer().render(CommandResultViewModel::new(DemoViewModel {
        top_bar,
        renders,
        selection,
    }))
}
