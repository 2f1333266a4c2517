use crate::context::ExecutionContext;
use crate::presentation::binder::{ChannelNavigator, TripListBinder};
use crate::presentation::presenters::{
    present_selection_result, present_trip_detail, present_trip_list, present_trip_list_result,
};
use crate::presentation::view_models::TripListStatus;
use crate::presentation::Renderer;
use anyhow::{Result, anyhow, bail};
use std::sync::Arc;

pub async fn handle_list(ctx: &ExecutionContext) -> Result<()> {
    let store = ctx.trip_store()?;

    // A failed fetch still renders: the list shows the failure and whatever it held.
    if let Err(e) = store.fetch_trips().await {
        tracing::debug!(error = %e, "listing trips after failed fetch");
    }

    let model = present_trip_list(&store.snapshot());
    ctx.renderer().render(present_trip_list_result(model))
}

pub async fn handle_find(ctx: &ExecutionContext, destination: &str) -> Result<()> {
    let store = ctx.trip_store()?;
    store.fetch_trips().await?;

    let trip = store.require_destination(destination)?;
    ctx.renderer().render(present_trip_detail(&trip))
}

pub async fn handle_select(ctx: &ExecutionContext, destination: &str) -> Result<()> {
    let store = ctx.trip_store()?;
    let (navigator, mut intents) = ChannelNavigator::new();
    let binder = TripListBinder::new(store, Arc::new(navigator));

    binder.mount();
    let model = binder.settled().await;
    if let TripListStatus::Failed { message } = &model.status {
        bail!("Could not load trips: {}", message);
    }

    binder.select_destination(destination)?;
    let intent = intents
        .recv()
        .await
        .ok_or_else(|| anyhow!("navigation channel closed before the selection arrived"))?;
    binder.unmount();

    ctx.renderer()
        .render(present_selection_result(destination, &intent))
}
