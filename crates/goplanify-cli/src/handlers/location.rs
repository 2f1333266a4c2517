use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::presenters::present_location;
use anyhow::Result;
use goplanify_types::Map;

const CLI_MAP_ID: &str = "cli";

pub fn handle_show(ctx: &ExecutionContext, latitude: f64, longitude: f64, direction: &str) -> Result<()> {
    let map = Map::new(CLI_MAP_ID, latitude, longitude, direction);
    ctx.renderer().render(present_location(&map))
}

pub fn handle_nearby(latitude: f64, longitude: f64, direction: &str) -> Result<()> {
    let map = Map::new(CLI_MAP_ID, latitude, longitude, direction);
    let places = map.get_nearby_places()?;
    tracing::debug!(count = places.len(), "nearby places found");
    Ok(())
}
