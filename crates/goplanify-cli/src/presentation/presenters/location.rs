use crate::args::hints::cmd;
use crate::presentation::view_models::{CommandResultViewModel, Guidance, LocationViewModel};
use goplanify_types::Map;

pub fn present_location(map: &Map) -> CommandResultViewModel<LocationViewModel> {
    let content = LocationViewModel {
        map_id: map.id.to_string(),
        latitude: map.latitude,
        longitude: map.longitude,
        direction: map.direction.clone(),
        line: map.show_location(),
    };

    let mut result = CommandResultViewModel::new(content);
    if map.direction.trim().is_empty() {
        result = result.with_suggestion(
            Guidance::new("Add a street or landmark", cmd::LOCATION_SHOW),
        );
    }
    result
}
