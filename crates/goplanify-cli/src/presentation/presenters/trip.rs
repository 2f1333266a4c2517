use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, IntentViewModel, ItineraryEntryViewModel,
    SELECT_ACTION_LABEL, SelectionViewModel, StatusBadge, TRIP_LIST_HEADING, TripCardViewModel,
    TripDetailViewModel, TripListStatus, TripListViewModel,
};
use goplanify_runtime::{FetchStatus, TripsState};
use goplanify_types::{NavigationIntent, Trip};

/// Derive the trip list screen from a store snapshot.
///
/// One card per trip, in store order. Each card is built from its own trip,
/// so two trips sharing a destination still render their own activities.
pub fn present_trip_list(state: &TripsState) -> TripListViewModel {
    let status = match &state.status {
        FetchStatus::Idle => TripListStatus::Idle,
        FetchStatus::Loading => TripListStatus::Loading,
        FetchStatus::Ready { .. } => TripListStatus::Ready,
        FetchStatus::Failed { error, .. } => TripListStatus::Failed {
            message: error.to_string(),
        },
    };

    TripListViewModel {
        heading: TRIP_LIST_HEADING.to_string(),
        status,
        cards: state.trips.iter().map(present_card).collect(),
        revision: state.revision,
    }
}

fn present_card(trip: &Trip) -> TripCardViewModel {
    TripCardViewModel {
        trip_id: trip.id.to_string(),
        destination: trip.destination.clone(),
        user_name: trip.user.name.clone(),
        activities: trip
            .activity_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
        action_label: SELECT_ACTION_LABEL.to_string(),
    }
}

pub fn present_trip_list_result(
    content: TripListViewModel,
) -> CommandResultViewModel<TripListViewModel> {
    let mut result = CommandResultViewModel::new(content);

    if let TripListStatus::Failed { message } = &result.content.status {
        let label = format!("Trip list may be stale: {}", message);
        result = result.with_badge(StatusBadge::warning(label));
    } else if result.content.cards.is_empty() {
        result = result
            .with_badge(StatusBadge::info("No trips available"))
            .with_suggestion(
                Guidance::new("Run the screen against the demo catalog", cmd::DEMO),
            );
    } else if let Some(first) = result.content.cards.first() {
        let hint = fmt::trips_select(&first.destination);
        result = result.with_suggestion(
            Guidance::new("Open a trip's itinerary", hint),
        );
    }

    result
}

pub fn present_trip_detail(trip: &Trip) -> CommandResultViewModel<TripDetailViewModel> {
    let content = TripDetailViewModel {
        trip_id: trip.id.to_string(),
        destination: trip.destination.clone(),
        user_name: trip.user.name.clone(),
        items: trip
            .itineraries
            .iter()
            .map(|item| ItineraryEntryViewModel {
                item_id: item.id.to_string(),
                name: item.name.clone(),
                location: item.location.clone(),
                start_date: item.start_date.clone(),
                end_date: item.end_date.clone(),
            })
            .collect(),
    };

    CommandResultViewModel::new(content).with_suggestion(
        Guidance::new("Select this trip", fmt::trips_select(&trip.destination)),
    )
}

pub fn present_intent(intent: &NavigationIntent) -> IntentViewModel {
    IntentViewModel {
        screen: intent.screen.clone(),
        trip_id: intent.trip_id.as_ref().map(ToString::to_string),
        route: intent.route(),
    }
}

pub fn present_selection(destination: &str, intent: &NavigationIntent) -> SelectionViewModel {
    SelectionViewModel {
        destination: destination.to_string(),
        intent: present_intent(intent),
    }
}

pub fn present_selection_result(
    destination: &str,
    intent: &NavigationIntent,
) -> CommandResultViewModel<SelectionViewModel> {
    CommandResultViewModel::new(present_selection(destination, intent))
        .with_badge(StatusBadge::success("Trip selected"))
        .with_suggestion(
            Guidance::new("Inspect the itinerary", fmt::trips_find(destination)),
        )
}
