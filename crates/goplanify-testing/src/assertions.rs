//! Custom assertions over the CLI's JSON output.
//!
//! JSON results are `CommandResultViewModel`s: the payload sits under `content`.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that a trip list holds the expected number of cards.
pub fn assert_card_count(json: &Value, expected: usize) -> Result<()> {
    let cards = json["content"]["cards"]
        .as_array()
        .context("Expected 'content.cards' array in JSON")?;

    if cards.len() != expected {
        anyhow::bail!("Expected {} cards, got {}", expected, cards.len());
    }

    Ok(())
}

/// Assert card destinations, in order.
pub fn assert_destinations(json: &Value, expected: &[&str]) -> Result<()> {
    let cards = json["content"]["cards"]
        .as_array()
        .context("Expected 'content.cards' array in JSON")?;

    let destinations: Vec<&str> = cards
        .iter()
        .filter_map(|card| card["destination"].as_str())
        .collect();

    if destinations != expected {
        anyhow::bail!("Expected destinations {:?}, got {:?}", expected, destinations);
    }

    Ok(())
}

/// Assert that the output carries a navigation intent to the given trip.
pub fn assert_itinerary_intent(json: &Value, trip_id: &str) -> Result<()> {
    let intent = &json["content"]["intent"];
    let screen = intent["screen"]
        .as_str()
        .context("Expected 'content.intent.screen' in JSON")?;
    let actual = intent["tripId"]
        .as_str()
        .context("Expected 'content.intent.tripId' in JSON")?;

    if screen != "ItineraryScreen" || actual != trip_id {
        anyhow::bail!(
            "Expected ItineraryScreen/{}, got {}/{}",
            trip_id,
            screen,
            actual
        );
    }

    Ok(())
}
