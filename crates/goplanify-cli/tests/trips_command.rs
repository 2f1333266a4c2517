//! `goplanify trips ...` against the built-in catalog and the remote placeholder.

use goplanify_runtime::{Config, SourceKind};
use goplanify_testing::{TestWorld, assertions};

#[test]
fn test_trips_list_json_has_one_card_per_trip() -> anyhow::Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["trips", "list", "--format", "json"])?;
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json()?;
    assertions::assert_card_count(&json, 4)?;
    assertions::assert_destinations(&json, &["Paris", "Rome", "New York", "Kyoto"])?;
    assert_eq!(json["content"]["heading"], "Choose Your Travel Package");
    assert_eq!(json["content"]["status"]["state"], "ready");
    assert_eq!(
        json["content"]["cards"][0]["action_label"],
        "Select and Add to My Trips"
    );

    Ok(())
}

#[test]
fn test_trips_list_plain_renders_cards() -> anyhow::Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["trips", "list"])?;
    assert!(result.success());

    let out = result.stdout();
    assert!(out.starts_with("Choose Your Travel Package\n"));
    assert!(out.contains("Trip to Paris\nThings to do:\n- Louvre Museum\n- Eiffel Tower\n"));
    assert!(out.contains("Trip to Kyoto\nThings to do:\n[Select and Add to My Trips]\n"));

    Ok(())
}

#[test]
fn test_trips_find_shows_itinerary() -> anyhow::Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["trips", "find", "Rome"])?;
    assert!(result.success());
    assert!(result.stdout().contains("Trip to Rome (t2)"));
    assert!(result.stdout().contains("Colosseum"));
    assert!(result.stdout().contains("Vatican Museums"));

    Ok(())
}

#[test]
fn test_trips_find_miss_is_not_found() -> anyhow::Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["trips", "find", "Atlantis"])?;
    assert!(!result.success());
    assert!(result.stderr().contains("Not found: no trip to 'Atlantis'"));
    assert!(result.stdout().is_empty());

    Ok(())
}

#[test]
fn test_trips_select_emits_itinerary_intent() -> anyhow::Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["trips", "select", "Paris", "--format", "json"])?;
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json()?;
    assertions::assert_itinerary_intent(&json, "t1")?;
    assert_eq!(json["content"]["intent"]["route"], "ItineraryScreen/t1");

    Ok(())
}

#[test]
fn test_trips_select_plain_prints_route() -> anyhow::Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["trips", "select", "New York"])?;
    assert!(result.success());
    assert!(result.stdout().contains("Navigate: ItineraryScreen/t3"));

    Ok(())
}

#[test]
fn test_trips_select_unknown_destination_fails() -> anyhow::Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["trips", "select", "Atlantis"])?;
    assert!(!result.success());
    assert!(result.stderr().contains("Not found"));

    Ok(())
}

fn remote_world() -> TestWorld {
    let mut config = Config::default();
    config.store.source = SourceKind::Remote;
    TestWorld::new().with_config(&config)
}

#[test]
fn test_remote_source_lists_failure_state() -> anyhow::Result<()> {
    let world = remote_world();

    let result = world.run(&["trips", "list", "--format", "json"])?;
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json()?;
    assert_eq!(json["content"]["status"]["state"], "failed");
    assert_eq!(json["content"]["status"]["message"], "no trip source configured");
    assert_eq!(json["badge"]["level"], "warning");
    assertions::assert_card_count(&json, 0)?;

    let plain = world.run(&["trips", "list"])?;
    assert!(plain.stdout().contains("Could not load trips: no trip source configured"));

    Ok(())
}

#[test]
fn test_remote_source_select_fails() -> anyhow::Result<()> {
    let world = remote_world();

    let result = world.run(&["trips", "select", "Paris"])?;
    assert!(!result.success());
    assert!(
        result
            .stderr()
            .contains("Could not load trips: no trip source configured")
    );

    Ok(())
}
