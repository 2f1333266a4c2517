//! Testing infrastructure for goplanify tests.
//!
//! This crate provides utilities for writing robust tests:
//! - `TestWorld`: isolated data directory and configured CLI invocations
//! - `assertions`: checks over the CLI's JSON output
//! - `fixtures`: sample users, trips and catalogs
//! - `sources`: scripted `TripSource` implementations (gated, failing, queued)
//! - `navigation`: a navigator that records every intent

pub mod assertions;
pub mod fixtures;
pub mod navigation;
pub mod sources;
pub mod world;

pub use navigation::RecordingNavigator;
pub use sources::{FailingSource, GatedSource, ScriptedSource};
pub use world::TestWorld;
