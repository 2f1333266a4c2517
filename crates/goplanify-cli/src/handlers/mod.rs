pub mod config;
pub mod demo;
pub mod location;
pub mod prefs;
pub mod trips;
