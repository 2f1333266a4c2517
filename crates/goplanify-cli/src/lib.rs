mod args;
pub mod catalog;
mod commands;
mod context;
mod handlers;
pub mod presentation;

pub use args::{
    Cli, Commands, ConfigCommand, LocationCommand, LogLevel, OutputFormat, TripsCommand,
};
pub use commands::run;
pub use presentation::binder::{ChannelNavigator, MenuEntry, TripListBinder};
