// Commands are namespaced by the entity they act on (trips, location, prefs,
// config) so `--help` stays readable as the surface grows.

mod commands;
mod enums;
pub mod hints;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "goplanify")]
#[command(about = "Browse travel packages and plan trips", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding config.toml (defaults to GOPLANIFY_PATH or the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Screen width in dp used to lay out the top bar (overrides config)
    #[arg(long, global = true)]
    pub screen_width: Option<u32>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
