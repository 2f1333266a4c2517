use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Browse and select travel packages")]
    Trips {
        #[command(subcommand)]
        command: TripsCommand,
    },

    #[command(about = "Describe locations")]
    Location {
        #[command(subcommand)]
        command: LocationCommand,
    },

    #[command(about = "Show or update the user's preferences")]
    Prefs {
        #[arg(long)]
        theme: Option<String>,

        #[arg(long)]
        language: Option<String>,

        #[arg(long)]
        notifications: Option<bool>,
    },

    #[command(about = "Manage the configuration file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    #[command(about = "Run the trip list screen against the demo catalog")]
    Demo {
        #[arg(long, help = "Also select this destination after the list renders")]
        select: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum TripsCommand {
    #[command(about = "List every available travel package")]
    List,

    #[command(about = "Find the first trip to a destination")]
    Find { destination: String },

    #[command(about = "Select a trip and print the resulting navigation")]
    Select { destination: String },
}

#[derive(Subcommand)]
pub enum LocationCommand {
    #[command(about = "Format a location as a readable line")]
    Show {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        #[arg(long)]
        direction: String,
    },

    #[command(about = "List places near a location")]
    Nearby {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        #[arg(long, default_value = "")]
        direction: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Write the default configuration file")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },

    #[command(about = "Print the effective configuration")]
    Show,
}
