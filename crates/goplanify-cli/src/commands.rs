use super::args::hints::cmd;
use super::args::{Cli, Commands, ConfigCommand, LocationCommand, TripsCommand};
use super::context::ExecutionContext;
use super::handlers;
use anyhow::Result;
use goplanify_runtime::resolve_data_dir;

pub async fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    tracing::debug!(data_dir = %data_dir.display(), "resolved data directory");

    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    let ctx = ExecutionContext::new(data_dir, cli.format, cli.screen_width);

    match command {
        Commands::Trips { command } => match command {
            TripsCommand::List => handlers::trips::handle_list(&ctx).await,
            TripsCommand::Find { destination } => {
                handlers::trips::handle_find(&ctx, &destination).await
            }
            TripsCommand::Select { destination } => {
                handlers::trips::handle_select(&ctx, &destination).await
            }
        },

        Commands::Location { command } => match command {
            LocationCommand::Show {
                lat,
                lon,
                direction,
            } => handlers::location::handle_show(&ctx, lat, lon, &direction),
            LocationCommand::Nearby {
                lat,
                lon,
                direction,
            } => handlers::location::handle_nearby(lat, lon, &direction),
        },

        Commands::Prefs {
            theme,
            language,
            notifications,
        } => handlers::prefs::handle(&ctx, theme, language, notifications),

        Commands::Config { command } => match command {
            ConfigCommand::Init { force } => handlers::config::handle_init(&ctx, force),
            ConfigCommand::Show => handlers::config::handle_show(&ctx),
        },

        Commands::Demo { select } => handlers::demo::handle(&ctx, select).await,
    }
}

fn show_guidance() {
    println!("goplanify - Choose a travel package and plan the trip\n");
    println!("Quick commands:");
    println!("  {:<40} # Browse travel packages", cmd::TRIPS_LIST);
    println!("  {:<40} # Open a trip's itinerary", cmd::TRIPS_SELECT);
    println!("  {:<40} # Watch the trip list screen", cmd::DEMO);
    println!("  {:<40} # Write the default config", cmd::CONFIG_INIT);
    println!("  {} # Describe a place\n", cmd::LOCATION_SHOW);
    println!("For more commands:");
    println!("  goplanify --help");
}
