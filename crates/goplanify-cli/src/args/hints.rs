pub mod cmd {
    // Trip commands
    pub const TRIPS_LIST: &str = "goplanify trips list";
    pub const TRIPS_SELECT: &str = "goplanify trips select <destination>";

    // Location commands
    pub const LOCATION_SHOW: &str = "goplanify location show --lat <LAT> --lon <LON> --direction <TEXT>";

    // Config commands
    pub const CONFIG_INIT: &str = "goplanify config init";
    pub const CONFIG_SHOW: &str = "goplanify config show";

    pub const PREFS: &str = "goplanify prefs --theme <THEME> --language <LANG>";
    pub const DEMO: &str = "goplanify demo";
}

pub mod fmt {
    pub fn trips_select(destination: &str) -> String {
        format!("goplanify trips select \"{}\"", destination)
    }

    pub fn trips_find(destination: &str) -> String {
        format!("goplanify trips find \"{}\"", destination)
    }
}
