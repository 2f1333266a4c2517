pub mod config;
pub mod location;
pub mod preferences;
pub mod top_bar;
pub mod trip;

pub use config::{present_config, present_config_init};
pub use location::present_location;
pub use preferences::present_preferences;
pub use top_bar::present_top_bar;
pub use trip::{
    present_intent, present_selection, present_selection_result, present_trip_detail,
    present_trip_list, present_trip_list_result,
};
