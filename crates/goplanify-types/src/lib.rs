pub mod domain;
pub mod error;
pub mod navigation;

pub use domain::*;
pub use error::{Error, Result};
pub use navigation::{NavigationIntent, Navigator, screen};
