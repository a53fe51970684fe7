pub mod config;
pub mod error;
pub mod format;
pub mod geo;
pub mod interaction;
pub mod marker;
pub mod picking;
pub mod records;
pub mod stars;

pub use config::{get_config, reload_config, reload_config_from};
