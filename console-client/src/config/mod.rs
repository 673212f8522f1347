mod logging_config;
mod main_config;

pub use logging_config::LoggingConfig;
pub use main_config::get_config_manager;
