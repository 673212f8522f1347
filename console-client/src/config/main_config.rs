use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use triki_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use triki_common::games::tictactoe::TicTacToeSettings;

use super::LoggingConfig;

const CONFIG_FILE_NAME: &str = "triki_config.yaml";

/// Next to the executable when it can be located, else the working directory.
pub fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<&Path>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(get_config_path()),
    }
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub tictactoe: TicTacToeSettings,
    pub logging: LoggingConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.logging.validate()?;
        Ok(())
    }
}
