use serde::{Deserialize, Serialize};
use triki_common::config::Validate;

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub prefix: Option<String>,
    pub verbose: bool,
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(prefix) = &self.prefix {
            if prefix.trim().is_empty() {
                return Err("logging prefix must not be blank".to_string());
            }
            if prefix.contains(['[', ']']) {
                return Err("logging prefix must not contain brackets".to_string());
            }
        }
        Ok(())
    }
}
