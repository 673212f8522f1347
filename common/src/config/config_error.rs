use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    Io { path: String, source: std::io::Error },
    Parse(serde_yaml_ng::Error),
    Serialize(serde_yaml_ng::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => write!(f, "Config file {}: {}", path, source),
            ConfigError::Parse(e) => write!(f, "Failed to deserialize config: {}", e),
            ConfigError::Serialize(e) => write!(f, "Failed to serialize config: {}", e),
            ConfigError::Invalid(reason) => write!(f, "Config validation error: {}", reason),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(e) | ConfigError::Serialize(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}
