use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::ConfigError;

pub trait ConfigContentProvider {
    /// `Ok(None)` when there is nothing stored yet.
    fn get_config_content(&self) -> Result<Option<String>, ConfigError>;
    fn set_config_content(&self, content: &str) -> Result<(), ConfigError>;
}

pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn io_error(&self, source: std::io::Error) -> ConfigError {
        ConfigError::Io {
            path: self.file_path.display().to_string(),
            source,
        }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(self.io_error(err)),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
        std::fs::write(&self.file_path, content).map_err(|e| self.io_error(e))
    }
}
