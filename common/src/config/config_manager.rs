use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use super::{
    ConfigContentProvider, ConfigError, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches a config document. A missing document yields
/// `TConfig::default()` and is not cached, so a later save is picked up.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(FileContentConfigProvider::new(file_path), YamlConfigSerializer)
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(config_content_provider: TConfigContentProvider, config_serializer: TConfigSerializer) -> Self {
        Self {
            config: Mutex::new(None),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn content_provider(&self) -> &TConfigContentProvider {
        &self.config_content_provider
    }

    fn cached(&self) -> MutexGuard<'_, Option<TConfig>> {
        self.config.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn get_config(&self) -> Result<TConfig, ConfigError> {
        let mut current = self.cached();

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config: TConfig = self.config_serializer.deserialize(&config_data)?;
        config.validate().map_err(ConfigError::Invalid)?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), ConfigError> {
        config.validate().map_err(ConfigError::Invalid)?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        *self.cached() = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct TestConfig {
        name: String,
        rounds: u32,
    }

    impl Validate for TestConfig {
        fn validate(&self) -> Result<(), String> {
            if self.rounds > 100 {
                return Err("rounds must not exceed 100".to_string());
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryProvider {
        content: RefCell<Option<String>>,
        reads: RefCell<u32>,
    }

    impl ConfigContentProvider for MemoryProvider {
        fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
            *self.reads.borrow_mut() += 1;
            Ok(self.content.borrow().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
            *self.content.borrow_mut() = Some(content.to_string());
            Ok(())
        }
    }

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_triki_config_{}.yaml", random_number))
    }

    #[test]
    fn test_missing_document_gives_default() {
        let manager: ConfigManager<_, TestConfig> = ConfigManager::new(MemoryProvider::default(), YamlConfigSerializer);

        assert_eq!(manager.get_config().unwrap(), TestConfig::default());
    }

    #[test]
    fn test_loaded_config_is_cached() {
        let provider = MemoryProvider::default();
        provider.set_config_content("name: cached\nrounds: 3\n").unwrap();
        let manager: ConfigManager<_, TestConfig> = ConfigManager::new(provider, YamlConfigSerializer);

        let first = manager.get_config().unwrap();
        let second = manager.get_config().unwrap();

        assert_eq!(first, second);
        assert_eq!(first.rounds, 3);
        assert_eq!(*manager.content_provider().reads.borrow(), 1);
    }

    #[test]
    fn test_invalid_document_is_rejected() {
        let provider = MemoryProvider::default();
        provider.set_config_content("name: big\nrounds: 500\n").unwrap();
        let manager: ConfigManager<_, TestConfig> = ConfigManager::new(provider, YamlConfigSerializer);

        assert!(matches!(manager.get_config(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_document_is_parse_error() {
        let provider = MemoryProvider::default();
        provider.set_config_content("rounds: [not, a, number]").unwrap();
        let manager: ConfigManager<_, TestConfig> = ConfigManager::new(provider, YamlConfigSerializer);

        assert!(matches!(manager.get_config(), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_set_config_refuses_invalid() {
        let manager: ConfigManager<_, TestConfig> = ConfigManager::new(MemoryProvider::default(), YamlConfigSerializer);
        let config = TestConfig {
            name: "x".to_string(),
            rounds: 101,
        };

        assert!(manager.set_config(&config).is_err());
        assert!(manager.content_provider().content.borrow().is_none());
    }

    #[test]
    fn test_yaml_file_round_trip() {
        let file_path = get_temp_file_path();
        let config = TestConfig {
            name: "file".to_string(),
            rounds: 9,
        };

        let manager: ConfigManager<_, TestConfig> = ConfigManager::from_yaml_file(file_path.clone());
        manager.set_config(&config).unwrap();

        let reloaded: ConfigManager<_, TestConfig> = ConfigManager::from_yaml_file(file_path.clone());
        assert_eq!(reloaded.get_config().unwrap(), config);

        let _ = std::fs::remove_file(&file_path);
    }
}
