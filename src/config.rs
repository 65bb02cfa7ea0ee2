//! Configuration loading and environment overrides.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cleaner::CleanerConfig;
use crate::defaults;
use crate::error::{HearscribeError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub cleaner: CleanerSettings,
    pub transcript: TranscriptSettings,
    pub storage: StorageSettings,
}

/// Cleaning service configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CleanerSettings {
    pub base_url: String,
    pub model: String,
    /// Usually left empty in the file and supplied via `HEARSCRIBE_API_KEY`.
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    pub max_chunk_tokens: usize,
}

/// Transcript source configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TranscriptSettings {
    pub language: String,
}

/// Artifact storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageSettings {
    pub output_dir: PathBuf,
}

impl Default for CleanerSettings {
    fn default() -> Self {
        Self {
            base_url: defaults::BASE_URL.to_string(),
            model: defaults::MODEL.to_string(),
            api_key: None,
            timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
            max_chunk_tokens: defaults::MAX_CHUNK_TOKENS,
        }
    }
}

impl Default for TranscriptSettings {
    fn default() -> Self {
        Self {
            language: defaults::LANGUAGE.to_string(),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(defaults::OUTPUT_DIR),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file is missing or contains invalid TOML.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                HearscribeError::ConfigFileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                HearscribeError::Io(e)
            }
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Load configuration from a file or return defaults if the file doesn't
    /// exist. Invalid TOML is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(HearscribeError::ConfigFileNotFound { .. }) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - HEARSCRIBE_API_KEY → cleaner.api_key
    /// - HEARSCRIBE_MODEL → cleaner.model
    /// - HEARSCRIBE_BASE_URL → cleaner.base_url
    /// - HEARSCRIBE_OUTPUT_DIR → storage.output_dir
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(api_key) = std::env::var("HEARSCRIBE_API_KEY")
            && !api_key.is_empty()
        {
            self.cleaner.api_key = Some(api_key);
        }

        if let Ok(model) = std::env::var("HEARSCRIBE_MODEL")
            && !model.is_empty()
        {
            self.cleaner.model = model;
        }

        if let Ok(base_url) = std::env::var("HEARSCRIBE_BASE_URL")
            && !base_url.is_empty()
        {
            self.cleaner.base_url = base_url;
        }

        if let Ok(output_dir) = std::env::var("HEARSCRIBE_OUTPUT_DIR")
            && !output_dir.is_empty()
        {
            self.storage.output_dir = PathBuf::from(output_dir);
        }

        self
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/hearscribe/config.toml on Linux
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join("hearscribe")
            .join("config.toml")
    }

    /// Cleaner connection settings, requiring an API key to be present.
    pub fn cleaner_config(&self) -> Result<CleanerConfig> {
        let api_key = self
            .cleaner
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| HearscribeError::ConfigInvalidValue {
                key: "cleaner.api_key".to_string(),
                message: "set it in the config file or via HEARSCRIBE_API_KEY".to_string(),
            })?;

        Ok(CleanerConfig {
            base_url: self.cleaner.base_url.clone(),
            api_key,
            model: self.cleaner.model.clone(),
            timeout: Duration::from_secs(self.cleaner.timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::NamedTempFile;

    // Mutex to serialize tests that modify environment variables
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    // SAFETY: These helpers are only used in tests with ENV_LOCK held,
    // ensuring no concurrent access to environment variables.
    fn set_env(key: &str, value: &str) {
        unsafe { std::env::set_var(key, value) }
    }

    fn remove_env(key: &str) {
        unsafe { std::env::remove_var(key) }
    }

    fn clear_hearscribe_env() {
        remove_env("HEARSCRIBE_API_KEY");
        remove_env("HEARSCRIBE_MODEL");
        remove_env("HEARSCRIBE_BASE_URL");
        remove_env("HEARSCRIBE_OUTPUT_DIR");
    }

    #[test]
    fn test_default_config_has_correct_values() {
        let config = Config::default();

        assert_eq!(config.cleaner.base_url, "https://api.openai.com/v1");
        assert_eq!(config.cleaner.model, "gpt-4o-mini");
        assert_eq!(config.cleaner.api_key, None);
        assert_eq!(config.cleaner.timeout_secs, 120);
        assert_eq!(config.cleaner.max_chunk_tokens, 10_000);

        assert_eq!(config.transcript.language, "en");
        assert_eq!(config.storage.output_dir, PathBuf::from("transcripts"));
    }

    #[test]
    fn test_load_from_toml_file() {
        let toml_content = r#"
            [cleaner]
            base_url = "http://localhost:8080/v1"
            model = "local-model"
            api_key = "sk-test"
            timeout_secs = 30
            max_chunk_tokens = 500

            [transcript]
            language = "de"

            [storage]
            output_dir = "/tmp/hearings"
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = Config::load(temp_file.path()).unwrap();

        assert_eq!(config.cleaner.base_url, "http://localhost:8080/v1");
        assert_eq!(config.cleaner.model, "local-model");
        assert_eq!(config.cleaner.api_key, Some("sk-test".to_string()));
        assert_eq!(config.cleaner.timeout_secs, 30);
        assert_eq!(config.cleaner.max_chunk_tokens, 500);
        assert_eq!(config.transcript.language, "de");
        assert_eq!(config.storage.output_dir, PathBuf::from("/tmp/hearings"));
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let toml_content = r#"
            [cleaner]
            model = "gpt-4o"
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = Config::load(temp_file.path()).unwrap();

        assert_eq!(config.cleaner.model, "gpt-4o");
        assert_eq!(config.cleaner.base_url, "https://api.openai.com/v1");
        assert_eq!(config.cleaner.max_chunk_tokens, 10_000);
        assert_eq!(config.transcript.language, "en");
    }

    #[test]
    fn test_load_missing_file_is_config_file_not_found() {
        let error = Config::load(Path::new("/nonexistent/hearscribe.toml")).unwrap_err();
        assert!(matches!(error, HearscribeError::ConfigFileNotFound { .. }));
    }

    #[test]
    fn test_load_or_default_falls_back_on_missing_file() {
        let config = Config::load_or_default(Path::new("/nonexistent/hearscribe.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_or_default_rejects_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"cleaner = not valid").unwrap();

        assert!(Config::load_or_default(temp_file.path()).is_err());
    }

    #[test]
    fn test_env_override_api_key_and_model() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_hearscribe_env();

        set_env("HEARSCRIBE_API_KEY", "sk-from-env");
        set_env("HEARSCRIBE_MODEL", "gpt-4o");
        let config = Config::default().with_env_overrides();

        assert_eq!(config.cleaner.api_key, Some("sk-from-env".to_string()));
        assert_eq!(config.cleaner.model, "gpt-4o");

        clear_hearscribe_env();
    }

    #[test]
    fn test_env_override_ignores_empty_values() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_hearscribe_env();

        set_env("HEARSCRIBE_MODEL", "");
        let config = Config::default().with_env_overrides();

        assert_eq!(config.cleaner.model, "gpt-4o-mini");

        clear_hearscribe_env();
    }

    #[test]
    fn test_cleaner_config_requires_api_key() {
        let config = Config::default();
        let error = config.cleaner_config().unwrap_err();
        assert!(
            error.to_string().contains("cleaner.api_key"),
            "unexpected error: {error}"
        );
    }

    #[test]
    fn test_cleaner_config_rejects_empty_api_key() {
        let mut config = Config::default();
        config.cleaner.api_key = Some(String::new());
        assert!(config.cleaner_config().is_err());
    }

    #[test]
    fn test_cleaner_config_carries_settings() {
        let mut config = Config::default();
        config.cleaner.api_key = Some("sk-test".to_string());
        config.cleaner.timeout_secs = 45;

        let cleaner_config = config.cleaner_config().unwrap();
        assert_eq!(cleaner_config.api_key, "sk-test");
        assert_eq!(cleaner_config.model, "gpt-4o-mini");
        assert_eq!(cleaner_config.timeout, Duration::from_secs(45));
    }

    #[test]
    fn test_default_path_ends_with_config_toml() {
        let path = Config::default_path();
        assert!(path.ends_with("hearscribe/config.toml"));
    }
}
