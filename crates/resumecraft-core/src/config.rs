//! Application configuration
//!
//! Configuration is loaded from:
//! 1. Default values
//! 2. Config file (~/.config/resumecraft/config.toml)
//! 3. Environment variables (RESUMECRAFT_* prefix)
//!
//! Environment variables take precedence over config file values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::storage::{validate_key, DEFAULT_STORAGE_KEY};

/// Environment variable prefix
const ENV_PREFIX: &str = "RESUMECRAFT";

/// Base URL for generated share links
pub const DEFAULT_SHARE_BASE_URL: &str = "https://resumecraft.pro/view";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding saved resume state
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Key the resume state is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Base URL share links are built on
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,

    /// Write logs to this file instead of stderr
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            storage_key: default_storage_key(),
            share_base_url: default_share_base_url(),
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from default location and environment
    ///
    /// Order of precedence (highest to lowest):
    /// 1. Environment variables (RESUMECRAFT_DATA_DIR, RESUMECRAFT_STORAGE_KEY, ...)
    /// 2. Config file (~/.config/resumecraft/config.toml or RESUMECRAFT_CONFIG)
    /// 3. Default values
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_file_path())
    }

    /// Load configuration, preferring a path given on the command line
    pub fn load_with_cli_override(path: Option<&PathBuf>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => Self::load(),
        }
    }

    /// Load configuration from a specific path
    ///
    /// Environment variables are still applied as overrides.
    /// If the file doesn't exist, defaults are used.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        config.ensure_data_dir()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (useful for testing)
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let mut config: Config =
            toml::from_str(toml_content).context("Failed to parse config TOML")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        // RESUMECRAFT_DATA_DIR
        if let Ok(val) = std::env::var(format!("{}_DATA_DIR", ENV_PREFIX)) {
            self.data_dir = PathBuf::from(val);
        }

        // RESUMECRAFT_STORAGE_KEY (empty keeps the current key)
        if let Ok(val) = std::env::var(format!("{}_STORAGE_KEY", ENV_PREFIX)) {
            if !val.is_empty() {
                self.storage_key = val;
            }
        }

        // RESUMECRAFT_SHARE_BASE_URL
        if let Ok(val) = std::env::var(format!("{}_SHARE_BASE_URL", ENV_PREFIX)) {
            if !val.is_empty() {
                self.share_base_url = val;
            }
        }

        // RESUMECRAFT_LOG_FILE
        if let Ok(val) = std::env::var(format!("{}_LOG_FILE", ENV_PREFIX)) {
            self.log_file = if val.is_empty() {
                None
            } else {
                Some(PathBuf::from(val))
            };
        }
    }

    /// Reject settings that would put state outside the data directory
    pub fn validate(&self) -> Result<()> {
        validate_key(&self.storage_key).context("Invalid storage_key setting")?;
        Ok(())
    }

    /// Ensure data directory exists
    fn ensure_data_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            std::fs::create_dir_all(&self.data_dir)
                .with_context(|| format!("Failed to create data directory: {:?}", self.data_dir))?;
        }
        Ok(())
    }

    /// Save configuration to the default file
    pub fn save(&self) -> Result<()> {
        self.save_to_path(&Self::config_file_path())
    }

    /// Save configuration to a specific file
    pub fn save_to_path(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;
        Ok(())
    }

    /// Get the config file path
    ///
    /// Can be overridden with RESUMECRAFT_CONFIG environment variable
    pub fn config_file_path() -> PathBuf {
        if let Ok(path) = std::env::var(format!("{}_CONFIG", ENV_PREFIX)) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("resumecraft")
            .join("config.toml")
    }

    /// Get the path of the saved resume state file
    pub fn state_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", self.storage_key))
    }

    /// Get the default export directory
    pub fn export_dir(&self) -> PathBuf {
        self.data_dir.join("exports")
    }
}

/// Get the default data directory
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("resumecraft")
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_share_base_url() -> String {
    DEFAULT_SHARE_BASE_URL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Mutex to serialize tests that touch environment variables
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Guard that locks env access and saves/restores env vars
    struct EnvGuard<'a> {
        _lock: std::sync::MutexGuard<'a, ()>,
        saved: Vec<(String, Option<String>)>,
    }

    impl<'a> EnvGuard<'a> {
        fn new(vars: &[&str]) -> Self {
            let lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
            let saved = vars
                .iter()
                .map(|&name| (name.to_string(), env::var(name).ok()))
                .collect();
            // Clear all the vars
            for name in vars {
                env::remove_var(name);
            }
            Self { _lock: lock, saved }
        }
    }

    impl Drop for EnvGuard<'_> {
        fn drop(&mut self) {
            for (name, value) in &self.saved {
                match value {
                    Some(v) => env::set_var(name, v),
                    None => env::remove_var(name),
                }
            }
        }
    }

    const ENV_VARS: &[&str] = &[
        "RESUMECRAFT_DATA_DIR",
        "RESUMECRAFT_STORAGE_KEY",
        "RESUMECRAFT_SHARE_BASE_URL",
        "RESUMECRAFT_LOG_FILE",
    ];

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.storage_key, "resume-storage");
        assert_eq!(config.share_base_url, "https://resumecraft.pro/view");
        assert!(config.log_file.is_none());
        assert!(config.data_dir.ends_with("resumecraft"));
    }

    #[test]
    fn test_file_paths() {
        let config = Config::default();

        assert!(config.state_path().ends_with("resume-storage.json"));
        assert!(config.export_dir().ends_with("exports"));
    }

    #[test]
    fn test_env_override_data_dir() {
        let _guard = EnvGuard::new(ENV_VARS);

        let mut config = Config::default();

        env::set_var("RESUMECRAFT_DATA_DIR", "/tmp/resumecraft-test");
        config.apply_env_overrides();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/resumecraft-test"));
    }

    #[test]
    fn test_env_override_storage_key() {
        let _guard = EnvGuard::new(ENV_VARS);

        let mut config = Config::default();

        env::set_var("RESUMECRAFT_STORAGE_KEY", "work-resume");
        config.apply_env_overrides();
        assert_eq!(config.storage_key, "work-resume");
        assert!(config.state_path().ends_with("work-resume.json"));

        // Empty string keeps the current key
        env::set_var("RESUMECRAFT_STORAGE_KEY", "");
        config.apply_env_overrides();
        assert_eq!(config.storage_key, "work-resume");
    }

    #[test]
    fn test_escaping_storage_key_is_rejected() {
        let _guard = EnvGuard::new(ENV_VARS);
        let temp = TempDir::new().unwrap();

        env::set_var("RESUMECRAFT_STORAGE_KEY", "../escaped");
        let err = Config::load_from_path(&temp.path().join("config.toml")).unwrap_err();
        assert!(format!("{:#}", err).contains("storage_key"));

        env::remove_var("RESUMECRAFT_STORAGE_KEY");
        assert!(Config::load_from_str("storage_key = \"a/b\"").is_err());
        assert!(Config::load_from_str("storage_key = \"work\"").is_ok());
    }

    #[test]
    fn test_env_override_log_file() {
        let _guard = EnvGuard::new(ENV_VARS);

        let mut config = Config::default();

        env::set_var("RESUMECRAFT_LOG_FILE", "/tmp/resumecraft.log");
        config.apply_env_overrides();
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/resumecraft.log")));

        // Empty string clears it
        env::set_var("RESUMECRAFT_LOG_FILE", "");
        config.apply_env_overrides();
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_serialization() {
        let _guard = EnvGuard::new(ENV_VARS);

        let config = Config {
            data_dir: PathBuf::from("/data/resumecraft"),
            storage_key: "resume-storage".to_string(),
            share_base_url: "https://cv.example.com/v".to_string(),
            log_file: Some(PathBuf::from("/var/log/resumecraft.log")),
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("data_dir"));
        assert!(toml_str.contains("share_base_url"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.data_dir, config.data_dir);
        assert_eq!(parsed.share_base_url, config.share_base_url);
        assert_eq!(parsed.log_file, config.log_file);
    }

    #[test]
    fn test_load_from_str() {
        let _guard = EnvGuard::new(ENV_VARS);

        let toml = r#"
            data_dir = "/custom/data"
            storage_key = "cv"
        "#;

        let config = Config::load_from_str(toml).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/custom/data"));
        assert_eq!(config.storage_key, "cv");
        // Unset keys take defaults
        assert_eq!(config.share_base_url, DEFAULT_SHARE_BASE_URL);
    }

    #[test]
    fn test_load_from_path_missing_file() {
        let _guard = EnvGuard::new(ENV_VARS);
        let temp_dir = TempDir::new().unwrap();
        env::set_var("RESUMECRAFT_DATA_DIR", temp_dir.path().join("data"));

        let path = PathBuf::from("/nonexistent/config.toml");
        let config = Config::load_from_path(&path).unwrap();
        // Should return defaults when file doesn't exist
        assert_eq!(config.storage_key, "resume-storage");
        assert!(config.data_dir.exists());
    }

    #[test]
    fn test_save_and_reload() {
        let _guard = EnvGuard::new(ENV_VARS);
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            data_dir: temp_dir.path().join("data"),
            storage_key: "cv".to_string(),
            ..Config::default()
        };
        config.save_to_path(&path).unwrap();

        let loaded = Config::load_with_cli_override(Some(&path)).unwrap();
        assert_eq!(loaded.storage_key, "cv");
        assert_eq!(loaded.data_dir, temp_dir.path().join("data"));
    }
}
