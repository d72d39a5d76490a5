//! Config command handlers

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use resumecraft_core::{validate_key, Config};

use crate::output::{Output, OutputFormat};

const VALID_KEYS: &str = "data_dir, storage_key, share_base_url, log_file";

/// Show current configuration
pub fn show(config_path: Option<&PathBuf>, output: &Output) -> Result<()> {
    let config =
        Config::load_with_cli_override(config_path).context("Failed to load configuration")?;

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "data_dir": config.data_dir,
                    "storage_key": config.storage_key,
                    "share_base_url": config.share_base_url,
                    "log_file": config.log_file
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", config.data_dir.display());
        }
        OutputFormat::Human => {
            let effective_path = config_path
                .cloned()
                .unwrap_or_else(Config::config_file_path);
            println!("Configuration:");
            println!("  data_dir:       {}", config.data_dir.display());
            println!("  storage_key:    {}", config.storage_key);
            println!("  share_base_url: {}", config.share_base_url);
            println!(
                "  log_file:       {}",
                config
                    .log_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(not set)".to_string())
            );
            println!();
            println!("Config file: {}", effective_path.display());
        }
    }

    Ok(())
}

/// Apply one `key = value` change to a loaded config
fn apply(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "data_dir" => {
            if value.is_empty() {
                bail!("data_dir cannot be empty");
            }
            config.data_dir = value.into();
        }
        "storage_key" => {
            if value.is_empty() {
                bail!("storage_key cannot be empty");
            }
            validate_key(value)?;
            config.storage_key = value.to_string();
        }
        "share_base_url" => {
            if value.is_empty() {
                bail!("share_base_url cannot be empty");
            }
            config.share_base_url = value.to_string();
        }
        "log_file" => {
            config.log_file = if value.is_empty() || value == "none" {
                None
            } else {
                Some(value.into())
            };
        }
        _ => {
            bail!(
                "Unknown configuration key: '{}'\nValid keys: {}",
                key,
                VALID_KEYS
            );
        }
    }
    Ok(())
}

/// Set a configuration value
pub fn set(
    key: String,
    value: String,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    let mut config =
        Config::load_with_cli_override(config_path).context("Failed to load configuration")?;

    apply(&mut config, &key, &value)?;

    // Save to the CLI-specified path or default
    let save_path = config_path
        .cloned()
        .unwrap_or_else(Config::config_file_path);
    config
        .save_to_path(&save_path)
        .context("Failed to save configuration")?;

    output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_known_keys() {
        let mut config = Config::default();

        apply(&mut config, "storage_key", "work-cv").unwrap();
        apply(&mut config, "share_base_url", "https://cv.example.com").unwrap();
        apply(&mut config, "log_file", "/tmp/resumecraft.log").unwrap();

        assert_eq!(config.storage_key, "work-cv");
        assert_eq!(config.share_base_url, "https://cv.example.com");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/resumecraft.log")));

        apply(&mut config, "log_file", "none").unwrap();
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_apply_rejects_bad_input() {
        let mut config = Config::default();

        let err = apply(&mut config, "sync_url", "x").unwrap_err();
        assert!(err.to_string().contains("Unknown configuration key"));
        assert!(apply(&mut config, "storage_key", "").is_err());
        let err = apply(&mut config, "storage_key", "../escaped").unwrap_err();
        assert!(err.to_string().contains("Invalid storage key"));
        assert!(apply(&mut config, "storage_key", "a/b").is_err());
        assert_eq!(config.storage_key, "resume-storage");
    }
}
