//! Configuration management for Bucketlist
//!
//! This module handles loading, parsing, and validation of configuration files.
//! Without a configuration file the built-in defaults reproduce the seed buckets.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_BUCKET, DEFAULT_INPUT_COLOR, DEFAULT_INPUT_PLACEHOLDER,
    DEFAULT_INPUT_WIDTH, INPUT_MAX_WIDTH, RESERVED_KEYS, SEED_BUCKETS,
};
use crate::utils::color::parse_hex_color;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub logging: LoggingConfig,
    pub buckets: Vec<BucketConfig>,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Allow appending new tasks with the "n" key
    pub insert_enabled: bool,
    /// Placeholder shown in the empty insert input
    pub input_placeholder: String,
    /// Display width of the insert input in columns
    pub input_width: u16,
    /// Color of the text input, as `#rrggbb`
    pub input_color: String,
    /// Bucket selected on startup
    pub default_bucket: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
}

/// A bucket definition with its seed tasks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketConfig {
    pub name: String,
    /// Key selecting this bucket in navigation mode
    pub key: char,
    /// Display color, as `#rrggbb`
    pub color: String,
    #[serde(default)]
    pub tasks: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
            buckets: default_buckets(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            insert_enabled: true,
            input_placeholder: DEFAULT_INPUT_PLACEHOLDER.to_string(),
            input_width: DEFAULT_INPUT_WIDTH,
            input_color: DEFAULT_INPUT_COLOR.to_string(),
            default_bucket: DEFAULT_BUCKET.to_string(),
        }
    }
}

fn default_buckets() -> Vec<BucketConfig> {
    SEED_BUCKETS
        .iter()
        .map(|(name, key, color, tasks)| BucketConfig {
            name: (*name).to_string(),
            key: *key,
            color: (*color).to_string(),
            tasks: tasks.iter().map(|t| (*t).to_string()).collect(),
        })
        .collect()
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file();

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        Self::get_default_config_path().ok().filter(|path| path.exists())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.input_width == 0 || self.ui.input_width > INPUT_MAX_WIDTH {
            anyhow::bail!(
                "input_width must be between 1 and {} columns, got {}",
                INPUT_MAX_WIDTH,
                self.ui.input_width
            );
        }

        parse_hex_color(&self.ui.input_color).context("Invalid input_color")?;

        self.validate_buckets()?;

        if self.bucket(&self.ui.default_bucket).is_none() {
            anyhow::bail!(
                "default_bucket '{}' not found. Available buckets: {}",
                self.ui.default_bucket,
                self.bucket_names().join(", ")
            );
        }

        Ok(())
    }

    /// Validate bucket definitions
    fn validate_buckets(&self) -> Result<()> {
        if self.buckets.is_empty() {
            anyhow::bail!("at least one bucket must be configured");
        }

        let mut names = HashSet::new();
        let mut keys = HashSet::new();

        for bucket in &self.buckets {
            if bucket.name.trim().is_empty() {
                anyhow::bail!("bucket name cannot be empty");
            }
            if !names.insert(bucket.name.as_str()) {
                anyhow::bail!("duplicate bucket name '{}'", bucket.name);
            }
            if RESERVED_KEYS.contains(&bucket.key) {
                anyhow::bail!("Bucket '{}': key '{}' is reserved", bucket.name, bucket.key);
            }
            if !keys.insert(bucket.key) {
                anyhow::bail!("Bucket '{}': key '{}' is already used", bucket.name, bucket.key);
            }
            parse_hex_color(&bucket.color).with_context(|| format!("Bucket '{}': invalid color", bucket.name))?;
        }

        Ok(())
    }

    /// Get a bucket definition by name
    pub fn bucket(&self, name: &str) -> Option<&BucketConfig> {
        self.buckets.iter().find(|b| b.name == name)
    }

    /// Names of all configured buckets, in configuration order
    pub fn bucket_names(&self) -> Vec<String> {
        self.buckets.iter().map(|b| b.name.clone()).collect()
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Bucketlist Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
