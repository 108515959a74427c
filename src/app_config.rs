use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Path to the root README document
    #[serde(default = "default_readme_path")]
    pub readme_path: String,

    /// Directory that receives translated locale files
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Directory holding optional per-language guidance files
    #[serde(default = "default_guidance_dir")]
    pub guidance_dir: String,

    /// Minimum prose chunk length before merging with the successor
    #[serde(default = "default_min_chunk_chars")]
    pub min_chunk_chars: usize,

    /// Oracle config
    #[serde(default)]
    pub oracle: OracleConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation oracle endpoint configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OracleConfig {
    /// Service endpoint URL
    #[serde(default = "default_oracle_endpoint")]
    pub endpoint: String,

    /// Model name
    #[serde(default = "default_oracle_model")]
    pub model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            endpoint: default_oracle_endpoint(),
            model: default_oracle_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            readme_path: default_readme_path(),
            output_dir: default_output_dir(),
            guidance_dir: default_guidance_dir(),
            min_chunk_chars: default_min_chunk_chars(),
            oracle: OracleConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Validate the configuration after loading and CLI overrides
    pub fn validate(&self) -> Result<()> {
        if self.readme_path.trim().is_empty() {
            return Err(anyhow!("readme_path must not be empty"));
        }

        if self.output_dir.trim().is_empty() {
            return Err(anyhow!("output_dir must not be empty"));
        }

        if self.min_chunk_chars == 0 {
            return Err(anyhow!("min_chunk_chars must be greater than zero"));
        }

        if self.oracle.endpoint.trim().is_empty() {
            return Err(anyhow!("oracle endpoint must not be empty"));
        }

        if self.oracle.model.trim().is_empty() {
            return Err(anyhow!("oracle model must not be empty"));
        }

        if self.oracle.timeout_secs == 0 {
            return Err(anyhow!("oracle timeout must be greater than zero"));
        }

        Ok(())
    }
}

/// Log level setting
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    // @level: Errors only
    Error,
    // @level: Errors and warnings
    Warn,
    // @level: Standard output
    #[default]
    Info,
    // @level: Verbose output
    Debug,
    // @level: Everything
    Trace,
}

fn default_readme_path() -> String {
    "README.md".to_string()
}

fn default_output_dir() -> String {
    "locales".to_string()
}

fn default_guidance_dir() -> String {
    "guidance".to_string()
}

fn default_min_chunk_chars() -> usize {
    50
}

fn default_oracle_endpoint() -> String {
    "http://localhost:11434".to_string()
}

fn default_oracle_model() -> String {
    "aya-expanse:8b".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}
