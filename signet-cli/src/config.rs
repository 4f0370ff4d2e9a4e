//! CLI configuration handling.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How built credential sets are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Path to the configuration file that was loaded.
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Logging level used when `RUST_LOG` is unset.
    pub log_level: String,

    /// Default output format.
    pub format: OutputFormat,

    /// Print secret values instead of `[REDACTED]`.
    pub reveal_secrets: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            log_level: "info".to_string(),
            format: OutputFormat::Text,
            reveal_secrets: false,
        }
    }
}

/// Load configuration from the default location or fall back to defaults.
pub fn load_config() -> Result<CliConfig> {
    let config_path = project_dirs()
        .map(|d| d.config_dir().join("cli.toml"))
        .unwrap_or_else(|| PathBuf::from("signet.toml"));

    load_config_from(&config_path)
}

/// Load configuration from `path`; a missing file yields defaults.
pub fn load_config_from(path: &Path) -> Result<CliConfig> {
    let mut config = if path.exists() {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))?
    } else {
        CliConfig::default()
    };

    config.config_path = path.to_path_buf();
    Ok(config)
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "raibid-labs", "signet")
}
