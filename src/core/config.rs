//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.firstaid/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::DEFAULT_ASK_PATH;
use crate::core::submission::DEFAULT_SUBMIT_LABEL;
use crate::core::tabs::UPLOAD_TAB;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FirstAidConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub submit_label: Option<String>,
    /// Pane shown at startup: "upload" or "describe"
    pub start_tab: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    pub base_url: Option<String>,
    pub ask_path: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_LOG_LEVEL: &str = "debug";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub ask_path: String,
    pub log_level: String,
    pub submit_label: String,
    pub start_tab: String,
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Default)]
pub struct CliOverrides<'a> {
    pub base_url: Option<&'a str>,
    pub ask_path: Option<&'a str>,
    pub log_level: Option<&'a str>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.firstaid/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".firstaid").join("config.toml"))
}

/// Load config from `~/.firstaid/config.toml`.
pub fn load_config() -> Result<FirstAidConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(FirstAidConfig::default())
        }
    }
}

/// If the file doesn't exist, generates a commented-out default and
/// returns `FirstAidConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<FirstAidConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(FirstAidConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: FirstAidConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# First-Aid Assistant Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "debug"                # "error", "warn", "info", "debug", "trace"
# submit_label = "Get First-Aid"
# start_tab = "upload"               # "upload" or "describe"

# [server]
# base_url = "http://localhost:5000" # Or set FIRSTAID_BASE_URL env var
# ask_path = "/ask"                  # Or set FIRSTAID_ASK_PATH env var
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FirstAidConfig, cli: &CliOverrides<'_>) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("FIRSTAID_BASE_URL").ok())
        .or_else(|| config.server.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Ask path: CLI → env → config → default
    let ask_path = cli
        .ask_path
        .map(|s| s.to_string())
        .or_else(|| std::env::var("FIRSTAID_ASK_PATH").ok())
        .or_else(|| config.server.ask_path.clone())
        .unwrap_or_else(|| DEFAULT_ASK_PATH.to_string());

    let log_level = cli
        .log_level
        .map(|s| s.to_string())
        .or_else(|| config.general.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    ResolvedConfig {
        base_url,
        ask_path,
        log_level,
        submit_label: config
            .general
            .submit_label
            .clone()
            .unwrap_or_else(|| DEFAULT_SUBMIT_LABEL.to_string()),
        start_tab: config
            .general
            .start_tab
            .clone()
            .unwrap_or_else(|| UPLOAD_TAB.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = FirstAidConfig::default();
        assert!(config.server.base_url.is_none());
        assert!(config.general.submit_label.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = FirstAidConfig::default();
        let cli = CliOverrides {
            base_url: Some(DEFAULT_BASE_URL),
            ..Default::default()
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(resolved.submit_label, DEFAULT_SUBMIT_LABEL);
        assert_eq!(resolved.start_tab, UPLOAD_TAB);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = FirstAidConfig {
            general: GeneralConfig {
                log_level: Some("warn".to_string()),
                submit_label: Some("Help me".to_string()),
                start_tab: Some("describe".to_string()),
            },
            server: ServerConfig {
                base_url: Some("http://10.0.0.2:8080".to_string()),
                ask_path: Some("/v2/ask".to_string()),
            },
        };
        // CLI pins the env-overridable fields so the test doesn't depend on the environment
        let cli = CliOverrides {
            base_url: None,
            ask_path: Some("/v2/ask"),
            log_level: None,
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.ask_path, "/v2/ask");
        assert_eq!(resolved.log_level, "warn");
        assert_eq!(resolved.submit_label, "Help me");
        assert_eq!(resolved.start_tab, "describe");
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = FirstAidConfig {
            server: ServerConfig {
                base_url: Some("http://from-config".to_string()),
                ask_path: Some("/from-config".to_string()),
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            base_url: Some("http://from-cli"),
            ask_path: Some("/from-cli"),
            log_level: Some("info"),
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.base_url, "http://from-cli");
        assert_eq!(resolved.ask_path, "/from-cli");
        assert_eq!(resolved.log_level, "info");
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
log_level = "info"
submit_label = "Get First-Aid"

[server]
base_url = "http://192.168.1.100:5000"
ask_path = "/ask"
"#;
        let config: FirstAidConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level.as_deref(), Some("info"));
        assert_eq!(
            config.server.base_url.as_deref(),
            Some("http://192.168.1.100:5000")
        );
        assert_eq!(config.server.ask_path.as_deref(), Some("/ask"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[server]
base_url = "http://example.test"
"#;
        let config: FirstAidConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.base_url.as_deref(), Some("http://example.test"));
        assert!(config.server.ask_path.is_none());
        assert!(config.general.log_level.is_none());
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = load_config_from(&path).unwrap();
        assert!(config.server.base_url.is_none());
        assert!(path.exists());

        // The generated file is all comments, so it parses back to defaults
        let reloaded = load_config_from(&path).unwrap();
        assert!(reloaded.general.submit_label.is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[server\nbase_url = ").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }
}
