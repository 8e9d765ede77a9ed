//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.festive/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The agent endpoint, API key, user id and agent id have no built-in
//! values. If any of them is unset after resolution, startup fails with
//! `ConfigError::Missing`.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::agent::AgentSettings;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FestiveConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub agent: AgentConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AgentConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub user_id: Option<String>,
    pub agent_id: Option<String>,
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub endpoint: Option<String>,
    pub user_id: Option<String>,
    pub agent_id: Option<String>,
    pub log_file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "festive.log";

pub const ENV_API_URL: &str = "FESTIVE_API_URL";
pub const ENV_API_KEY: &str = "FESTIVE_API_KEY";
pub const ENV_USER_ID: &str = "FESTIVE_USER_ID";
pub const ENV_AGENT_ID: &str = "FESTIVE_AGENT_ID";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub agent: AgentSettings,
    pub log_file: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    /// A required setting is unset everywhere it could come from.
    Missing { setting: &'static str, env: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Missing { setting, env } => write!(
                f,
                "missing agent {setting}: set {env} or [agent] {setting} in ~/.festive/config.toml"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.festive/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".festive").join("config.toml"))
}

/// Load config from `~/.festive/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FestiveConfig::default()`.
pub fn load_config() -> Result<FestiveConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(FestiveConfig::default())
        }
    }
}

pub fn load_config_from(path: &Path) -> Result<FestiveConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(FestiveConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: FestiveConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    // Don't log the API key.
    debug!(
        "Config: endpoint={:?}, user_id={:?}, agent_id={:?}, api_key set={}",
        config.agent.endpoint,
        config.agent.user_id,
        config.agent.agent_id,
        config.agent.api_key.is_some()
    );
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# FestiveMailer Configuration
# Override hierarchy: defaults → this file → env vars → CLI flags.
# The four [agent] settings are required (here or via env vars).

# [general]
# log_file = "festive.log"

# [agent]
# endpoint = "https://agent.example.com/v3/inference/chat/"   # Or FESTIVE_API_URL
# api_key = "sk-..."                                           # Or FESTIVE_API_KEY
# user_id = "you@example.com"                                  # Or FESTIVE_USER_ID
# agent_id = "your-agent-id"                                   # Or FESTIVE_AGENT_ID
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

/// Resolve the final config by collapsing: config file → env vars → CLI.
pub fn resolve(config: &FestiveConfig, cli: &CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    resolve_with(config, cli, |key| std::env::var(key).ok())
}

fn nonblank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Same as `resolve`, with the environment supplied by the caller.
pub fn resolve_with(
    config: &FestiveConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    let pick = |cli_value: &Option<String>,
                env_key: &'static str,
                file_value: &Option<String>,
                setting: &'static str|
     -> Result<String, ConfigError> {
        // A blank value at one level falls through to the next
        cli_value
            .clone()
            .filter(|v| nonblank(v))
            .or_else(|| env(env_key).filter(|v| nonblank(v)))
            .or_else(|| file_value.clone().filter(|v| nonblank(v)))
            .ok_or(ConfigError::Missing { setting, env: env_key })
    };

    let endpoint = pick(&cli.endpoint, ENV_API_URL, &config.agent.endpoint, "endpoint")?;
    let api_key = pick(&None, ENV_API_KEY, &config.agent.api_key, "api_key")?;
    let user_id = pick(&cli.user_id, ENV_USER_ID, &config.agent.user_id, "user_id")?;
    let agent_id = pick(&cli.agent_id, ENV_AGENT_ID, &config.agent.agent_id, "agent_id")?;

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    Ok(ResolvedConfig {
        agent: AgentSettings {
            endpoint,
            api_key,
            user_id,
            agent_id,
        },
        log_file,
    })
}
