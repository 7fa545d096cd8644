//! Settings file management

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::deploy::fsm::SimulationSettings;
use crate::errors::PlatformError;
use crate::logs::LogLevel;

/// Default settings file, relative to the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "xistra.json";

/// Service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Emit JSON log lines
    #[serde(default)]
    pub log_json: bool,

    /// Directory for rolling log files
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerSettings,

    /// Simulation timings
    #[serde(default)]
    pub simulation: SimulationFileSettings,

    /// Start with the dashboard's mock data
    #[serde(default = "default_true")]
    pub seed_mock_data: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_json: false,
            log_dir: None,
            server: ServerSettings::default(),
            simulation: SimulationFileSettings::default(),
            seed_mock_data: true,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file
    pub async fn load(path: &Path) -> Result<Self, PlatformError> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading settings file {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&contents)
            .with_context(|| format!("parsing settings file {}", path.display()))?;
        Ok(settings)
    }

    /// Read settings from `path`, falling back to defaults when it does not exist
    pub async fn load_or_default(path: &Path) -> Result<(Self, bool), PlatformError> {
        if tokio::fs::metadata(path).await.is_err() {
            return Ok((Self::default(), false));
        }
        Ok((Self::load(path).await?, true))
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Simulation timings as written in the settings file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationFileSettings {
    #[serde(default = "default_build_delay_ms")]
    pub build_delay_ms: u64,

    #[serde(default = "default_redeploy_delay_ms")]
    pub redeploy_delay_ms: u64,

    #[serde(default = "default_verify_delay_ms")]
    pub domain_verify_delay_ms: u64,

    #[serde(default = "default_preview_domain")]
    pub preview_domain: String,
}

fn default_build_delay_ms() -> u64 {
    3000
}

fn default_redeploy_delay_ms() -> u64 {
    2000
}

fn default_verify_delay_ms() -> u64 {
    3000
}

fn default_preview_domain() -> String {
    "vercel.app".to_string()
}

impl Default for SimulationFileSettings {
    fn default() -> Self {
        Self {
            build_delay_ms: default_build_delay_ms(),
            redeploy_delay_ms: default_redeploy_delay_ms(),
            domain_verify_delay_ms: default_verify_delay_ms(),
            preview_domain: default_preview_domain(),
        }
    }
}

impl From<&SimulationFileSettings> for SimulationSettings {
    fn from(settings: &SimulationFileSettings) -> Self {
        Self {
            build_delay: Duration::from_millis(settings.build_delay_ms),
            redeploy_delay: Duration::from_millis(settings.redeploy_delay_ms),
            verify_delay: Duration::from_millis(settings.domain_verify_delay_ms),
            preview_domain: settings.preview_domain.clone(),
        }
    }
}
