use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Looked up in the working directory at startup.
pub const CONFIG_FILE: &str = "agent_grid.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config {0}: {1}")]
    Io(String, #[source] std::io::Error),
    #[error("Invalid config {0}: {1}")]
    Parse(String, #[source] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub target_fps: u32,
    /// TrueType font for the sidebar; system fonts are searched when unset.
    pub font_path: Option<PathBuf>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Agents".to_string(),
            width: 1000,
            height: 700,
            target_fps: 30,
            font_path: None,
        }
    }
}

impl ViewerConfig {
    pub fn from_json_str(source: &str, origin: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(source)
            .map_err(|e| ConfigError::Parse(origin.to_string(), e))?;
        config.target_fps = config.target_fps.max(1);
        Ok(config)
    }

    /// Reads `path`. `Ok(None)` when the file does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        let origin = path.display().to_string();
        match std::fs::read_to_string(path) {
            Ok(source) => Self::from_json_str(&source, &origin).map(Some),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(ConfigError::Io(origin, err)),
        }
    }

    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(Some(config)) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Ok(None) => Self::default(),
            Err(err) => {
                log::warn!("{}; using defaults", err);
                Self::default()
            }
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.target_fps.max(1)
    }
}
