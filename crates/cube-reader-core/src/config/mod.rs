//! Configuration loading and saving

mod paths;

pub use paths::*;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::palette::Palette;
use crate::vision::DEFAULT_SETTLE;

/// Configuration for cube-reader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Reference colors per viewing side
    pub palette: Palette,
    /// Default sample layout; relative paths resolve against the config dir
    pub layout_path: Option<PathBuf>,
    /// Pause before each pointer move while checking positions, in ms
    pub settle_ms: u64,
    /// Logical screen size that captures are rescaled to
    pub screen_size: Option<(u32, u32)>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            layout_path: None,
            settle_ms: DEFAULT_SETTLE.as_millis() as u64,
            screen_size: None,
        }
    }
}

impl Config {
    /// Load config from the default location, falling back to defaults if
    /// it is missing or unreadable
    pub fn load() -> Self {
        let Some(path) = default_config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content).map_err(|e| Error::Json {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        match default_config_path() {
            Some(path) => self.save_to(&path),
            None => Err(Error::Other("No config directory on this platform".into())),
        }
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    /// Default layout path, resolved against the config directory
    pub fn layout_path(&self) -> Option<PathBuf> {
        let path = self.layout_path.as_ref()?;
        Some(match config_dir() {
            Some(dir) => resolve_relative(&dir, path),
            None => path.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.settle(), Duration::from_millis(200));
        assert_eq!(config.palette, Palette::default());
        assert!(config.layout_path().is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"settle_ms": 50}"#).unwrap();
        assert_eq!(config.settle_ms, 50);
        assert_eq!(config.palette.len(), 6);
        assert_eq!(config.screen_size, None);
    }

    #[test]
    fn test_empty_palette_rejected() {
        assert!(serde_json::from_str::<Config>(r#"{"palette": []}"#).is_err());
    }
}
