//! Search configuration for graphseek
//!
//! Read from `--config <path>` when given, otherwise from
//! `~/.config/graphseek/config.toml` (or `$GRAPHSEEK_CONFIG_DIR/config.toml`).
//! A missing file means defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SeekError};
use crate::graph::Weight;

pub use types::SearchConfig;

const CONFIG_DIR: &str = "graphseek";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "GRAPHSEEK_CONFIG_DIR";

impl SearchConfig {
    /// Default location of the config file
    pub fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    SeekError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            SeekError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: SearchConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist; the default location may be absent.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => Self::load_or_default(&Self::config_path()?),
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SeekError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Default edge weight as a validated `Weight`
    pub fn default_weight(&self) -> Result<Weight> {
        Weight::new(self.default_weight)
    }

    fn validate(&self) -> Result<()> {
        self.default_weight()?;
        if self.max_queries == Some(0) {
            crate::bail_usage!("max_queries must be at least 1");
        }
        Ok(())
    }
}
