//! Config loading and validation.

use super::model::Config;
use crate::error::{IbsubError, Result};
use std::path::{Path, PathBuf};

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV_VAR: &str = "IBSUB_CONFIG";

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(IbsubError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            IbsubError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve and load the active configuration.
    ///
    /// An explicit path wins over `IBSUB_CONFIG`. With neither, the defaults
    /// are returned and no file is touched.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit.map(Path::to_path_buf).or_else(|| {
            std::env::var_os(CONFIG_ENV_VAR)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        });

        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as null; treat it as "all defaults".
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| IbsubError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// Command names and the default queue must be non-blank.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("submit_command", &self.submit_command),
            ("queue_command", &self.queue_command),
            ("group_command", &self.group_command),
            ("default_queue", &self.default_queue),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(IbsubError::UserError(format!(
                    "config validation failed: {} must not be empty",
                    name
                )));
            }
        }

        Ok(())
    }
}
