use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Describes which network to load and how.
///
/// Built with [`NetworkConfig::with`]:
///
/// ```
/// use dsstne::NetworkConfig;
///
/// let config = NetworkConfig::with()
///     .network_file_path("models/gl.json")
///     .batch_size(64)
///     .build()
///     .unwrap();
/// assert_eq!(config.batch_size(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    network_file_path: PathBuf,
    batch_size: u32,
}

impl NetworkConfig {
    pub const DEFAULT_BATCH_SIZE: u32 = 32;

    /// Starts a new builder with no path set.
    pub fn with() -> NetworkConfigBuilder {
        NetworkConfigBuilder::default()
    }

    pub fn network_file_path(&self) -> &Path {
        &self.network_file_path
    }

    pub fn batch_size(&self) -> u32 {
        self.batch_size
    }
}

#[derive(Debug, Clone, Default)]
pub struct NetworkConfigBuilder {
    network_file_path: Option<PathBuf>,
    batch_size: Option<u32>,
}

impl NetworkConfigBuilder {
    pub fn network_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.network_file_path = Some(path.into());
        self
    }

    /// Number of examples the engine processes at once. Defaults to 32.
    pub fn batch_size(mut self, batch_size: u32) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    /// Validates the collected fields. Touches no files.
    pub fn build(self) -> Result<NetworkConfig> {
        let network_file_path = self.network_file_path.ok_or(Error::Validation {
            field: "network_file_path",
            reason: "is required".to_string(),
        })?;
        if network_file_path.as_os_str().is_empty() {
            return Err(Error::Validation {
                field: "network_file_path",
                reason: "must not be empty".to_string(),
            });
        }

        let batch_size = self.batch_size.unwrap_or(NetworkConfig::DEFAULT_BATCH_SIZE);
        if batch_size == 0 {
            return Err(Error::Validation {
                field: "batch_size",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(NetworkConfig { network_file_path, batch_size })
    }
}
