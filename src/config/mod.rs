//! Group configuration loading.
//!
//! The config file is a YAML mapping from group name (a Kubernetes
//! namespace) to optional per-group overrides:
//!
//! ```yaml
//! payments:
//!   label_args: container!~"job|nginx|POD"
//!   remove_pods:
//!     - payments-cronjob
//! staging:
//! ```

pub mod types;

pub use types::{CalcConfig, GroupConfig};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default config file name, resolved against the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "calc_config.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },
}

/// Load the group configuration from `path`.
///
/// Failures are reported here, at the point of origin, rather than
/// surfacing later as lookups on missing data.
pub fn load_config(path: &Path) -> Result<CalcConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;

    serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}
