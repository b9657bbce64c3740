//! Output file writing.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("directory {path} can not be created: {source}")]
    CreateDir {
        path: String,
        source: std::io::Error,
    },

    #[error("file {path} can not be created: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

/// Computed destination for a group: `resources/<group>/resources.yaml`.
pub fn default_output_path(group: &str) -> PathBuf {
    PathBuf::from("resources").join(group).join("resources.yaml")
}

/// Write `text` to `path`, creating parent directories as needed.
pub fn write_rendered(text: &str, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
                path: parent.display().to_string(),
                source,
            })?;
        }
    }

    fs::write(path, text).map_err(|source| OutputError::Write {
        path: path.display().to_string(),
        source,
    })
}
